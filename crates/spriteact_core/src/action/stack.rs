//! The action stack and its push protocol.

use log::{debug, warn};

use crate::{constants::MAX_CHAIN_DEPTH, error::ActionError};

use super::{ActionId, ActionRegistry, ExecutionState};

/// What a call to [`ActionStack::push`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
	/// The stack was empty and the action became its base
	Booted,
	/// A transition happened; `count` entries were pushed (the action plus its
	/// expanded pre/post chain)
	Pushed {
		/// Number of entries added
		count: usize,
	},
	/// The action was already on top and finished; it was set running again
	Rearmed,
	/// The action was already on top and unfinished; nothing changed
	AlreadyActive,
}

/// Ordered list of pending actions, top = currently executing.
///
/// The stack stores ids only; execution states live on the definitions in the
/// [`ActionRegistry`] passed to each mutating call. Once booted the stack is
/// never empty: pops that would remove the base action are refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStack {
	entries: Vec<ActionId>,
}

impl ActionStack {
	/// Creates an empty, not yet booted stack.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Returns the id of the active action.
	pub fn top(&self) -> Option<ActionId> {
		self.entries.last().copied()
	}

	/// Returns the id at the bottom of the stack.
	pub fn base(&self) -> Option<ActionId> {
		self.entries.first().copied()
	}

	/// Returns the number of entries.
	pub fn depth(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` before the base action has been pushed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the entries from top to bottom.
	pub fn ids(&self) -> Vec<ActionId> {
		self.entries.iter().rev().copied().collect()
	}

	/// Requests action `id`.
	///
	/// - Empty stack: `id` is pushed as-is and becomes the base.
	/// - `id` already on top: a finished action is re-armed to running,
	///   otherwise nothing happens.
	/// - Otherwise the current top is reset to not started and `id` is pushed
	///   together with its links, giving `[pre, id, post, ...]` from the top.
	///   Links are expanded recursively, so a pre-action may carry its own
	///   pre/post links.
	///
	/// The expansion is computed before the stack is touched; on error the
	/// stack and all execution states are left unchanged.
	///
	/// # Errors
	///
	/// - [`ActionError::UnknownAction`] if `id` or any id reached through its
	///   links is not registered
	/// - [`ActionError::ChainTooDeep`] if link expansion nests deeper than
	///   [`MAX_CHAIN_DEPTH`]
	pub fn push(
		&mut self,
		registry: &mut ActionRegistry,
		id: ActionId,
	) -> Result<PushOutcome, ActionError> {
		registry.require(id)?;

		let Some(top) = self.top() else {
			debug!("Booting action stack with {id}");
			self.entries.push(id);
			return Ok(PushOutcome::Booted);
		};

		if top == id {
			let Some(active) = registry.get_mut(id) else {
				return Err(ActionError::UnknownAction {
					id,
				});
			};
			if active.state() == ExecutionState::Finished {
				debug!("Re-arming finished {id}");
				active.set_state(ExecutionState::Running);
				return Ok(PushOutcome::Rearmed);
			}
			return Ok(PushOutcome::AlreadyActive);
		}

		let mut plan = Vec::new();
		Self::expand(registry, id, Some(top), 0, &mut plan)?;
		debug!("Pushing {id} as {plan:?} over {top}");

		for &next in &plan {
			if let Some(covered) = self.top()
				&& let Some(definition) = registry.get_mut(covered)
			{
				definition.set_state(ExecutionState::NotStarted);
			}
			self.entries.push(next);
		}

		Ok(PushOutcome::Pushed {
			count: plan.len(),
		})
	}

	/// Appends to `plan` the ids a push of `id` over `top` adds, in push
	/// order, and returns the resulting top.
	fn expand(
		registry: &ActionRegistry,
		id: ActionId,
		top: Option<ActionId>,
		depth: usize,
		plan: &mut Vec<ActionId>,
	) -> Result<Option<ActionId>, ActionError> {
		if top == Some(id) {
			return Ok(top);
		}
		if depth > MAX_CHAIN_DEPTH {
			return Err(ActionError::ChainTooDeep {
				id,
				limit: MAX_CHAIN_DEPTH,
			});
		}

		let definition = registry.require(id)?;
		let (pre, post) = (definition.pre_action(), definition.post_action());

		let mut top = top;
		if let Some(post) = post {
			top = Self::expand(registry, post, top, depth + 1, plan)?;
		}

		plan.push(id);
		top = Some(id);

		if let Some(pre) = pre {
			top = Self::expand(registry, pre, top, depth + 1, plan)?;
		}

		Ok(top)
	}

	/// Pops the active action and resets it to not started.
	///
	/// Returns `None` and leaves the stack alone when only the base action
	/// remains.
	pub fn pop(&mut self, registry: &mut ActionRegistry) -> Option<ActionId> {
		if self.entries.len() <= 1 {
			warn!("Refusing to pop the base action {:?}", self.top());
			return None;
		}

		let id = self.entries.pop()?;
		if let Some(definition) = registry.get_mut(id) {
			definition.set_state(ExecutionState::NotStarted);
		}
		debug!("Popped {id}, {:?} now active", self.top());
		Some(id)
	}

	/// Pops every entry above the nearest [`ActionId::IDLE`], cancelling any
	/// chain in progress. Never pops the base action.
	///
	/// Returns the number of entries removed.
	pub fn pop_until_base(&mut self, registry: &mut ActionRegistry) -> usize {
		let mut popped = 0;
		while self.entries.len() > 1 && self.top() != Some(ActionId::IDLE) {
			if self.pop(registry).is_none() {
				break;
			}
			popped += 1;
		}
		if popped > 0 {
			debug!("Cancelled {popped} pending action(s)");
		}
		popped
	}
}

impl std::fmt::Display for ActionStack {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[")?;
		for (i, id) in self.entries.iter().rev().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{id}")?;
		}
		write!(f, "]")
	}
}
