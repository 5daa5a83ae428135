//! Per-character action registry.

use std::collections::HashMap;

use log::debug;

use crate::error::ActionError;

use super::{ActionDefinition, ActionId};

/// Mapping from [`ActionId`] to the [`ActionDefinition`] registered under it.
///
/// The registry lives as long as the character that owns it; definitions are
/// never removed.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
	actions: HashMap<ActionId, ActionDefinition>,
}

impl ActionRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			actions: HashMap::new(),
		}
	}

	/// Registers `definition` under `id`.
	///
	/// Links to other actions are not checked here since they may be
	/// registered later; see [`validate_links`](Self::validate_links).
	///
	/// # Errors
	///
	/// - [`ActionError::ReservedId`] if `id` is [`ActionId::NONE`]
	/// - [`ActionError::EmptyFrames`] if the frame sequence is empty
	/// - [`ActionError::DuplicateAction`] if `id` is already registered
	pub fn register(
		&mut self,
		id: ActionId,
		mut definition: ActionDefinition,
	) -> Result<(), ActionError> {
		if id.is_none() {
			return Err(ActionError::ReservedId {
				id,
			});
		}
		if definition.frames().is_empty() {
			return Err(ActionError::EmptyFrames {
				id,
			});
		}
		if self.actions.contains_key(&id) {
			return Err(ActionError::DuplicateAction {
				id,
			});
		}

		definition.set_id(id);
		debug!("Registered {definition}");
		self.actions.insert(id, definition);
		Ok(())
	}

	/// Returns the definition registered under `id`.
	pub fn get(&self, id: ActionId) -> Option<&ActionDefinition> {
		self.actions.get(&id)
	}

	/// Returns the definition registered under `id`, or
	/// [`ActionError::UnknownAction`].
	pub fn require(&self, id: ActionId) -> Result<&ActionDefinition, ActionError> {
		self.get(id).ok_or(ActionError::UnknownAction {
			id,
		})
	}

	pub(crate) fn get_mut(&mut self, id: ActionId) -> Option<&mut ActionDefinition> {
		self.actions.get_mut(&id)
	}

	/// Returns `true` if an action is registered under `id`.
	pub fn contains(&self, id: ActionId) -> bool {
		self.actions.contains_key(&id)
	}

	/// Returns the number of registered actions.
	pub fn len(&self) -> usize {
		self.actions.len()
	}

	/// Returns `true` if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}

	/// Iterates over registered actions in ascending id order.
	pub fn iter(&self) -> impl Iterator<Item = (ActionId, &ActionDefinition)> {
		let mut ids: Vec<_> = self.actions.keys().copied().collect();
		ids.sort_unstable();
		ids.into_iter().filter_map(|id| self.actions.get(&id).map(|def| (id, def)))
	}

	/// Checks that every pre/post link points at a registered action.
	///
	/// # Errors
	///
	/// Returns [`ActionError::UnknownLink`] for the first dangling link found
	/// (in ascending id order).
	pub fn validate_links(&self) -> Result<(), ActionError> {
		for (id, definition) in self.iter() {
			self.check_links(id, definition)?;
		}
		Ok(())
	}

	/// Checks the links of `definition`, about to be stored as `id`, against
	/// the registered actions. A link back to `id` itself is accepted.
	///
	/// # Errors
	///
	/// Returns [`ActionError::UnknownLink`] for the first dangling link.
	pub fn check_links(
		&self,
		id: ActionId,
		definition: &ActionDefinition,
	) -> Result<(), ActionError> {
		for (kind, link) in definition.links() {
			if link != id && !self.contains(link) {
				return Err(ActionError::UnknownLink {
					id,
					link,
					kind,
				});
			}
		}
		Ok(())
	}
}
