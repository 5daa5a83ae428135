//! Action definitions.

use serde::{Deserialize, Serialize};

use crate::error::{ActionError, LinkKind};

use super::{ActionId, ExecutionState};

fn default_continuous() -> bool {
	true
}

/// Description of one playable behavior.
///
/// A definition holds the frame sequence shown while the action plays, whether
/// the sequence loops, and optional links to actions that must play right
/// before or right after it. Only the execution state changes once the
/// definition is registered.
///
/// # Examples
///
/// ```
/// use spriteact_core::action::{ActionDefinition, ActionId};
///
/// let land = ActionId::new(4);
/// let fall = ActionDefinition::from_range(10, 13)?
///     .continuous(false)
///     .with_post_action(land);
///
/// assert_eq!(fall.frames(), &[10, 11, 12, 13]);
/// assert!(!fall.is_continuous());
/// assert_eq!(fall.post_action(), Some(land));
/// # Ok::<(), spriteact_core::ActionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
	frames: Vec<u16>,

	#[serde(default = "default_continuous")]
	continuous: bool,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pre_action: Option<ActionId>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	post_action: Option<ActionId>,

	#[serde(skip, default = "ActionDefinition::unregistered")]
	own_id: ActionId,

	#[serde(skip)]
	state: ExecutionState,
}

impl ActionDefinition {
	/// Creates a looping action without links.
	///
	/// Emptiness is checked when the definition is registered.
	pub fn new(frames: Vec<u16>) -> Self {
		Self {
			frames,
			continuous: true,
			pre_action: None,
			post_action: None,
			own_id: Self::unregistered(),
			state: ExecutionState::NotStarted,
		}
	}

	/// Creates a looping action playing frames `first..=last`.
	///
	/// # Errors
	///
	/// Returns [`ActionError::InvalidFrameRange`] if `last < first`.
	pub fn from_range(first: u16, last: u16) -> Result<Self, ActionError> {
		if last < first {
			return Err(ActionError::InvalidFrameRange {
				first,
				last,
			});
		}
		Ok(Self::new((first..=last).collect()))
	}

	fn unregistered() -> ActionId {
		ActionId::NONE
	}

	/// Sets whether the frame sequence loops (`true`) or freezes on its last
	/// frame and finishes (`false`).
	#[must_use]
	pub fn continuous(mut self, continuous: bool) -> Self {
		self.continuous = continuous;
		self
	}

	/// Links an action to play immediately before this one.
	///
	/// [`ActionId::NONE`] clears the link.
	#[must_use]
	pub fn with_pre_action(mut self, id: ActionId) -> Self {
		self.pre_action = id.into_option();
		self
	}

	/// Links an action to play immediately after this one.
	///
	/// [`ActionId::NONE`] clears the link.
	#[must_use]
	pub fn with_post_action(mut self, id: ActionId) -> Self {
		self.post_action = id.into_option();
		self
	}

	/// Returns the frame sequence.
	pub fn frames(&self) -> &[u16] {
		&self.frames
	}

	/// Returns the index of the last frame in the sequence.
	pub fn last_frame_index(&self) -> usize {
		self.frames.len().saturating_sub(1)
	}

	/// Returns `true` if the sequence loops.
	pub fn is_continuous(&self) -> bool {
		self.continuous
	}

	/// Returns the pre-action link.
	pub fn pre_action(&self) -> Option<ActionId> {
		self.pre_action
	}

	/// Returns the post-action link.
	pub fn post_action(&self) -> Option<ActionId> {
		self.post_action
	}

	/// Returns the id this definition is registered under, or
	/// [`ActionId::NONE`] before registration.
	pub fn id(&self) -> ActionId {
		self.own_id
	}

	/// Returns the current execution state.
	pub fn state(&self) -> ExecutionState {
		self.state
	}

	pub(crate) fn set_id(&mut self, id: ActionId) {
		self.own_id = id;
	}

	pub(crate) fn set_state(&mut self, state: ExecutionState) {
		self.state = state;
	}

	/// Linked ids, pre first.
	pub(crate) fn links(&self) -> impl Iterator<Item = (LinkKind, ActionId)> {
		self.pre_action
			.map(|id| (LinkKind::Pre, id))
			.into_iter()
			.chain(self.post_action.map(|id| (LinkKind::Post, id)))
	}
}

impl std::fmt::Display for ActionDefinition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Action{}({} frames, {}, {})",
			self.own_id,
			self.frames.len(),
			if self.continuous {
				"looping"
			} else {
				"one-shot"
			},
			self.state
		)
	}
}
