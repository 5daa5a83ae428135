//! Actions: what a character can do and how requests to do it are scheduled.
//!
//! # Overview
//!
//! Everything a character shows on screen is an *action*: standing idle,
//! walking, crouching before a jump, landing after a fall. Each action is an
//! [`ActionDefinition`] registered in the character's [`ActionRegistry`] under
//! an [`ActionId`]. Requests to perform an action go through the
//! [`ActionStack`], whose top entry is the action currently playing.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted ──(first tick)──▶ Running ──(last frame, non-looping)──▶ Finished
//!     ▲                                                                  │
//!     └──────────────────────────(popped)────────────────────────────────┘
//! ```
//!
//! An action interrupted by a push of a different action drops back to
//! [`ExecutionState::NotStarted`] so it restarts cleanly when it resurfaces.
//!
//! ## Chaining
//!
//! An action may name a pre-action (played right before it) and a
//! post-action (played right after it). Pushing such an action expands into
//! `[pre, action, post]` (top to bottom), so popping unwinds in play order.
//!
//! ```
//! use spriteact_core::action::{ActionDefinition, ActionId, ActionRegistry, ActionStack};
//!
//! const CROUCH: ActionId = ActionId::new(1);
//! const JUMP: ActionId = ActionId::new(2);
//! const LAND: ActionId = ActionId::new(3);
//!
//! # fn main() -> Result<(), spriteact_core::ActionError> {
//! let mut registry = ActionRegistry::new();
//! registry.register(ActionId::IDLE, ActionDefinition::new(vec![0, 1]))?;
//! registry.register(CROUCH, ActionDefinition::new(vec![2]).continuous(false))?;
//! registry.register(LAND, ActionDefinition::new(vec![4]).continuous(false))?;
//! registry.register(
//!     JUMP,
//!     ActionDefinition::new(vec![3])
//!         .continuous(false)
//!         .with_pre_action(CROUCH)
//!         .with_post_action(LAND),
//! )?;
//!
//! let mut stack = ActionStack::new();
//! stack.push(&mut registry, ActionId::IDLE)?;
//! stack.push(&mut registry, JUMP)?;
//! assert_eq!(stack.ids(), vec![CROUCH, JUMP, LAND, ActionId::IDLE]);
//! # Ok(())
//! # }
//! ```

mod definition;
mod hook;
mod registry;
mod stack;


use serde::{Deserialize, Serialize};

pub use self::definition::ActionDefinition;
pub use self::hook::ActionHook;
pub use self::registry::ActionRegistry;
pub use self::stack::{ActionStack, PushOutcome};

/// Identifier of an action, unique per character.
///
/// Two values are reserved: [`ActionId::NONE`] marks an absent link and can
/// never be registered, [`ActionId::IDLE`] is the base action every character
/// starts with and falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(i32);

impl ActionId {
	/// No action
	pub const NONE: Self = Self(-1);

	/// Base/idle action, always at the bottom of the stack
	pub const IDLE: Self = Self(0);

	/// Wraps a raw id.
	pub const fn new(raw: i32) -> Self {
		Self(raw)
	}

	/// Returns the raw id.
	pub const fn raw(self) -> i32 {
		self.0
	}

	/// Returns `true` for [`ActionId::NONE`].
	pub const fn is_none(self) -> bool {
		self.0 == Self::NONE.0
	}

	/// Converts to `None` for [`ActionId::NONE`], `Some(self)` otherwise.
	pub const fn into_option(self) -> Option<Self> {
		if self.is_none() {
			None
		} else {
			Some(self)
		}
	}
}

impl From<i32> for ActionId {
	fn from(raw: i32) -> Self {
		Self(raw)
	}
}

impl std::fmt::Display for ActionId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match *self {
			Self::NONE => write!(f, "#none"),
			Self::IDLE => write!(f, "#idle"),
			Self(raw) => write!(f, "#{raw}"),
		}
	}
}

/// Execution lifecycle of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionState {
	/// Not yet picked up by the frame driver
	#[default]
	NotStarted,
	/// Frames are being played
	Running,
	/// Last frame reached on a non-looping action, waiting to be popped
	Finished,
}

impl std::fmt::Display for ExecutionState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NotStarted => write!(f, "not started"),
			Self::Running => write!(f, "running"),
			Self::Finished => write!(f, "finished"),
		}
	}
}
