//! Error types for action registration, chaining and character sheets.

use thiserror::Error;

use crate::action::ActionId;

/// Which side of an action a link sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
	/// Action that must play immediately before
	Pre,
	/// Action that must play immediately after
	Post,
}

impl std::fmt::Display for LinkKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Pre => write!(f, "pre-action"),
			Self::Post => write!(f, "post-action"),
		}
	}
}

/// Programmer errors raised while setting up or driving a character.
///
/// All of these are expected at setup time. A correctly registered character
/// never produces one from inside [`Character::update`](crate::Character::update).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
	/// Action registered with an empty frame sequence
	#[error("Action {id} has an empty frame sequence")]
	EmptyFrames {
		/// Offending action id
		id: ActionId,
	},

	/// Two actions registered under the same id
	#[error("Action {id} is already registered")]
	DuplicateAction {
		/// Offending action id
		id: ActionId,
	},

	/// Attempt to register under a reserved id
	#[error("Action id {id} is reserved and cannot be registered")]
	ReservedId {
		/// Offending action id
		id: ActionId,
	},

	/// Lookup of an id that was never registered
	#[error("Action {id} is not registered")]
	UnknownAction {
		/// Requested action id
		id: ActionId,
	},

	/// A pre/post link points at an unregistered id
	#[error("Action {id} links to unregistered {kind} {link}")]
	UnknownLink {
		/// Action carrying the link
		id: ActionId,
		/// Target of the link
		link: ActionId,
		/// Pre or post
		kind: LinkKind,
	},

	/// The base action must loop, otherwise it would finish and be popped
	#[error("Base action must be continuous")]
	BaseNotContinuous,

	/// Pre/post expansion nested deeper than allowed (usually a link cycle)
	#[error("Expanding action {id} exceeded the chain depth limit of {limit}")]
	ChainTooDeep {
		/// Action whose expansion overflowed
		id: ActionId,
		/// Depth limit that was hit
		limit: usize,
	},

	/// Frame range with its end before its start
	#[error("Invalid frame range: {first}..={last}")]
	InvalidFrameRange {
		/// First frame of the range
		first: u16,
		/// Last frame of the range
		last: u16,
	},
}

/// Errors that can occur while loading a character sheet.
#[derive(Debug, Error)]
pub enum SheetError {
	/// Malformed JSON or wrong field types
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// The sheet parsed but describes an invalid character
	#[error(transparent)]
	Action(#[from] ActionError),

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
