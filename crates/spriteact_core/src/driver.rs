//! Frame driver: ties sprite playback to action completion.
//!
//! Once per tick the driver looks at the action on top of the stack:
//!
//! ```text
//! State       Condition                           Effect
//! ----------  ----------------------------------  ---------------------------------
//! NotStarted  -                                   install frames, cursor = 0, Running
//! Running     one-shot and cursor on last frame   Finished, cursor stays
//! Running     otherwise                           cursor + 1 (wrapping when looping)
//! Finished    stack deeper than the base          pop, re-evaluate new top this tick
//! Finished    only the base left                  nothing, base stays frozen
//! ```
//!
//! The pop cascade is a loop bounded by the stack depth, so an action never
//! wastes a tick after finishing: the action it uncovers is initialised on the
//! same tick.

use log::{error, trace, warn};
use serde::Serialize;

use crate::{
	action::{ActionId, ActionRegistry, ActionStack, ExecutionState},
	sprite::Sprite,
};

/// Lifecycle change raised by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "action", rename_all = "snake_case")]
pub enum ActionEvent {
	/// The action began playing its frames
	Started(ActionId),
	/// A one-shot action reached its last frame
	Finished(ActionId),
	/// The finished action was popped off the stack
	Completed(ActionId),
}

impl ActionEvent {
	/// Returns the action the event is about.
	pub fn action(&self) -> ActionId {
		match *self {
			Self::Started(id) | Self::Finished(id) | Self::Completed(id) => id,
		}
	}
}

/// Runs one tick of the frame driver, appending raised events to `events`.
pub fn advance<S: Sprite>(
	stack: &mut ActionStack,
	registry: &mut ActionRegistry,
	sprite: &mut S,
	events: &mut Vec<ActionEvent>,
) {
	let bound = stack.depth() + 1;

	for _ in 0..bound {
		let Some(top) = stack.top() else {
			return;
		};
		let Some(definition) = registry.get_mut(top) else {
			error!("Active action {top} is not registered");
			return;
		};

		match definition.state() {
			ExecutionState::NotStarted => {
				definition.set_state(ExecutionState::Running);
				sprite.set_frame_sequence(definition.frames());
				sprite.set_frame(0);
				trace!("{top} started");
				events.push(ActionEvent::Started(top));
				return;
			}
			ExecutionState::Running => {
				if !definition.is_continuous() && sprite.frame() >= definition.last_frame_index() {
					definition.set_state(ExecutionState::Finished);
					trace!("{top} finished on frame {}", sprite.frame());
					events.push(ActionEvent::Finished(top));
				} else {
					sprite.next_frame();
					trace!("{top} frame {}", sprite.frame());
				}
				return;
			}
			ExecutionState::Finished => {
				if stack.depth() <= 1 {
					warn!("Base action {top} finished; keeping it frozen");
					return;
				}
				stack.pop(registry);
				events.push(ActionEvent::Completed(top));
			}
		}
	}
}
