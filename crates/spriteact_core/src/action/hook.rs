//! Per-action side effects.

use crate::body::Body;

use super::ActionId;

/// Side effects attached to an action.
///
/// Hooks run once the frame driver has resolved a tick and before physics is
/// integrated, so a velocity set in [`on_start`](Self::on_start) moves the
/// character on that same tick. Typical uses are giving a jump its initial
/// vertical velocity or stopping a character when an attack begins.
///
/// Closures `FnMut(ActionId, &mut Body)` implement the trait as start hooks:
/// they run on [`on_start`](Self::on_start) only. Implement the trait on a
/// type to react to [`on_finish`](Self::on_finish).
///
/// # Examples
///
/// ```
/// use spriteact_core::action::{ActionHook, ActionId};
/// use spriteact_core::body::Body;
///
/// struct Leap(i32);
///
/// impl ActionHook for Leap {
///     fn on_start(&mut self, _id: ActionId, body: &mut Body) {
///         body.velocity.y = self.0;
///     }
/// }
/// ```
pub trait ActionHook {
	/// Called when the action goes from not started to running.
	fn on_start(&mut self, id: ActionId, body: &mut Body) {
		let _ = (id, body);
	}

	/// Called when the finished action is popped off the stack.
	fn on_finish(&mut self, id: ActionId, body: &mut Body) {
		let _ = (id, body);
	}
}

/// Closures are start hooks.
impl<F> ActionHook for F
where
	F: FnMut(ActionId, &mut Body),
{
	fn on_start(&mut self, id: ActionId, body: &mut Body) {
		self(id, body);
	}
}
