//! Per-tick velocity decay and position integration.
//!
//! The model is deliberately small:
//!
//! - **Friction** only slows the horizontal component that points the way
//!   the character faces, and never pushes it past zero.
//! - **Gravity** subtracts a constant from the vertical component. There is no
//!   notion of ground; see [`GravityMode`] for when it applies.
//! - **Position** moves by the decayed velocity.
//!
//! No terminal velocity is enforced.

use serde::{Deserialize, Serialize};

use crate::{
	body::{Body, Direction},
	constants::{DEFAULT_FRICTION, DEFAULT_GRAVITY},
};

/// When gravity is applied to the vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityMode {
	/// Only while the vertical velocity is non-zero; a character at rest
	/// vertically stays at rest.
	#[default]
	WhileMoving,
	/// Every tick, regardless of the current vertical velocity.
	Always,
}

/// Physics constants for one character.
///
/// # Presets
///
/// - `default()`: friction 2, gravity 2, gravity while moving
/// - `frictionless()`: no horizontal decay, default gravity
/// - `floaty()`: friction 1, gravity 1
///
/// # Examples
///
/// ```
/// use spriteact_core::physics::{GravityMode, PhysicsConfig};
///
/// let config = PhysicsConfig::default();
/// assert_eq!(config.friction, 2);
///
/// let config: PhysicsConfig = serde_json::from_str(r#"{ "gravity": 3 }"#).unwrap();
/// assert_eq!(config.friction, 2);
/// assert_eq!(config.gravity, 3);
/// assert_eq!(config.gravity_mode, GravityMode::WhileMoving);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
	/// Horizontal deceleration per tick
	pub friction: i32,
	/// Vertical deceleration per tick
	pub gravity: i32,
	/// When gravity applies
	pub gravity_mode: GravityMode,
}

impl Default for PhysicsConfig {
	fn default() -> Self {
		Self {
			friction: DEFAULT_FRICTION,
			gravity: DEFAULT_GRAVITY,
			gravity_mode: GravityMode::WhileMoving,
		}
	}
}

impl PhysicsConfig {
	/// Creates a configuration with custom constants and the default gravity
	/// mode.
	pub fn new(friction: i32, gravity: i32) -> Self {
		Self {
			friction,
			gravity,
			gravity_mode: GravityMode::WhileMoving,
		}
	}

	/// No horizontal decay; velocity set by input persists.
	pub fn frictionless() -> Self {
		Self {
			friction: 0,
			..Self::default()
		}
	}

	/// Half the default decay on both axes.
	pub fn floaty() -> Self {
		Self::new(1, 1)
	}

	/// Returns a copy using `mode` for gravity.
	#[must_use]
	pub fn with_gravity_mode(mut self, mode: GravityMode) -> Self {
		self.gravity_mode = mode;
		self
	}
}

/// Advances `body` by one tick.
///
/// Nothing caps the fall speed; velocity and position saturate at the `i32`
/// bounds instead of wrapping.
pub fn integrate(body: &mut Body, config: &PhysicsConfig) {
	let velocity = &mut body.velocity;

	match body.direction {
		Direction::Forward if velocity.x > 0 => {
			velocity.x = velocity.x.saturating_sub(config.friction).max(0);
		}
		Direction::Mirrored if velocity.x < 0 => {
			velocity.x = velocity.x.saturating_add(config.friction).min(0);
		}
		_ => {}
	}

	let apply_gravity = match config.gravity_mode {
		GravityMode::WhileMoving => velocity.y != 0,
		GravityMode::Always => true,
	};
	if apply_gravity {
		velocity.y = velocity.y.saturating_sub(config.gravity);
	}

	body.position += body.velocity;
}
