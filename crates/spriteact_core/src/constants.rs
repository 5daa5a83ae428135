//! Engine-wide constants.
//!
//! The physics defaults are expressed in pixels per tick and match the values
//! the engine has always shipped with.

/// Default horizontal deceleration applied each tick (pixels per tick)
pub const DEFAULT_FRICTION: i32 = 2;

/// Default vertical acceleration applied each tick (pixels per tick)
pub const DEFAULT_GRAVITY: i32 = 2;

/// Default walking speed of a character (pixels per tick)
pub const DEFAULT_WALK_SPEED: i32 = 5;

/// Running speed as a percentage of the walking speed
pub const RUN_SPEED_PERCENT: i32 = 150;

/// Maximum nesting of pre/post links expanded by a single push
pub const MAX_CHAIN_DEPTH: usize = 32;
