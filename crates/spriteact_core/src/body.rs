//! Kinematic state of a character.

use serde::{Deserialize, Serialize};

/// Integer 2D vector in screen pixels (`y` grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Vec2 {
	/// Horizontal component
	pub x: i32,
	/// Vertical component
	pub y: i32,
}

impl Vec2 {
	/// Zero vector
	pub const ZERO: Self = Self::new(0, 0);

	/// Creates a vector.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl std::ops::Add for Vec2 {
	type Output = Self;

	/// Componentwise saturating addition.
	fn add(self, rhs: Self) -> Self {
		Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
	}
}

impl std::ops::AddAssign for Vec2 {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl std::fmt::Display for Vec2 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// Facing of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
	/// Facing right, moving along +x; sprite drawn as authored
	#[default]
	Forward,
	/// Facing left, moving along -x; sprite drawn flipped horizontally
	Mirrored,
}

impl Direction {
	/// Returns `1` for [`Forward`](Self::Forward) and `-1` for
	/// [`Mirrored`](Self::Mirrored).
	pub const fn sign(self) -> i32 {
		match self {
			Self::Forward => 1,
			Self::Mirrored => -1,
		}
	}

	/// Returns the other direction.
	#[must_use]
	pub const fn opposite(self) -> Self {
		match self {
			Self::Forward => Self::Mirrored,
			Self::Mirrored => Self::Forward,
		}
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Forward => write!(f, "forward"),
			Self::Mirrored => write!(f, "mirrored"),
		}
	}
}

/// Position, velocity and facing of a character.
///
/// This is the part of a character that [`ActionHook`](crate::action::ActionHook)s
/// may change and that the physics step integrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Body {
	/// Position in pixels
	pub position: Vec2,
	/// Velocity in pixels per tick
	pub velocity: Vec2,
	/// Current facing
	pub direction: Direction,
}

impl Body {
	/// Creates a body at rest at `position`, facing forward.
	pub fn at(position: Vec2) -> Self {
		Self {
			position,
			velocity: Vec2::ZERO,
			direction: Direction::Forward,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_direction_sign() {
		assert_eq!(Direction::Forward.sign(), 1);
		assert_eq!(Direction::Mirrored.sign(), -1);
		assert_eq!(Direction::Forward.opposite(), Direction::Mirrored);
	}

	#[test]
	fn test_vec_add() {
		let mut v = Vec2::new(3, -2);
		v += Vec2::new(1, 5);
		assert_eq!(v, Vec2::new(4, 3));
		assert_eq!(v.to_string(), "(4, 3)");
	}

	#[test]
	fn test_vec_add_saturates() {
		let v = Vec2::new(i32::MAX - 1, i32::MIN + 1) + Vec2::new(5, -5);
		assert_eq!(v, Vec2::new(i32::MAX, i32::MIN));
	}
}
