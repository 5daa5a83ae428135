//! Step-by-step character construction.

use crate::{
	action::{ActionDefinition, ActionId, ActionRegistry, ActionStack},
	body::{Body, Direction, Vec2},
	constants::DEFAULT_WALK_SPEED,
	error::ActionError,
	physics::PhysicsConfig,
	sprite::{Sprite, SpriteCursor},
};

use super::Character;

/// Collects everything a [`Character`] needs before it enters the tick loop.
///
/// Registration errors are reported by [`build`](Self::build), which also
/// checks that every pre/post link resolves.
///
/// # Examples
///
/// ```
/// use spriteact_core::prelude::*;
///
/// const WALK: ActionId = ActionId::new(1);
///
/// # fn main() -> Result<(), ActionError> {
/// let character = CharacterBuilder::new(ActionDefinition::new(vec![0, 1, 2]))
///     .position(Vec2::new(40, 120))
///     .action(WALK, ActionDefinition::from_range(3, 8)?)
///     .mirror_on_turn(true)
///     .build()?;
///
/// assert_eq!(character.current_action(), ActionId::IDLE);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CharacterBuilder {
	idle: ActionDefinition,
	actions: Vec<(ActionId, ActionDefinition)>,
	position: Vec2,
	direction: Direction,
	physics: PhysicsConfig,
	mirror_on_turn: bool,
	walk_speed: i32,
}

impl CharacterBuilder {
	/// Starts a character whose base action plays `idle`.
	pub fn new(idle: ActionDefinition) -> Self {
		Self {
			idle,
			actions: Vec::new(),
			position: Vec2::ZERO,
			direction: Direction::Forward,
			physics: PhysicsConfig::default(),
			mirror_on_turn: false,
			walk_speed: DEFAULT_WALK_SPEED,
		}
	}

	/// Adds an action under `id`.
	#[must_use]
	pub fn action(mut self, id: ActionId, definition: ActionDefinition) -> Self {
		self.actions.push((id, definition));
		self
	}

	/// Sets the starting position.
	#[must_use]
	pub fn position(mut self, position: Vec2) -> Self {
		self.position = position;
		self
	}

	/// Sets the starting facing.
	#[must_use]
	pub fn direction(mut self, direction: Direction) -> Self {
		self.direction = direction;
		self
	}

	/// Sets the physics constants.
	#[must_use]
	pub fn physics(mut self, physics: PhysicsConfig) -> Self {
		self.physics = physics;
		self
	}

	/// Flip the sprite horizontally whenever the character faces
	/// [`Direction::Mirrored`].
	#[must_use]
	pub fn mirror_on_turn(mut self, mirror: bool) -> Self {
		self.mirror_on_turn = mirror;
		self
	}

	/// Sets the walking speed used by [`Character::walk`] and
	/// [`Character::run`].
	#[must_use]
	pub fn walk_speed(mut self, speed: i32) -> Self {
		self.walk_speed = speed;
		self
	}

	/// Builds a character drawing through a [`SpriteCursor`].
	///
	/// # Errors
	///
	/// See [`build_with_sprite`](Self::build_with_sprite).
	pub fn build(self) -> Result<Character<SpriteCursor>, ActionError> {
		self.build_with_sprite(SpriteCursor::new())
	}

	/// Builds a character drawing through `sprite`.
	///
	/// # Errors
	///
	/// - [`ActionError::BaseNotContinuous`] if the idle action does not loop
	/// - any registration error of [`ActionRegistry::register`]
	/// - [`ActionError::UnknownLink`] if a pre/post link is dangling
	pub fn build_with_sprite<S: Sprite>(self, mut sprite: S) -> Result<Character<S>, ActionError> {
		if !self.idle.is_continuous() {
			return Err(ActionError::BaseNotContinuous);
		}

		let mut registry = ActionRegistry::new();
		registry.register(ActionId::IDLE, self.idle)?;
		for (id, definition) in self.actions {
			registry.register(id, definition)?;
		}
		registry.validate_links()?;

		let mut stack = ActionStack::new();
		stack.push(&mut registry, ActionId::IDLE)?;

		let body = Body {
			position: self.position,
			velocity: Vec2::ZERO,
			direction: self.direction,
		};
		sprite.set_position(body.position);

		let mut character = Character {
			registry,
			stack,
			sprite,
			body,
			physics: self.physics,
			mirror_on_turn: self.mirror_on_turn,
			mirrored: false,
			walk_speed: self.walk_speed,
			hooks: std::collections::HashMap::new(),
			ticks: 0,
		};
		character.set_direction(self.direction);
		Ok(character)
	}
}
