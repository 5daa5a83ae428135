//! Characters: the object the game loop ticks.
//!
//! A [`Character`] owns its action registry, action stack, sprite and body.
//! The game loop calls [`Character::update`] once per tick and
//! [`Character::push`] whenever input asks for a new action.
//!
//! Within a tick the frame driver fully resolves (including any cascade of
//! pops), then hooks run, then physics is integrated and the sprite is moved.
//!
//! # Examples
//!
//! ```
//! use spriteact_core::prelude::*;
//!
//! const CROUCH: ActionId = ActionId::new(1);
//! const JUMP: ActionId = ActionId::new(2);
//!
//! # fn main() -> Result<(), ActionError> {
//! let mut hero = CharacterBuilder::new(ActionDefinition::new(vec![0, 1]))
//!     .action(CROUCH, ActionDefinition::new(vec![2]).continuous(false))
//!     .action(JUMP, ActionDefinition::new(vec![3, 4]).continuous(false).with_pre_action(CROUCH))
//!     .build()?;
//!
//! hero.update();
//! hero.push(JUMP)?;
//! assert_eq!(hero.current_action(), CROUCH);
//!
//! // crouch: start, finish; then the jump starts on the same tick the crouch is popped
//! hero.update();
//! hero.update();
//! let tick = hero.update();
//! assert_eq!(tick.action, JUMP);
//! # Ok(())
//! # }
//! ```

mod builder;
mod sheet;

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::{
	action::{
		ActionDefinition, ActionHook, ActionId, ActionRegistry, ActionStack, ExecutionState,
		PushOutcome,
	},
	body::{Body, Direction, Vec2},
	constants::RUN_SPEED_PERCENT,
	driver::{self, ActionEvent},
	error::ActionError,
	physics::{self, PhysicsConfig},
	sprite::{Sprite, SpriteCursor, Transform},
};

pub use self::builder::CharacterBuilder;
pub use self::sheet::{CharacterSheet, SheetAction};

/// Snapshot of a character after one [`Character::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tick {
	/// Number of updates performed so far, this one included
	pub tick: u64,
	/// Action on top of the stack
	pub action: ActionId,
	/// Cursor position within the action's frames
	pub frame_index: usize,
	/// Frame value shown
	pub frame: Option<u16>,
	/// Position after integration
	pub position: Vec2,
	/// Velocity after integration
	pub velocity: Vec2,
	/// Lifecycle changes raised during the tick, in order
	pub events: Vec<ActionEvent>,
}

/// A sprite-based character driven by an action stack.
pub struct Character<S: Sprite = SpriteCursor> {
	registry: ActionRegistry,
	stack: ActionStack,
	sprite: S,
	body: Body,
	physics: PhysicsConfig,
	mirror_on_turn: bool,
	mirrored: bool,
	walk_speed: i32,
	hooks: HashMap<ActionId, Box<dyn ActionHook>>,
	ticks: u64,
}

impl Character<SpriteCursor> {
	/// Creates a character at `position` whose base action plays `idle`,
	/// with default physics.
	///
	/// # Errors
	///
	/// Returns [`ActionError::BaseNotContinuous`] or
	/// [`ActionError::EmptyFrames`] for an unusable idle action.
	pub fn new(position: Vec2, idle: ActionDefinition) -> Result<Self, ActionError> {
		CharacterBuilder::new(idle).position(position).build()
	}
}

impl<S: Sprite> Character<S> {
	/// Registers another action. Setup-time only.
	///
	/// Its pre/post links must already be registered (or point at `id`).
	///
	/// # Errors
	///
	/// Returns [`ActionError::UnknownLink`] for a dangling link, otherwise see
	/// [`ActionRegistry::register`].
	pub fn register_action(
		&mut self,
		id: ActionId,
		definition: ActionDefinition,
	) -> Result<(), ActionError> {
		self.registry.check_links(id, &definition)?;
		self.registry.register(id, definition)
	}

	/// Attaches side effects to action `id`, replacing any previous hook.
	///
	/// # Errors
	///
	/// Returns [`ActionError::UnknownAction`] if `id` is not registered.
	pub fn set_hook(
		&mut self,
		id: ActionId,
		hook: impl ActionHook + 'static,
	) -> Result<(), ActionError> {
		self.registry.require(id)?;
		self.hooks.insert(id, Box::new(hook));
		Ok(())
	}

	/// Advances one tick: frame driver, hooks, then physics.
	pub fn update(&mut self) -> Tick {
		self.ticks += 1;

		let mut events = Vec::new();
		driver::advance(&mut self.stack, &mut self.registry, &mut self.sprite, &mut events);

		for event in &events {
			match *event {
				ActionEvent::Started(id) => {
					if let Some(hook) = self.hooks.get_mut(&id) {
						hook.on_start(id, &mut self.body);
					}
				}
				ActionEvent::Completed(id) => {
					if let Some(hook) = self.hooks.get_mut(&id) {
						hook.on_finish(id, &mut self.body);
					}
				}
				ActionEvent::Finished(_) => {}
			}
		}

		physics::integrate(&mut self.body, &self.physics);
		self.sprite.set_position(self.body.position);

		Tick {
			tick: self.ticks,
			action: self.current_action(),
			frame_index: self.sprite.frame(),
			frame: self.sprite.displayed_frame(),
			position: self.body.position,
			velocity: self.body.velocity,
			events,
		}
	}

	/// Requests action `id`; see [`ActionStack::push`].
	///
	/// # Errors
	///
	/// Returns [`ActionError::UnknownAction`] or
	/// [`ActionError::ChainTooDeep`]; the stack is unchanged on error.
	pub fn push(&mut self, id: ActionId) -> Result<PushOutcome, ActionError> {
		self.stack.push(&mut self.registry, id)
	}

	/// Cancels everything above the base action.
	///
	/// Returns the number of actions removed.
	pub fn pop_until_base(&mut self) -> usize {
		self.stack.pop_until_base(&mut self.registry)
	}

	/// Returns the id of the action on top of the stack.
	pub fn current_action(&self) -> ActionId {
		self.stack.top().unwrap_or(ActionId::NONE)
	}

	/// Returns the stack depth.
	pub fn stack_depth(&self) -> usize {
		self.stack.depth()
	}

	/// Returns stack entries from top to bottom.
	pub fn stack_ids(&self) -> Vec<ActionId> {
		self.stack.ids()
	}

	/// Returns the execution state of action `id`, if registered.
	pub fn execution_state(&self, id: ActionId) -> Option<ExecutionState> {
		self.registry.get(id).map(ActionDefinition::state)
	}

	/// Returns the registered actions.
	pub fn registry(&self) -> &ActionRegistry {
		&self.registry
	}

	/// Returns the cursor position within the current frame sequence.
	pub fn frame_index(&self) -> usize {
		self.sprite.frame()
	}

	/// Returns the frame value currently shown.
	pub fn displayed_frame(&self) -> Option<u16> {
		self.sprite.displayed_frame()
	}

	/// Returns the sprite.
	pub fn sprite(&self) -> &S {
		&self.sprite
	}

	/// Returns the sprite mutably, for renderer-side state.
	pub fn sprite_mut(&mut self) -> &mut S {
		&mut self.sprite
	}

	/// Returns the current facing.
	pub fn direction(&self) -> Direction {
		self.body.direction
	}

	/// Faces `direction`. With mirroring enabled the sprite is flipped when
	/// facing [`Direction::Mirrored`]. Never touches the action stack.
	pub fn set_direction(&mut self, direction: Direction) {
		if self.mirror_on_turn {
			let mirrored = direction == Direction::Mirrored;
			if mirrored != self.mirrored {
				debug!("Turning {direction}");
			}
			self.sprite.set_transform(if mirrored {
				Transform::Mirror
			} else {
				Transform::None
			});
			self.mirrored = mirrored;
		}
		self.body.direction = direction;
	}

	/// Returns `true` while the sprite is drawn flipped.
	pub fn is_mirrored(&self) -> bool {
		self.mirrored
	}

	/// Returns the body.
	pub fn body(&self) -> &Body {
		&self.body
	}

	/// Returns the body mutably.
	pub fn body_mut(&mut self) -> &mut Body {
		&mut self.body
	}

	/// Returns the position.
	pub fn position(&self) -> Vec2 {
		self.body.position
	}

	/// Teleports the character.
	pub fn set_position(&mut self, position: Vec2) {
		self.body.position = position;
		self.sprite.set_position(position);
	}

	/// Returns the velocity.
	pub fn velocity(&self) -> Vec2 {
		self.body.velocity
	}

	/// Replaces the velocity.
	pub fn set_velocity(&mut self, velocity: Vec2) {
		self.body.velocity = velocity;
	}

	/// Adds `delta` to the velocity.
	pub fn impulse(&mut self, delta: Vec2) {
		self.body.velocity += delta;
	}

	/// Returns the walking speed.
	pub fn walk_speed(&self) -> i32 {
		self.walk_speed
	}

	/// Faces `direction` and sets the horizontal velocity to the walking
	/// speed.
	pub fn walk(&mut self, direction: Direction) {
		self.set_direction(direction);
		self.body.velocity.x = direction.sign() * self.walk_speed;
	}

	/// Like [`walk`](Self::walk) at the running speed.
	pub fn run(&mut self, direction: Direction) {
		self.set_direction(direction);
		self.body.velocity.x = direction.sign() * self.walk_speed * RUN_SPEED_PERCENT / 100;
	}

	/// Returns the physics constants.
	pub fn physics(&self) -> &PhysicsConfig {
		&self.physics
	}

	/// Replaces the physics constants.
	pub fn set_physics(&mut self, physics: PhysicsConfig) {
		self.physics = physics;
	}

	/// Returns the number of updates performed.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}
}

impl<S: Sprite + std::fmt::Debug> std::fmt::Debug for Character<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Character")
			.field("stack", &self.stack)
			.field("sprite", &self.sprite)
			.field("body", &self.body)
			.field("physics", &self.physics)
			.field("mirror_on_turn", &self.mirror_on_turn)
			.field("walk_speed", &self.walk_speed)
			.field("hooks", &self.hooks.len())
			.field("ticks", &self.ticks)
			.finish_non_exhaustive()
	}
}
