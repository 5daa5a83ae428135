//! Serializable character descriptions.

use std::{io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
	action::{ActionDefinition, ActionId},
	body::{Direction, Vec2},
	constants::DEFAULT_WALK_SPEED,
	error::SheetError,
	physics::PhysicsConfig,
	sprite::SpriteCursor,
};

use super::{Character, CharacterBuilder};

fn default_walk_speed() -> i32 {
	DEFAULT_WALK_SPEED
}

/// An action entry of a [`CharacterSheet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetAction {
	/// Id the action is registered under
	pub id: ActionId,
	/// Human readable name, used by tools to refer to the action
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// The definition itself
	#[serde(flatten)]
	pub definition: ActionDefinition,
}

/// Everything needed to build a [`Character`], in a serde-friendly shape.
///
/// Only `idle` is required; every other field has a default.
///
/// ```json
/// {
///   "position": { "x": 16, "y": 96 },
///   "mirror_on_turn": true,
///   "physics": { "friction": 1 },
///   "idle": { "frames": [0, 1] },
///   "actions": [
///     { "id": 1, "name": "crouch", "frames": [2], "continuous": false },
///     { "id": 2, "name": "jump", "frames": [3, 4], "continuous": false, "pre_action": 1 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
	/// Base action
	pub idle: ActionDefinition,
	/// Further actions
	#[serde(default)]
	pub actions: Vec<SheetAction>,
	/// Starting position
	#[serde(default)]
	pub position: Vec2,
	/// Starting facing
	#[serde(default)]
	pub direction: Direction,
	/// Physics constants
	#[serde(default)]
	pub physics: PhysicsConfig,
	/// Flip the sprite when facing mirrored
	#[serde(default)]
	pub mirror_on_turn: bool,
	/// Walking speed
	#[serde(default = "default_walk_speed")]
	pub walk_speed: i32,
}

impl CharacterSheet {
	/// Parses a sheet from JSON text.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Json`] for malformed input.
	pub fn from_json_str(text: &str) -> Result<Self, SheetError> {
		Ok(serde_json::from_str(text)?)
	}

	/// Parses a sheet from a JSON reader.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Json`] for malformed input or a read failure.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, SheetError> {
		Ok(serde_json::from_reader(reader)?)
	}

	/// Opens and parses a JSON sheet file.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Io`] if the file cannot be opened, otherwise as
	/// [`from_reader`](Self::from_reader).
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SheetError> {
		let file = std::fs::File::open(path)?;
		Self::from_reader(std::io::BufReader::new(file))
	}

	/// Serializes the sheet as pretty-printed JSON.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Json`] if serialization fails.
	pub fn to_json_string(&self) -> Result<String, SheetError> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Looks up an action id by its sheet name. `"idle"` always resolves to
	/// [`ActionId::IDLE`].
	pub fn action_id(&self, name: &str) -> Option<ActionId> {
		if name.eq_ignore_ascii_case("idle") {
			return Some(ActionId::IDLE);
		}
		self.actions
			.iter()
			.find(|action| action.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(name)))
			.map(|action| action.id)
	}

	/// Returns a builder preloaded with the sheet.
	pub fn to_builder(&self) -> CharacterBuilder {
		self.actions.iter().fold(
			CharacterBuilder::new(self.idle.clone())
				.position(self.position)
				.direction(self.direction)
				.physics(self.physics)
				.mirror_on_turn(self.mirror_on_turn)
				.walk_speed(self.walk_speed),
			|builder, action| builder.action(action.id, action.definition.clone()),
		)
	}

	/// Builds the described character.
	///
	/// # Errors
	///
	/// Returns [`SheetError::Action`] for any error of
	/// [`CharacterBuilder::build`].
	pub fn build(&self) -> Result<Character<SpriteCursor>, SheetError> {
		Ok(self.to_builder().build()?)
	}
}
