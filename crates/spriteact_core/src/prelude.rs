//! Prelude module for `spriteact_core`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use spriteact_core::prelude::*;
//!
//! let hero = Character::new(Vec2::new(8, 8), ActionDefinition::new(vec![0, 1])).unwrap();
//! assert_eq!(hero.current_action(), ActionId::IDLE);
//! ```

#[doc(inline)]
pub use crate::action::{
	ActionDefinition, ActionHook, ActionId, ActionRegistry, ActionStack, ExecutionState,
	PushOutcome,
};

#[doc(inline)]
pub use crate::body::{Body, Direction, Vec2};

#[doc(inline)]
pub use crate::character::{Character, CharacterBuilder, CharacterSheet, SheetAction, Tick};

#[doc(inline)]
pub use crate::driver::ActionEvent;

#[doc(inline)]
pub use crate::error::{ActionError, LinkKind, SheetError};

#[doc(inline)]
pub use crate::physics::{GravityMode, PhysicsConfig};

#[doc(inline)]
pub use crate::sprite::{Sprite, SpriteCursor, Transform};
