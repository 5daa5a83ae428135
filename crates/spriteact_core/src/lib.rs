//! This crate provides the action execution engine of the `spriteact-rs` project.
//!
//! # Modules
//!
//! - **action**: action definitions, the per-character registry and the action
//!   stack with its pre/post chaining protocol
//! - **driver**: the per-tick frame driver that ties sprite playback to action
//!   completion
//! - **physics**: directional friction, gravity and position integration
//! - **character**: the object a game loop ticks, tying the above together
//! - **sprite**: the rendering primitive the engine drives
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use spriteact_core::prelude::*;
//!
//! const FALL: ActionId = ActionId::new(1);
//! const LAND: ActionId = ActionId::new(2);
//!
//! # fn main() -> Result<(), ActionError> {
//! let mut hero = CharacterBuilder::new(ActionDefinition::new(vec![0, 1]))
//!     .action(FALL, ActionDefinition::new(vec![5, 6]).continuous(false).with_post_action(LAND))
//!     .action(LAND, ActionDefinition::new(vec![7]).continuous(false))
//!     .build()?;
//!
//! hero.push(FALL)?;
//! assert_eq!(hero.stack_ids(), vec![FALL, LAND, ActionId::IDLE]);
//!
//! for _ in 0..16 {
//!     hero.update();
//! }
//! assert_eq!(hero.current_action(), ActionId::IDLE);
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod body;
pub mod character;
pub mod constants;
pub mod driver;
pub mod error;
pub mod physics;
pub mod sprite;

/// `use spriteact_core::prelude::*;` to import commonly used items.
pub mod prelude;

pub use action::{ActionDefinition, ActionId, ExecutionState};
pub use character::{Character, CharacterBuilder, CharacterSheet, Tick};
pub use error::{ActionError, SheetError};
