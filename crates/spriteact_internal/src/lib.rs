//! This module is separated into its own crate so the facade crate stays a thin re-export,
//! and should not be used directly.

/// `use spriteact_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export spriteact_core for convenience
pub use spriteact_core;

// Re-export commonly used types at crate root
pub use spriteact_core::{
	ActionDefinition, ActionError, ActionId, Character, CharacterBuilder, CharacterSheet,
	ExecutionState, SheetError, Tick,
};
