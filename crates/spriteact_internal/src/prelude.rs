//! Prelude module for `spriteact_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use spriteact_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut hero = CharacterBuilder::new(ActionDefinition::new(vec![0, 1]))
//!     .physics(PhysicsConfig::floaty())
//!     .build()
//!     .unwrap();
//! hero.walk(Direction::Forward);
//! let tick = hero.update();
//! assert_eq!(tick.velocity, Vec2::new(4, 0));
//! ```

// Re-export everything from spriteact_core::prelude
#[doc(inline)]
pub use spriteact_core::prelude::*;

// Re-export the entire spriteact_core crate for advanced usage
#[doc(inline)]
pub use spriteact_core;
