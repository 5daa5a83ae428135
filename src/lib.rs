#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `spriteact-rs` is a small real-time character behavior engine for 2D sprite games.
//!
//! It decides, tick by tick, which animation a character plays, chains
//! actions that need a preceding or following action (crouch before jump,
//! land after fall) and integrates simple friction and gravity.
//!
pub use spriteact_internal::*;
