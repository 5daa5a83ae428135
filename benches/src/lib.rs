//! Benchmark helper utilities for spriteact-rs
//!
//! This module builds synthetic characters so the benchmarks measure the engine
//! and not setup code.

use spriteact_core::prelude::*;

/// Id of the action whose push expands into the longest chain.
pub const CHAIN_HEAD: ActionId = ActionId::new(1);

/// Builds a character with `chain_len` one-shot actions, each linking the next
/// as its pre-action, so pushing [`CHAIN_HEAD`] stacks the whole chain.
///
/// Every action has `frames_per_action` frames.
pub fn chained_character(chain_len: i32, frames_per_action: u16) -> Character {
	let frames = frames_per_action.max(1);
	let sequence = |first: u16| (first..first + frames).collect::<Vec<_>>();

	let mut builder = CharacterBuilder::new(ActionDefinition::new(sequence(0)));
	for raw in 1..=chain_len {
		let mut definition = ActionDefinition::new(sequence(raw as u16 * frames)).continuous(false);
		if raw < chain_len {
			definition = definition.with_pre_action(ActionId::new(raw + 1));
		}
		builder = builder.action(ActionId::new(raw), definition);
	}

	builder.build().unwrap_or_else(|err| panic!("synthetic character is invalid: {err}"))
}

/// Number of ticks needed to play a full chain built by [`chained_character`]
/// back down to idle.
pub fn ticks_to_drain(chain_len: i32, frames_per_action: u16) -> usize {
	// start + (frames - 1) advances + finish per action, the pop shares a tick
	// with the next start
	chain_len as usize * (usize::from(frames_per_action.max(1)) + 1) + 1
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chain_drains_in_expected_ticks() {
		let mut character = chained_character(4, 3);
		character.update();
		character.push(CHAIN_HEAD).unwrap();
		assert_eq!(character.stack_depth(), 5);

		for _ in 0..ticks_to_drain(4, 3) {
			character.update();
		}
		assert_eq!(character.stack_depth(), 1);
		assert_eq!(character.current_action(), ActionId::IDLE);
	}
}
