//! Behavior tests for `spriteact-rs`

mod chaining;
mod lifecycle;
mod physics;

use spriteact_rs::prelude::*;

pub(crate) const CROUCH: ActionId = ActionId::new(1);
pub(crate) const JUMP: ActionId = ActionId::new(2);
pub(crate) const LAND: ActionId = ActionId::new(3);
pub(crate) const WALK: ActionId = ActionId::new(4);
pub(crate) const FALL: ActionId = ActionId::new(5);

/// A small platformer hero: crouch before jumping, land after falling.
pub(crate) fn create_hero() -> Character {
	CharacterBuilder::new(ActionDefinition::new(vec![0, 1, 2]))
		.action(CROUCH, ActionDefinition::new(vec![10, 11]).continuous(false))
		.action(
			JUMP,
			ActionDefinition::new(vec![20, 21, 22])
				.continuous(false)
				.with_pre_action(CROUCH)
				.with_post_action(LAND),
		)
		.action(LAND, ActionDefinition::new(vec![30]).continuous(false))
		.action(WALK, ActionDefinition::from_range(40, 43).unwrap())
		.action(FALL, ActionDefinition::new(vec![50, 51]).continuous(false).with_post_action(LAND))
		.mirror_on_turn(true)
		.build()
		.unwrap()
}

/// Ticks until the stack only holds the base action again, returning the
/// actions seen on top after each tick.
pub(crate) fn run_to_idle(hero: &mut Character, limit: usize) -> Vec<ActionId> {
	let mut seen = Vec::new();
	for _ in 0..limit {
		seen.push(hero.update().action);
		if hero.stack_depth() == 1 {
			break;
		}
	}
	seen
}
