//! Pre/post chaining through the public character API

use spriteact_rs::prelude::*;

use crate::{CROUCH, FALL, JUMP, LAND, WALK, create_hero, run_to_idle};

#[test_log::test]
fn jump_stacks_pre_action_on_top_and_post_action_below() {
	let mut hero = create_hero();
	hero.update();

	hero.push(JUMP).unwrap();
	assert_eq!(hero.stack_ids(), vec![CROUCH, JUMP, LAND, ActionId::IDLE]);
	assert_eq!(hero.current_action(), CROUCH);
}

#[test_log::test]
fn jump_plays_crouch_then_jump_then_land_then_idle() {
	let mut hero = create_hero();
	hero.update();
	hero.push(JUMP).unwrap();

	let seen = run_to_idle(&mut hero, 64);

	// crouch: start, advance, finish
	// jump: start (after crouch pops), advance, advance, finish
	// land: start, finish
	// idle: start
	assert_eq!(
		seen,
		vec![CROUCH, CROUCH, CROUCH, JUMP, JUMP, JUMP, JUMP, LAND, LAND, ActionId::IDLE]
	);
	for id in [CROUCH, JUMP, LAND] {
		assert_eq!(hero.execution_state(id), Some(ExecutionState::NotStarted));
	}
}

#[test_log::test]
fn every_frame_of_each_chained_action_is_shown() {
	let mut hero = create_hero();
	hero.update();
	hero.push(JUMP).unwrap();

	let mut frames = Vec::new();
	for _ in 0..10 {
		let tick = hero.update();
		if frames.last() != tick.frame.as_ref() {
			frames.push(tick.frame.unwrap());
		}
	}
	assert_eq!(frames, vec![10, 11, 20, 21, 22, 30, 0]);
}

#[test_log::test]
fn events_follow_play_order() {
	let mut hero = create_hero();
	hero.update();
	hero.push(FALL).unwrap();

	let events: Vec<ActionEvent> = (0..8).flat_map(|_| hero.update().events).collect();
	assert_eq!(
		events,
		vec![
			ActionEvent::Started(FALL),
			ActionEvent::Finished(FALL),
			ActionEvent::Completed(FALL),
			ActionEvent::Started(LAND),
			ActionEvent::Finished(LAND),
			ActionEvent::Completed(LAND),
			ActionEvent::Started(ActionId::IDLE),
		]
	);
}

#[test_log::test]
fn interrupting_a_chain_resets_the_interrupted_action() {
	let mut hero = create_hero();
	hero.update();
	hero.push(JUMP).unwrap();
	hero.update();
	assert_eq!(hero.execution_state(CROUCH), Some(ExecutionState::Running));

	hero.push(WALK).unwrap();
	assert_eq!(hero.execution_state(CROUCH), Some(ExecutionState::NotStarted));
	assert_eq!(hero.stack_ids(), vec![WALK, CROUCH, JUMP, LAND, ActionId::IDLE]);

	// Walking loops forever; cancel the rest of the chain
	assert_eq!(hero.pop_until_base(), 4);
	assert_eq!(hero.current_action(), ActionId::IDLE);
	let tick = hero.update();
	assert_eq!(tick.events, vec![ActionEvent::Started(ActionId::IDLE)]);
}

#[test_log::test]
fn pushing_unknown_action_fails_without_side_effects() {
	let mut hero = create_hero();
	hero.update();
	let err = hero.push(ActionId::new(77)).unwrap_err();
	assert_eq!(
		err,
		ActionError::UnknownAction {
			id: ActionId::new(77)
		}
	);
	assert_eq!(hero.stack_depth(), 1);
	assert_eq!(hero.execution_state(ActionId::IDLE), Some(ExecutionState::Running));
}
