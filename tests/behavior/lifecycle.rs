//! Frame driver lifecycle through the public character API

use spriteact_rs::prelude::*;

use crate::{JUMP, LAND, WALK, create_hero};

const SHOT: ActionId = ActionId::new(9);
const SPIN: ActionId = ActionId::new(10);

fn create_gunner() -> Character {
	CharacterBuilder::new(ActionDefinition::new(vec![0]))
		.action(SHOT, ActionDefinition::new(vec![3, 5, 7]).continuous(false))
		.action(SPIN, ActionDefinition::new(vec![0, 1, 2]))
		.build()
		.unwrap()
}

#[test_log::test]
fn continuous_action_loops() {
	let mut gunner = create_gunner();
	gunner.push(SPIN).unwrap();

	let indices: Vec<usize> = (0..4).map(|_| gunner.update().frame_index).collect();
	assert_eq!(indices, vec![0, 1, 2, 0]);
}

#[test_log::test]
fn one_shot_action_freezes_on_last_frame() {
	let mut gunner = create_gunner();
	gunner.push(SHOT).unwrap();

	let ticks: Vec<Tick> = (0..4).map(|_| gunner.update()).collect();
	let frames: Vec<_> = ticks.iter().map(|t| t.frame).collect();
	assert_eq!(frames, vec![Some(3), Some(5), Some(7), Some(7)]);
	assert_eq!(ticks[3].frame_index, 2);
	assert_eq!(ticks[3].events, vec![ActionEvent::Finished(SHOT)]);
	assert_eq!(gunner.execution_state(SHOT), Some(ExecutionState::Finished));
	assert_eq!(gunner.current_action(), SHOT);
}

#[test_log::test]
fn finished_action_pops_without_wasting_a_tick() {
	let mut gunner = create_gunner();
	gunner.push(SHOT).unwrap();
	for _ in 0..4 {
		gunner.update();
	}

	let tick = gunner.update();
	assert_eq!(tick.action, ActionId::IDLE);
	assert_eq!(tick.frame, Some(0));
	assert_eq!(
		tick.events,
		vec![ActionEvent::Completed(SHOT), ActionEvent::Started(ActionId::IDLE)]
	);
	assert_eq!(gunner.execution_state(SHOT), Some(ExecutionState::NotStarted));
}

#[test_log::test]
fn repushing_finished_action_rearms_it() {
	let mut gunner = create_gunner();
	gunner.push(SHOT).unwrap();
	for _ in 0..4 {
		gunner.update();
	}
	assert_eq!(gunner.execution_state(SHOT), Some(ExecutionState::Finished));

	assert_eq!(gunner.push(SHOT).unwrap(), PushOutcome::Rearmed);
	assert_eq!(gunner.execution_state(SHOT), Some(ExecutionState::Running));
	assert_eq!(gunner.stack_depth(), 2);

	// Still on its last frame, so it finishes again on the next tick
	let tick = gunner.update();
	assert_eq!(tick.events, vec![ActionEvent::Finished(SHOT)]);
	assert_eq!(tick.frame, Some(7));
}

#[test_log::test]
fn repushing_running_action_is_idempotent() {
	let mut hero = create_hero();
	hero.push(WALK).unwrap();
	hero.update();

	assert_eq!(hero.push(WALK).unwrap(), PushOutcome::AlreadyActive);
	assert_eq!(hero.push(WALK).unwrap(), PushOutcome::AlreadyActive);
	assert_eq!(hero.stack_depth(), 2);
	assert_eq!(hero.execution_state(WALK), Some(ExecutionState::Running));
	assert_eq!(hero.update().frame_index, 1);
}

#[test_log::test]
fn stack_never_empties() {
	let mut hero = create_hero();
	let script = [JUMP, WALK, JUMP, LAND, ActionId::IDLE, JUMP];

	for (i, id) in script.iter().cycle().take(24).enumerate() {
		hero.push(*id).unwrap();
		for _ in 0..(i % 5) {
			hero.update();
			assert!(hero.stack_depth() >= 1);
			assert_ne!(hero.current_action(), ActionId::NONE);
		}
		if i % 7 == 0 {
			hero.pop_until_base();
		}
	}

	hero.pop_until_base();
	for _ in 0..8 {
		hero.update();
	}
	assert!(hero.stack_depth() >= 1);
}

#[test_log::test]
fn turning_keeps_animation_state() {
	let mut hero = create_hero();
	hero.push(WALK).unwrap();
	hero.update();
	hero.update();

	hero.set_direction(Direction::Mirrored);
	assert!(hero.is_mirrored());
	assert_eq!(hero.frame_index(), 1);
	assert_eq!(hero.current_action(), WALK);
	assert_eq!(hero.update().frame_index, 2);
}
