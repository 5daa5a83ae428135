//! Physics integration through the public character API

use spriteact_rs::prelude::*;

use crate::{JUMP, create_hero};

#[test_log::test]
fn friction_decays_facing_component() {
	let mut hero = create_hero();
	hero.set_velocity(Vec2::new(5, 0));

	let xs: Vec<i32> = (0..4).map(|_| hero.update().velocity.x).collect();
	assert_eq!(xs, vec![3, 1, 0, 0]);
	assert_eq!(hero.position(), Vec2::new(4, 0));
}

#[test_log::test]
fn gravity_applies_while_moving() {
	let mut hero = create_hero();
	hero.set_velocity(Vec2::new(0, 4));

	let ys: Vec<i32> = (0..4).map(|_| hero.update().velocity.y).collect();
	assert_eq!(ys, vec![2, 0, 0, 0]);
}

#[test_log::test]
fn gravity_always_keeps_accelerating() {
	let mut hero = create_hero();
	hero.set_physics(PhysicsConfig::default().with_gravity_mode(GravityMode::Always));
	hero.set_velocity(Vec2::new(0, 4));

	let ys: Vec<i32> = (0..4).map(|_| hero.update().velocity.y).collect();
	assert_eq!(ys, vec![2, 0, -2, -4]);
}

#[test_log::test]
fn walking_left_slows_down() {
	let mut hero = create_hero();
	hero.walk(Direction::Mirrored);
	assert!(hero.is_mirrored());

	let xs: Vec<i32> = (0..4).map(|_| hero.update().velocity.x).collect();
	assert_eq!(xs, vec![-3, -1, 0, 0]);
	assert_eq!(hero.position().x, -4);
}

#[test_log::test]
fn jump_hook_launches_on_jump_start() {
	let mut hero = create_hero();
	hero.set_hook(JUMP, |_: ActionId, body: &mut Body| body.velocity.y = -10).unwrap();
	hero.push(JUMP).unwrap();

	// Crouch plays first: no vertical motion yet
	for _ in 0..3 {
		assert_eq!(hero.update().velocity.y, 0);
	}

	let tick = hero.update();
	assert_eq!(tick.action, JUMP);
	assert_eq!(tick.velocity.y, -12);
	assert_eq!(tick.position.y, -12);
}

#[test_log::test]
fn physics_runs_while_animation_is_frozen() {
	let mut hero = create_hero();
	hero.push(JUMP).unwrap();
	hero.set_velocity(Vec2::new(8, 0));

	let positions: Vec<i32> = (0..3).map(|_| hero.update().position.x).collect();
	assert_eq!(positions, vec![6, 10, 12]);
}
