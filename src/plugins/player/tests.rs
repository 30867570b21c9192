#![cfg(test)]

use bevy::prelude::*;

use super::*;
use crate::common::test_utils::{drain_messages, ensure_messages, run_system_once};

fn running_session() -> Session {
    let mut session = Session::new();
    let _ = session.start();
    session
}

fn player_world() -> World {
    let mut world = World::new();
    world.insert_resource(Arena::default());
    world.insert_resource(Tunables::default());
    world.insert_resource(running_session());
    ensure_messages::<SpawnBulletRequest>(&mut world);
    world
}

#[test]
fn spawn_creates_a_classified_ship_in_the_lower_arena() {
    let mut world = player_world();
    run_system_once(&mut world, spawn);

    let (category, tf) = world
        .query_filtered::<(&Category, &Transform), With<Player>>()
        .single(&world)
        .expect("one player");
    assert_eq!(*category, Category::Player);
    assert!(tf.translation.y < 0.0);
}

#[test]
fn drag_moves_the_ship_but_stops_at_the_arena_edge() {
    let mut world = player_world();
    let half_width = world.resource::<Arena>().half_width;
    world.spawn((Player, Transform::from_xyz(0.0, -340.0, 2.0)));

    world.insert_resource(PlayerInput { drag_dx: 120.0 });
    run_system_once(&mut world, apply_drag);
    let x = world.query::<&Transform>().single(&world).unwrap().translation.x;
    assert_eq!(x, 120.0);

    world.insert_resource(PlayerInput { drag_dx: 10_000.0 });
    run_system_once(&mut world, apply_drag);
    let x = world.query::<&Transform>().single(&world).unwrap().translation.x;
    assert_eq!(x, half_width - SHIP_SIZE.x * 0.5);
}

#[test]
fn drag_is_ignored_once_the_session_ended() {
    let mut world = player_world();
    world.resource_mut::<Session>().end();
    world.spawn((Player, Transform::from_xyz(0.0, -340.0, 2.0)));
    world.insert_resource(PlayerInput { drag_dx: 120.0 });

    run_system_once(&mut world, apply_drag);

    let x = world.query::<&Transform>().single(&world).unwrap().translation.x;
    assert_eq!(x, 0.0);
}

#[test]
fn tap_requests_an_upward_bullet_from_the_muzzle() {
    let mut world = player_world();
    world.spawn((Player, Transform::from_xyz(15.0, -340.0, 2.0)));

    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    world.insert_resource(buttons);

    run_system_once(&mut world, fire_on_tap);

    let requests = drain_messages::<SpawnBulletRequest>(&mut world);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].kind, BulletKind::Player);
    assert_eq!(requests[0].pos, Vec2::new(15.0, -340.0 + MUZZLE_OFFSET));
    assert!(requests[0].vel.y > 0.0);
}

#[test]
fn tap_after_the_session_ended_fires_nothing() {
    let mut world = player_world();
    world.resource_mut::<Session>().end();
    world.spawn((Player, Transform::from_xyz(0.0, -340.0, 2.0)));

    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    world.insert_resource(buttons);

    run_system_once(&mut world, fire_on_tap);

    assert!(drain_messages::<SpawnBulletRequest>(&mut world).is_empty());
}
