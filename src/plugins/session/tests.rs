#![cfg(test)]

use std::time::Duration;

use bevy::prelude::*;

use super::director::{MAX_LIVES, Phase, Session, SpawnSchedule};
use super::*;
use crate::common::test_utils::{drain_messages, ensure_messages, run_system_once};
use crate::plugins::audio::SoundCue;

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn started_session() -> Session {
    let mut session = Session::new();
    let level = session.start();
    assert_eq!(level, 1);
    session
}

/// World with a running session, level-1 timers and all message storage the
/// director systems touch.
fn director_world() -> World {
    let mut world = World::new();
    world.insert_resource(crate::common::tunables::Tunables::default());
    ensure_messages::<DirectorCommand>(&mut world);
    ensure_messages::<LevelStarted>(&mut world);
    ensure_messages::<SpawnEnemy>(&mut world);
    ensure_messages::<SpawnLife>(&mut world);
    ensure_messages::<SoundCue>(&mut world);

    world.insert_resource(SpawnTimers::for_level(1));
    world.insert_resource(started_session());
    world
}

fn set_time(world: &mut World, dt: f32) {
    let mut t = Time::default();
    t.advance_by(Duration::from_secs_f32(dt));
    world.insert_resource(t);
}

// -----------------------------------------------------------------------------
// Session state machine
// -----------------------------------------------------------------------------

#[test]
fn fresh_session_starts_at_level_one_with_three_lives() {
    let session = started_session();
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.score(), 0);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.level(), 1);
}

#[test]
fn seventy_five_kills_advance_exactly_four_levels() {
    let mut session = started_session();

    let mut advances = Vec::new();
    for _ in 0..75 {
        if let Some(level) = session.add_score() {
            advances.push((session.score(), level));
        }
    }

    assert_eq!(advances, vec![(10, 2), (25, 3), (50, 4), (75, 5)]);
    assert_eq!(session.score(), 75);
}

#[test]
fn scores_past_the_last_threshold_do_not_advance() {
    let mut session = started_session();
    for _ in 0..75 {
        let _ = session.add_score();
    }
    for _ in 0..25 {
        assert_eq!(session.add_score(), None);
    }
    assert_eq!(session.level(), 5);
    assert_eq!(session.score(), 100);
}

#[test]
fn add_score_is_ignored_unless_running() {
    let mut session = Session::new();
    assert_eq!(session.add_score(), None);
    assert_eq!(session.score(), 0);

    let _ = session.start();
    session.end();
    assert_eq!(session.add_score(), None);
    assert_eq!(session.score(), 0);
}

#[test]
fn gain_life_caps_at_five() {
    let mut session = started_session();
    for _ in 0..20 {
        session.gain_life();
    }
    assert_eq!(session.lives(), MAX_LIVES);
}

#[test]
fn losing_all_lives_ends_the_session() {
    let mut session = started_session();
    assert!(!session.lose_life());
    assert!(!session.lose_life());
    assert!(session.lose_life());
    assert_eq!(session.phase(), Phase::Ended);

    // Terminal: further losses change nothing.
    assert!(!session.lose_life());
    assert_eq!(session.lives(), 0);
}

#[test]
fn end_is_idempotent() {
    let mut session = started_session();
    session.end();
    session.end();
    assert_eq!(session.phase(), Phase::Ended);
}

// -----------------------------------------------------------------------------
// Spawn schedule table
// -----------------------------------------------------------------------------

#[test]
fn schedule_matches_the_level_table() {
    let level_1 = SpawnSchedule::for_level(1);
    assert_eq!(level_1.enemy_interval, Duration::from_secs_f32(1.6));
    assert_eq!(level_1.life_interval, Duration::from_secs_f32(8.0));

    let level_5 = SpawnSchedule::for_level(5);
    assert_eq!(level_5.enemy_interval, Duration::from_secs_f32(0.6));
    assert_eq!(level_5.life_interval, Duration::from_secs_f32(12.0));
}

#[test]
fn levels_past_the_table_reuse_the_last_row() {
    let last = SpawnSchedule::for_level(5);
    for level in [6, 7, 42, u32::MAX] {
        assert_eq!(SpawnSchedule::for_level(level), last);
    }
}

#[test]
fn enemy_cadence_never_slows_down_as_levels_rise() {
    let mut prev = SpawnSchedule::for_level(1).enemy_interval;
    for level in 2..=8 {
        let next = SpawnSchedule::for_level(level).enemy_interval;
        assert!(next <= prev, "level {level} got slower");
        assert!(next > Duration::ZERO);
        prev = next;
    }
}

// -----------------------------------------------------------------------------
// Director systems
// -----------------------------------------------------------------------------

#[test]
fn begin_session_inserts_fresh_state_and_announces_level_one() {
    let mut world = World::new();
    ensure_messages::<LevelStarted>(&mut world);

    run_system_once(&mut world, begin_session);

    let session = world.resource::<Session>();
    assert_eq!(session.level(), 1);
    assert_eq!(session.lives(), 3);
    assert!(session.is_running());
    assert!(world.get_resource::<SpawnTimers>().is_some());
    assert_eq!(drain_messages::<LevelStarted>(&mut world), vec![LevelStarted(1)]);
}

#[test]
fn spawn_timers_emit_requests_at_their_cadence() {
    let mut world = director_world();

    // Past the enemy interval, short of the life interval.
    set_time(&mut world, 1.7);
    run_system_once(&mut world, tick_spawn_timers);
    assert_eq!(drain_messages::<SpawnEnemy>(&mut world).len(), 1);
    assert_eq!(drain_messages::<SpawnLife>(&mut world).len(), 0);

    // Past the life interval too.
    set_time(&mut world, 8.0);
    run_system_once(&mut world, tick_spawn_timers);
    assert!(!drain_messages::<SpawnEnemy>(&mut world).is_empty());
    assert_eq!(drain_messages::<SpawnLife>(&mut world).len(), 1);
}

#[test]
fn spawn_ticks_are_noops_once_the_session_ended() {
    let mut world = director_world();
    world.resource_mut::<Session>().end();

    set_time(&mut world, 30.0);
    run_system_once(&mut world, tick_spawn_timers);

    assert!(drain_messages::<SpawnEnemy>(&mut world).is_empty());
    assert!(drain_messages::<SpawnLife>(&mut world).is_empty());
}

#[test]
fn losing_three_lives_halts_spawning_and_schedules_game_over() {
    let mut world = director_world();
    for _ in 0..3 {
        world.write_message(DirectorCommand::LoseLife);
    }

    run_system_once(&mut world, apply_director_commands);

    assert_eq!(world.resource::<Session>().phase(), Phase::Ended);
    assert!(world.resource::<SpawnTimers>().is_halted());
    assert!(world.get_resource::<GameOverDelay>().is_some());

    // Halted timers never fire again, even across a long stall.
    set_time(&mut world, 60.0);
    run_system_once(&mut world, tick_spawn_timers);
    assert!(drain_messages::<SpawnEnemy>(&mut world).is_empty());
    assert!(drain_messages::<SpawnLife>(&mut world).is_empty());
}

#[test]
fn fatal_collision_ends_the_session_regardless_of_lives() {
    let mut world = director_world();
    world.write_message(DirectorCommand::EndSession);

    run_system_once(&mut world, apply_director_commands);

    let session = world.resource::<Session>();
    assert_eq!(session.phase(), Phase::Ended);
    assert_eq!(session.lives(), 3);
    assert!(world.resource::<SpawnTimers>().is_halted());
    assert!(world.get_resource::<GameOverDelay>().is_some());
}

#[test]
fn tenth_point_rebuilds_the_spawn_timers_for_level_two() {
    let mut world = director_world();
    for _ in 0..10 {
        world.write_message(DirectorCommand::AddScore);
    }

    run_system_once(&mut world, apply_director_commands);

    let session = world.resource::<Session>();
    assert_eq!(session.score(), 10);
    assert_eq!(session.level(), 2);

    let timers = world.resource::<SpawnTimers>();
    assert_eq!(timers.enemies.duration(), Duration::from_secs_f32(1.3));
    assert_eq!(timers.lives.duration(), Duration::from_secs_f32(9.0));
    assert_eq!(drain_messages::<LevelStarted>(&mut world), vec![LevelStarted(2)]);
}

#[test]
fn gained_life_plays_its_cue() {
    let mut world = director_world();
    world.write_message(DirectorCommand::GainLife);

    run_system_once(&mut world, apply_director_commands);

    assert_eq!(world.resource::<Session>().lives(), 4);
    assert_eq!(drain_messages::<SoundCue>(&mut world), vec![SoundCue::GainLife]);
}

#[test]
fn game_over_transition_waits_out_the_delay() {
    let mut world = World::new();
    world.insert_resource(NextState::<crate::common::state::GameState>::default());
    world.insert_resource(GameOverDelay(Timer::from_seconds(1.0, TimerMode::Once)));

    set_time(&mut world, 0.4);
    run_system_once(&mut world, game_over_transition);
    assert!(world.get_resource::<GameOverDelay>().is_some());

    set_time(&mut world, 0.7);
    run_system_once(&mut world, game_over_transition);
    assert!(world.get_resource::<GameOverDelay>().is_none());

    let next = world.resource::<NextState<crate::common::state::GameState>>();
    assert!(matches!(
        next,
        NextState::Pending(crate::common::state::GameState::GameOver)
    ));
}
