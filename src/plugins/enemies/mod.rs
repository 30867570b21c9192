//! Enemies plugin: diving ships spawned on the director's cadence.
//!
//! Consumes `SpawnEnemy` requests, gives each enemy a straight dive path
//! between random entry and exit lanes, and (from level 2 on) a one-shot
//! return-fire timer. The timer is a component on the enemy entity, so
//! destroying the enemy cancels the pending shot with it; there is no
//! detached callback that can outlive its owner.
//!
//! An enemy that reaches the exit line below the arena escaped: it is
//! removed and costs a life.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::{arena::Arena, layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::contact::Category;
use crate::plugins::projectiles::{BulletKind, SpawnBulletRequest};
use crate::plugins::session::{self, DirectorCommand, Session, SpawnEnemy};

const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 40.0);
const LANE_MARGIN: f32 = 30.0;

#[derive(Component)]
pub struct Enemy;

/// One-shot return-fire timer owned by the enemy entity.
#[derive(Component, Debug)]
pub struct FireDelay {
    timer: Timer,
    dir: Vec2,
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            spawn_enemies.after(session::tick_spawn_timers),
            enemy_return_fire,
        )
            .run_if(in_state(GameState::InGame)),
    );
    app.add_systems(
        FixedUpdate,
        despawn_escaped.run_if(in_state(GameState::InGame)),
    );
}

pub fn spawn_enemies(
    mut commands: Commands,
    mut reader: MessageReader<SpawnEnemy>,
    session: Res<Session>,
    arena: Res<Arena>,
    tunables: Res<Tunables>,
    mut rng: Local<Option<SmallRng>>,
) {
    let rng = rng.get_or_insert_with(SmallRng::from_os_rng);
    let lane = -arena.half_width + LANE_MARGIN..=arena.half_width - LANE_MARGIN;

    for _ in reader.read() {
        let start = Vec2::new(rng.random_range(lane.clone()), arena.spawn_y());
        let end = Vec2::new(rng.random_range(lane.clone()), arena.cull_y());
        let dir = (end - start).normalize();

        let mut enemy = commands.spawn((
            Name::new("Enemy"),
            Enemy,
            Category::Enemy,
            Sprite {
                color: Color::srgb(0.9, 0.3, 0.3),
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            Transform {
                translation: start.extend(2.0),
                // Sprites face down; lean into the dive direction.
                rotation: Quat::from_rotation_z(Vec2::NEG_Y.angle_to(dir)),
                ..default()
            },
            RigidBody::Kinematic,
            Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            CollisionLayers::new(Layer::Enemy, [Layer::Player, Layer::PlayerBullet]),
            LinearVelocity((end - start) / tunables.enemy_transit_secs),
            DespawnOnExit(GameState::InGame),
        ));

        // Level 1 enemies dive quietly; later ones shoot back.
        if session.level() > 1 {
            enemy.insert(FireDelay {
                timer: Timer::from_seconds(tunables.enemy_fire_delay_secs, TimerMode::Once),
                dir,
            });
        }
    }
}

pub fn enemy_return_fire(
    time: Res<Time>,
    session: Res<Session>,
    tunables: Res<Tunables>,
    mut commands: Commands,
    mut q: Query<(Entity, &Transform, &mut FireDelay), With<Enemy>>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    for (e, tf, mut delay) in &mut q {
        delay.timer.tick(time.delta());
        if !delay.timer.is_finished() {
            continue;
        }

        if session.is_running() {
            writer.write(SpawnBulletRequest {
                kind: BulletKind::Enemy,
                pos: tf.translation.truncate() + delay.dir * ENEMY_SIZE.y,
                vel: delay.dir * tunables.enemy_bullet_speed,
            });
        }
        commands.entity(e).remove::<FireDelay>();
    }
}

pub fn despawn_escaped(
    mut commands: Commands,
    arena: Res<Arena>,
    q: Query<(Entity, &Transform), With<Enemy>>,
    mut director: MessageWriter<DirectorCommand>,
) {
    for (e, tf) in &q {
        if tf.translation.y <= arena.cull_y() {
            commands.entity(e).despawn();
            director.write(DirectorCommand::LoseLife);
        }
    }
}
