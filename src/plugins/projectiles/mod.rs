//! Projectiles plugin: message-based producer → consumer spawning.
//!
//! Producers (player tap, enemy return fire) never spawn entities directly;
//! they enqueue `SpawnBulletRequest` intent and the single consumer below
//! applies it. That keeps the entity wiring (sprite, collider, layers,
//! category) in one place for both bullet kinds.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::arena::Arena;
use crate::common::layers::Layer;
use crate::common::messages::register_message;
use crate::common::state::GameState;
use crate::plugins::audio::SoundCue;
use crate::plugins::contact::Category;

pub mod messages;

pub use messages::{BulletKind, SpawnBulletRequest};

/// Marker for both bullet kinds; culling works off it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bullet;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        register_message::<SpawnBulletRequest>(app);

        app.add_systems(Update, spawn_bullets.run_if(in_state(GameState::InGame)));
        app.add_systems(FixedUpdate, cull_bullets.run_if(in_state(GameState::InGame)));
    }
}

pub fn spawn_bullets(
    mut commands: Commands,
    mut reader: MessageReader<SpawnBulletRequest>,
    mut cues: MessageWriter<SoundCue>,
) {
    for req in reader.read() {
        let (name, category, color, size, layers) = match req.kind {
            BulletKind::Player => (
                "PlayerBullet",
                Category::PlayerBullet,
                Color::srgb(1.0, 0.85, 0.3),
                Vec2::new(6.0, 18.0),
                CollisionLayers::new(Layer::PlayerBullet, [Layer::Enemy, Layer::EnemyBullet]),
            ),
            BulletKind::Enemy => (
                "EnemyBullet",
                Category::EnemyBullet,
                Color::srgb(1.0, 0.35, 0.25),
                Vec2::new(8.0, 16.0),
                CollisionLayers::new(Layer::EnemyBullet, [Layer::Player, Layer::PlayerBullet]),
            ),
        };

        // Sprites point up; orient along the travel direction.
        let rotation = Quat::from_rotation_z(Vec2::Y.angle_to(req.vel));

        commands.spawn((
            Name::new(name),
            Bullet,
            category,
            Sprite { color, custom_size: Some(size), ..default() },
            Transform { translation: req.pos.extend(1.0), rotation, ..default() },
            RigidBody::Kinematic,
            Collider::rectangle(size.x, size.y),
            layers,
            LinearVelocity(req.vel),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));

        if req.kind == BulletKind::Player {
            cues.write(SoundCue::Fire);
        }
    }
}

/// Remove bullets that left the arena in either direction.
pub fn cull_bullets(
    mut commands: Commands,
    arena: Res<Arena>,
    q: Query<(Entity, &Transform), With<Bullet>>,
) {
    for (e, tf) in &q {
        let y = tf.translation.y;
        if y > arena.spawn_y() || y < arena.cull_y() {
            commands.entity(e).despawn();
        }
    }
}
