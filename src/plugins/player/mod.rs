//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource
//! - Update: apply drag to the ship transform, clamped to the arena
//! - Update: tap fires a bullet request while the session runs
//!
//! Input resources are `Option` so the systems become no-ops in headless
//! test apps where the input plugin is absent.

use avian2d::prelude::*;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{arena::Arena, layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::contact::Category;
use crate::plugins::projectiles::{BulletKind, SpawnBulletRequest};
use crate::plugins::session::Session;

const SHIP_SIZE: Vec2 = Vec2::new(44.0, 52.0);
const MUZZLE_OFFSET: f32 = 30.0;

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    drag_dx: f32,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (gather_input, apply_drag.after(gather_input), fire_on_tap)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut commands: Commands, arena: Res<Arena>) {
    let layers = CollisionLayers::new(
        Layer::Player,
        [Layer::Enemy, Layer::EnemyBullet, Layer::Life],
    );

    commands.spawn((
        Name::new("Player"),
        Player,
        Category::Player,
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(SHIP_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, arena.bottom() * 0.6, 2.0),
        RigidBody::Kinematic,
        Collider::rectangle(SHIP_SIZE.x, SHIP_SIZE.y),
        layers,
        LinearVelocity::ZERO,
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    motion: Option<Res<AccumulatedMouseMotion>>,
    mut input: ResMut<PlayerInput>,
) {
    input.drag_dx = 0.0;

    let (Some(buttons), Some(motion)) = (buttons, motion) else {
        return;
    };
    if buttons.pressed(MouseButton::Left) {
        input.drag_dx = motion.delta.x;
    }
}

/// Drag moves the ship directly; the arena edges are hard barriers.
fn apply_drag(
    session: Res<Session>,
    input: Res<PlayerInput>,
    arena: Res<Arena>,
    mut q_player: Query<&mut Transform, With<Player>>,
) {
    if !session.is_running() {
        return;
    }
    let Ok(mut tf) = q_player.single_mut() else {
        return;
    };
    tf.translation.x = arena.clamp_x(tf.translation.x + input.drag_dx, SHIP_SIZE.x * 0.5);
}

fn fire_on_tap(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    session: Res<Session>,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, With<Player>>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) || !session.is_running() {
        return;
    }
    let Ok(tf) = q_player.single() else {
        return;
    };

    let origin = tf.translation.truncate();
    writer.write(SpawnBulletRequest {
        kind: BulletKind::Player,
        pos: origin + Vec2::Y * MUZZLE_OFFSET,
        vel: Vec2::Y * tunables.player_bullet_speed,
    });
}

#[cfg(test)]
mod tests;
