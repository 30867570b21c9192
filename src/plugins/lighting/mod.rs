//! Lighting plugin (Firefly) (render-only).
//!
//! A warm engine glow follows the ship, and every explosion gets a short
//! flash light that lives and dies with the explosion entity.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::explosions::Explosion;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct EngineLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, (follow_player_light, flash_explosions));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("EngineLight"),
        EngineLight,
        PointLight2d {
            color: Color::srgb(0.6, 0.85, 1.0),
            radius: 260.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player_light(
    q_player: Query<&Transform, (With<Player>, Without<EngineLight>)>,
    mut q_light: Query<&mut Transform, (With<EngineLight>, Without<Player>)>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}

fn flash_explosions(mut commands: Commands, q_new: Query<Entity, Added<Explosion>>) {
    for e in &q_new {
        commands.entity(e).insert(PointLight2d {
            color: Color::srgb(1.0, 0.7, 0.3),
            radius: 220.0,
            ..default()
        });
    }
}
