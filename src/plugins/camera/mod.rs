//! Camera plugin (render-only).
//!
//! The arena is fixed, so the camera is too: one static `Camera2d` over the
//! origin, spawned once at startup so it survives scene changes.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}
