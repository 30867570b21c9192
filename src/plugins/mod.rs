//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod audio;
pub mod contact;
pub mod core;
pub mod enemies;
pub mod explosions;
pub mod hud;
pub mod physics;
pub mod pickups;
pub mod player;
pub mod projectiles;
pub mod session;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    session::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    pickups::plugin(app);
    contact::plugin(app);
    explosions::plugin(app);
    audio::plugin(app);
    world::plugin(app);
    hud::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
