//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `StatesPlugin` + asset/scene plugins cover what the physics stack needs.
//! - `configure_headless` installs the gameplay plugins without render infra.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use space_battle::common::state::GameState;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    space_battle::game::configure_headless(&mut app);
    app
}

/// Boot, then move the scene host from PreGame into a running session.
#[allow(dead_code)]
pub fn enter_in_game(app: &mut App) {
    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}
