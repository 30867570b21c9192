//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub player_bullet_speed: f32,
    pub enemy_bullet_speed: f32,
    /// Seconds an enemy takes to cross the arena top to bottom.
    pub enemy_transit_secs: f32,
    /// Seconds a life pickup takes to fall through the arena.
    pub life_fall_secs: f32,
    /// Delay before a freshly spawned enemy returns fire (levels > 1).
    pub enemy_fire_delay_secs: f32,
    /// Delay between the session ending and the game-over screen.
    pub game_over_delay_secs: f32,
    /// Downward scroll speed of the backdrop while a session runs.
    pub scroll_speed: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            player_bullet_speed: 1300.0,
            enemy_bullet_speed: 1400.0,
            enemy_transit_secs: 1.7,
            life_fall_secs: 1.5,
            enemy_fire_delay_secs: 0.5,
            game_over_delay_secs: 1.0,
            scroll_speed: 300.0,
        }
    }
}
