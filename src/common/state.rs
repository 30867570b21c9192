//! Scene host state machine.
//!
//! `PreGame` shows the start prompt, `InGame` runs a session, `GameOver`
//! shows the final score. The session's own phase (see `plugins::session`)
//! can reach `Ended` while the scene is still `InGame`; the scene host
//! follows after a short delay.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    PreGame,
    InGame,
    GameOver,
}
