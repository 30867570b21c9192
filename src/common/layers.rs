//! Collision layers.
//!
//! Bitmasks exist only at the physics boundary: they decide which pairs
//! generate contact events at all. Gameplay rules dispatch on the closed
//! `Category` enum instead (see `plugins::contact`).

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Player,
    PlayerBullet,
    Enemy,
    EnemyBullet,
    Life,
}
