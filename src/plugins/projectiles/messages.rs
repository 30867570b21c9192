//! Buffered spawn requests.
//!
//! Producers create *intent*; the consumer applies it. Bullet producers
//! therefore never touch colliders or layers themselves.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletKind {
    Player,
    Enemy,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBulletRequest {
    pub kind: BulletKind,
    pub pos: Vec2,
    pub vel: Vec2,
}
