//! Contact rule table.
//!
//! `resolve` is pure: it takes the two sides of a contact in arbitrary order
//! and returns the effects to apply. The physics stage does not guarantee
//! which side of a contact is "A", so the pair is canonicalized by `Category`
//! order first and the table only needs one entry per pair.

use bevy::prelude::*;

/// Gameplay classification of a live entity. Exactly one per entity; the
/// bitmask `Layer` used for contact filtering stays at the physics boundary.
///
/// The derive order is the canonical contact order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Player,
    PlayerBullet,
    Enemy,
    EnemyBullet,
    Life,
}

/// One side of a contact, as the resolver sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactView {
    pub category: Category,
    pub pos: Vec2,
}

/// Side-effecting instructions for the engine and the director. The resolver
/// decides *what* happens; it owns neither the world nor the counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Explosion(Vec2),
    /// Remove the entity carrying this category. Unambiguous: every pair
    /// with effects has two distinct categories.
    Destroy(Category),
    AddScore,
    LoseLife,
    GainLife,
    EndSession,
}

/// Resolve one contact. `ceiling` is the top of the visible area: an enemy
/// above it has not entered the screen (or is mid-removal), so a bullet
/// contact up there is spurious and suppressed.
pub fn resolve(a: ContactView, b: ContactView, ceiling: f32) -> Vec<Effect> {
    use Category::*;
    use Effect::*;

    let (first, second) = if a.category <= b.category { (a, b) } else { (b, a) };

    match (first.category, second.category) {
        // Ramming an enemy is fatal.
        (Player, Enemy) => vec![
            Explosion(first.pos),
            Explosion(second.pos),
            Destroy(Player),
            Destroy(Enemy),
            EndSession,
        ],
        (PlayerBullet, Enemy) if second.pos.y < ceiling => vec![
            AddScore,
            Explosion(second.pos),
            Destroy(PlayerBullet),
            Destroy(Enemy),
        ],
        // Enemy fire costs a life; only the bullet dies.
        (Player, EnemyBullet) => vec![
            Explosion(second.pos),
            Destroy(EnemyBullet),
            LoseLife,
        ],
        (PlayerBullet, EnemyBullet) => vec![
            Explosion(first.pos),
            Explosion(second.pos),
            Destroy(PlayerBullet),
            Destroy(EnemyBullet),
        ],
        (Player, Life) => vec![Destroy(Life), GainLife],
        _ => Vec::new(),
    }
}
