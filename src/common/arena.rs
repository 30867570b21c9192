//! Playable area.
//!
//! The arena is a portrait rectangle centered on the origin. Spawns enter
//! above the visible top edge and everything is culled a matching margin
//! below the bottom edge, so entities never pop in or out on screen.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy)]
pub struct Arena {
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        // 9:16 portrait, matches the default window resolution.
        Self { half_width: 324.0, half_height: 576.0 }
    }
}

impl Arena {
    /// Top of the visible area. Contacts above this line are spurious
    /// (the entity has not entered the screen yet).
    #[inline]
    pub fn top(&self) -> f32 {
        self.half_height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        -self.half_height
    }

    /// Entry line for enemies and pickups, above the visible top edge.
    #[inline]
    pub fn spawn_y(&self) -> f32 {
        self.half_height * 1.4
    }

    /// Cull line below the visible bottom edge.
    #[inline]
    pub fn cull_y(&self) -> f32 {
        -self.half_height * 1.4
    }

    /// Clamp an x coordinate so a body of `half_extent` stays inside.
    #[inline]
    pub fn clamp_x(&self, x: f32, half_extent: f32) -> f32 {
        x.clamp(-self.half_width + half_extent, self.half_width - half_extent)
    }
}
