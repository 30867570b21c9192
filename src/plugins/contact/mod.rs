//! Contact plugin: classify colliding pairs and apply the rule table.
//!
//! The resolver consumes `CollisionStart` messages after the narrow phase,
//! looks up each side's `Category`, and applies `rules::resolve`:
//! despawns go straight to the world, counter changes go to the director as
//! `DirectorCommand`s, explosions to the explosion factory.
//!
//! Liveness: a batch-local set marks entities dead the moment a destroy is
//! issued, so a later event in the same batch that references them is a
//! no-op. An entity that was already removed in an earlier frame simply
//! fails the category lookup, which is equally benign.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::arena::Arena;
use crate::common::state::GameState;
use crate::plugins::explosions::SpawnExplosion;
use crate::plugins::session::DirectorCommand;

pub mod rules;

pub use rules::{Category, ContactView, Effect};

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedPostUpdate,
        resolve_contacts
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}

/// The collider entity carries the gameplay components here, but physics may
/// report a separate body entity; prefer it when present.
#[inline]
fn gameplay_owner(collider: Entity, body: Option<Entity>) -> Entity {
    body.unwrap_or(collider)
}

pub fn resolve_contacts(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_bodies: Query<(&Category, &Transform)>,
    arena: Res<Arena>,
    mut director: MessageWriter<DirectorCommand>,
    mut explosions: MessageWriter<SpawnExplosion>,
    mut dead: Local<HashSet<Entity>>,
) {
    dead.clear();

    for ev in started.read() {
        let a = gameplay_owner(ev.collider1, ev.body1);
        let b = gameplay_owner(ev.collider2, ev.body2);

        // A side destroyed earlier in this batch makes the contact stale.
        if dead.contains(&a) || dead.contains(&b) {
            continue;
        }

        let (Ok((cat_a, tf_a)), Ok((cat_b, tf_b))) = (q_bodies.get(a), q_bodies.get(b)) else {
            continue;
        };

        let view_a = ContactView { category: *cat_a, pos: tf_a.translation.truncate() };
        let view_b = ContactView { category: *cat_b, pos: tf_b.translation.truncate() };

        for effect in rules::resolve(view_a, view_b, arena.top()) {
            match effect {
                Effect::Explosion(at) => {
                    explosions.write(SpawnExplosion(at));
                }
                Effect::Destroy(category) => {
                    let target = if *cat_a == category { a } else { b };
                    if dead.insert(target)
                        && let Ok(mut entity) = commands.get_entity(target)
                    {
                        entity.despawn();
                    }
                }
                Effect::AddScore => {
                    director.write(DirectorCommand::AddScore);
                }
                Effect::LoseLife => {
                    director.write(DirectorCommand::LoseLife);
                }
                Effect::GainLife => {
                    director.write(DirectorCommand::GainLife);
                }
                Effect::EndSession => {
                    director.write(DirectorCommand::EndSession);
                }
            }
        }
    }
}
