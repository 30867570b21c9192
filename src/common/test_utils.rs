//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) executes a system
//! without building a full schedule. Systems that use `Commands` enqueue
//! structural changes, so we call `world.flush()` after running to apply the
//! queued commands before assertions.

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Ensure the backing storage for a message type exists (needed by
/// `MessageReader`/`MessageWriter` parameters in systems under test).
pub fn ensure_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Drain all pending messages of a type into a Vec.
pub fn drain_messages<M: Message + Clone>(world: &mut World) -> Vec<M> {
    let mut msgs = world.resource_mut::<Messages<M>>();
    msgs.drain().collect()
}
