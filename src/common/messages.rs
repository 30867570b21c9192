//! Message channel maintenance.
//!
//! Messages are double-buffered; `update()` advances buffers. Each plugin
//! that owns a message type registers this system for it in `PostUpdate`.

use bevy::ecs::message::{Message, Messages};
use bevy::prelude::*;

pub fn update_messages<M: Message>(mut msgs: ResMut<Messages<M>>) {
    msgs.update();
}

/// Register a message type: backing storage plus the per-frame update.
pub fn register_message<M: Message>(app: &mut App) {
    app.init_resource::<Messages<M>>();
    app.add_systems(PostUpdate, update_messages::<M>);
}
