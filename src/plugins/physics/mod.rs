use avian2d::prelude::*;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default().with_length_unit(20.0));
    // Everything here flies on scripted velocities; nothing falls.
    app.insert_resource(Gravity(Vec2::ZERO));
}
