//! Sprite animation playback state.
//!
//! An entity carries an [`Animation`] pointing at a key in the
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore).
//! The [`animation`](crate::systems::animation::animation) system advances
//! `frame_index` from `fps` and writes the current frame rect into the
//! entity's [`Sprite`](crate::components::sprite::Sprite) offset.

use bevy_ecs::prelude::Component;

/// Per-entity animation playback state.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to a named animation, restarting playback from frame 0.
    pub fn activate(&mut self, animation_key: impl Into<String>) {
        self.animation_key = animation_key.into();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
    }
}
