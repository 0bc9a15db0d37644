//! Sprite animation advancement.
//!
//! Animation data lives in
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore);
//! entities carry an [`Animation`](crate::components::animation::Animation)
//! component pointing at a key. Each frame this system advances playback and
//! repoints the [`Sprite`](crate::components::sprite::Sprite) at the current
//! frame of the sheet.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Looping animations wrap; one-shot animations hold their last frame, which
/// is what the attack and explosion sheets want. Unknown keys leave the
/// sprite untouched.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite), With<MapPosition>>,
    animations: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(data) = animations.get(&anim.animation_key) else {
            continue;
        };

        anim.elapsed_time += time.delta;
        let frame_duration = 1.0 / data.fps;
        if anim.elapsed_time >= frame_duration {
            anim.frame_index += 1;
            anim.elapsed_time -= frame_duration;

            if anim.frame_index >= data.frame_count {
                anim.frame_index = if data.looped { 0 } else { data.frame_count - 1 };
            }
        }

        sprite.offset = data.frame_offset(anim.frame_index);
        sprite.width = data.frame_width;
        sprite.height = data.frame_height;
    }
}
