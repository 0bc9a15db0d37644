//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite-sheet animations
//! - [`enemy`] – chase behavior state and alive/dead flag for enemies
//! - [`fuse`] – countdown for transient effects that expire and explode
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – lives, activity sub-state, and respawn bookkeeping
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod enemy;
pub mod fuse;
pub mod mapposition;
pub mod player;
pub mod sprite;
pub mod zindex;
