//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Snapshots are immutable; every tick builds a new one
//! - Randomness only at level parse, from an injected RNG
//! - Stable iteration order (level-text order)
//! - No rendering, input-device or platform dependencies

pub mod actor;
pub mod collision;
pub mod map;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorId, ActorKind, Coin, Lava, Monster, Player};
pub use collision::{Aabb, collide_from_top, overlap};
pub use map::{LevelError, TileKind, TileMap};
pub use state::{Status, WorldState};
pub use tick::{TickInput, tick};
