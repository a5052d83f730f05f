//! World snapshots
//!
//! A `WorldState` is never modified after it is built. Each tick produces a
//! new one with a fresh actor list; only the tile map is shared.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorKind, Player};
use super::map::TileMap;
use super::tick::{self, TickInput};
use crate::Tuning;

/// Outcome of the level so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    /// Won or lost: drivers stop ticking here
    pub fn is_terminal(&self) -> bool {
        *self != Status::Playing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Lost => "lost",
        }
    }
}

/// Immutable snapshot of a running level
#[derive(Debug, Clone)]
pub struct WorldState {
    map: Arc<TileMap>,
    /// In level-text order; collisions resolve in this order
    actors: Vec<Actor>,
    status: Status,
}

impl WorldState {
    pub fn new(map: Arc<TileMap>, actors: Vec<Actor>, status: Status) -> Self {
        Self {
            map,
            actors,
            status,
        }
    }

    /// First snapshot of a level: the map's start actors, still playing
    pub fn start(map: Arc<TileMap>) -> Self {
        let actors = map.start_actors().to_vec();
        Self::new(map, actors, Status::Playing)
    }

    /// Advance the world by `dt` seconds
    pub fn update(&self, dt: f32, input: &TickInput, tuning: &Tuning) -> Self {
        tick::tick(self, input, dt, tuning)
    }

    #[inline]
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// The map handle, for building further snapshots of the same level
    #[inline]
    pub fn shared_map(&self) -> &Arc<TileMap> {
        &self.map
    }

    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn player(&self) -> Option<&Player> {
        self.actors.iter().find_map(|actor| match actor {
            Actor::Player(player) => Some(player),
            _ => None,
        })
    }

    pub fn coins_remaining(&self) -> usize {
        self.actors
            .iter()
            .filter(|actor| actor.kind() == ActorKind::Coin)
            .count()
    }

    /// Same world with a different status
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Same world with the actor `id` removed
    pub fn without(mut self, id: ActorId) -> Self {
        self.actors.retain(|actor| actor.id() != id);
        self
    }
}
