//! Actors: the moving bodies of a level
//!
//! Each actor is a small `Copy` value. `update` never mutates in place; it
//! returns the actor's next-tick self, computed against the previous world
//! snapshot.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, collide_from_top};
use super::map::TileKind;
use super::state::{Status, WorldState};
use super::tick::TickInput;
use crate::Tuning;

/// Stable identity of an actor within one level (assigned in parse order)
pub type ActorId = u32;

/// Actor kind tag, for renderers and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Lava,
    Coin,
    Monster,
}

impl ActorKind {
    /// Lowercase name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Player => "player",
            ActorKind::Lava => "lava",
            ActorKind::Coin => "coin",
            ActorKind::Monster => "monster",
        }
    }
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: ActorId,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Player {
    pub const SIZE: Vec2 = Vec2::new(0.8, 1.5);

    /// Spawn standing in `cell`; the body pokes half a tile above it
    pub fn spawn(id: ActorId, cell: Vec2) -> Self {
        Self {
            id,
            pos: cell + Vec2::new(0.0, -0.5),
            vel: Vec2::ZERO,
        }
    }

    /// Collision box at the current position
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Self::SIZE)
    }

    /// Walk, fall and jump against the walls of `state`
    pub fn update(&self, dt: f32, state: &WorldState, input: &TickInput, tuning: &Tuning) -> Self {
        let map = state.map();

        let mut x_speed = 0.0;
        if input.left {
            x_speed -= tuning.player_speed;
        }
        if input.right {
            x_speed += tuning.player_speed;
        }

        let mut pos = self.pos;
        let moved_x = pos + Vec2::new(x_speed * dt, 0.0);
        if !map.touches(moved_x, Self::SIZE, TileKind::Wall) {
            pos = moved_x;
        }

        let mut y_speed = self.vel.y + dt * tuning.gravity;
        let moved_y = pos + Vec2::new(0.0, y_speed * dt);
        if !map.touches(moved_y, Self::SIZE, TileKind::Wall) {
            pos = moved_y;
        } else if input.jump && y_speed > 0.0 {
            // Only a falling player pressing into the floor can jump
            y_speed -= tuning.jump_speed;
        } else {
            y_speed = 0.0;
        }

        Self {
            id: self.id,
            pos,
            vel: Vec2::new(x_speed, y_speed),
        }
    }
}

/// A moving lava blob
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lava {
    pub id: ActorId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Drips jump back here when they hit a wall; others bounce instead
    pub reset: Option<Vec2>,
}

impl Lava {
    pub const SIZE: Vec2 = Vec2::ONE;

    /// `=`: sweeps left and right
    pub fn horizontal(id: ActorId, cell: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: cell,
            vel: Vec2::new(tuning.lava_speed, 0.0),
            reset: None,
        }
    }

    /// `|`: sweeps up and down
    pub fn vertical(id: ActorId, cell: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: cell,
            vel: Vec2::new(0.0, tuning.lava_speed),
            reset: None,
        }
    }

    /// `v`: falls and restarts from its spawn cell
    pub fn drip(id: ActorId, cell: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: cell,
            vel: Vec2::new(0.0, tuning.drip_speed),
            reset: Some(cell),
        }
    }

    /// Collision box at the current position
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Self::SIZE)
    }

    /// Move on, or bounce (reset for drips) when the next spot is walled
    pub fn update(&self, dt: f32, state: &WorldState) -> Self {
        let moved = self.pos + self.vel * dt;
        if !state.map().touches(moved, Self::SIZE, TileKind::Wall) {
            Self { pos: moved, ..*self }
        } else if let Some(reset) = self.reset {
            Self { pos: reset, ..*self }
        } else {
            Self {
                vel: -self.vel,
                ..*self
            }
        }
    }

    /// Touching lava is always fatal
    pub fn collide(&self, state: WorldState) -> WorldState {
        log::debug!("player burned by lava {}", self.id);
        state.with_status(Status::Lost)
    }
}

/// A bobbing coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: ActorId,
    /// Drawn position: `base_pos` plus the vertical bob
    pub pos: Vec2,
    pub base_pos: Vec2,
    /// Bob phase (radians)
    pub wobble: f32,
}

impl Coin {
    pub const SIZE: Vec2 = Vec2::new(0.6, 0.6);

    /// Spawn in `cell` with a random bob phase
    pub fn spawn<R: Rng>(id: ActorId, cell: Vec2, rng: &mut R) -> Self {
        let base_pos = cell + Vec2::new(0.2, 0.1);
        Self {
            id,
            pos: base_pos,
            base_pos,
            wobble: rng.random_range(0.0..TAU),
        }
    }

    /// Collision box at the current position
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Self::SIZE)
    }

    /// Advance the bob phase
    pub fn update(&self, dt: f32, tuning: &Tuning) -> Self {
        let wobble = self.wobble + dt * tuning.wobble_speed;
        let offset = wobble.sin() * tuning.wobble_dist;
        Self {
            pos: self.base_pos + Vec2::new(0.0, offset),
            wobble,
            ..*self
        }
    }

    /// Pick up this coin; the last one wins the level
    pub fn collide(&self, state: WorldState) -> WorldState {
        let state = state.without(self.id);
        let remaining = state.coins_remaining();
        log::debug!("coin {} collected, {} left", self.id, remaining);
        if remaining == 0 {
            state.with_status(Status::Won)
        } else {
            state
        }
    }
}

/// A patrolling monster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: ActorId,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Monster {
    pub const SIZE: Vec2 = Vec2::new(1.2, 2.0);

    /// Spawn with feet on `cell`'s bottom edge, heading left
    pub fn spawn(id: ActorId, cell: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: cell + Vec2::new(0.0, -1.0),
            vel: Vec2::new(-tuning.monster_speed, 0.0),
        }
    }

    /// Collision box at the current position
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Self::SIZE)
    }

    /// Walk until a wall or a ledge, then turn around
    pub fn update(&self, dt: f32, state: &WorldState) -> Self {
        let map = state.map();
        let moved = self.pos + self.vel * dt;

        // Heading left the probe is truncated to whole tiles, so a monster
        // drawn against a right-hand edge does not lock in place
        let probe_width = if self.vel.x < 0.0 {
            Self::SIZE.x.trunc()
        } else {
            Self::SIZE.x
        };
        let probe_pos = moved + Vec2::new(0.0, Self::SIZE.y);

        let blocked = map.touches(moved, Self::SIZE, TileKind::Wall);
        let ledge = map.touches(probe_pos, Vec2::new(probe_width, 1.0), TileKind::Empty);

        if blocked || ledge {
            Self {
                vel: -self.vel,
                ..*self
            }
        } else {
            Self { pos: moved, ..*self }
        }
    }

    /// Stomped from above it dies, any other contact kills the player
    pub fn collide(&self, state: WorldState) -> WorldState {
        let stomped = state
            .player()
            .is_some_and(|player| collide_from_top(&player.bounds(), &self.bounds()));

        if stomped {
            log::debug!("monster {} stomped", self.id);
            state.without(self.id)
        } else {
            log::debug!("player caught by monster {}", self.id);
            state.with_status(Status::Lost)
        }
    }
}

/// Any actor of a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    Player(Player),
    Lava(Lava),
    Coin(Coin),
    Monster(Monster),
}

impl Actor {
    /// Stable id within the level
    pub fn id(&self) -> ActorId {
        match self {
            Actor::Player(a) => a.id,
            Actor::Lava(a) => a.id,
            Actor::Coin(a) => a.id,
            Actor::Monster(a) => a.id,
        }
    }

    /// Which kind of actor this is
    pub fn kind(&self) -> ActorKind {
        match self {
            Actor::Player(_) => ActorKind::Player,
            Actor::Lava(_) => ActorKind::Lava,
            Actor::Coin(_) => ActorKind::Coin,
            Actor::Monster(_) => ActorKind::Monster,
        }
    }

    /// Top-left corner
    pub fn pos(&self) -> Vec2 {
        match self {
            Actor::Player(a) => a.pos,
            Actor::Lava(a) => a.pos,
            Actor::Coin(a) => a.pos,
            Actor::Monster(a) => a.pos,
        }
    }

    /// Fixed body size of the kind
    pub fn size(&self) -> Vec2 {
        match self {
            Actor::Player(_) => Player::SIZE,
            Actor::Lava(_) => Lava::SIZE,
            Actor::Coin(_) => Coin::SIZE,
            Actor::Monster(_) => Monster::SIZE,
        }
    }

    /// Collision box at the current position
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos(), self.size())
    }

    /// Next-tick self. Only the player reads the input.
    pub fn update(&self, dt: f32, state: &WorldState, input: &TickInput, tuning: &Tuning) -> Actor {
        match self {
            Actor::Player(a) => Actor::Player(a.update(dt, state, input, tuning)),
            Actor::Lava(a) => Actor::Lava(a.update(dt, state)),
            Actor::Coin(a) => Actor::Coin(a.update(dt, tuning)),
            Actor::Monster(a) => Actor::Monster(a.update(dt, state)),
        }
    }

    /// React to touching the player. The player itself has no reaction.
    pub fn collide(&self, state: WorldState) -> WorldState {
        match self {
            Actor::Player(_) => state,
            Actor::Lava(a) => a.collide(state),
            Actor::Coin(a) => a.collide(state),
            Actor::Monster(a) => a.collide(state),
        }
    }
}
