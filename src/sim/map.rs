//! Static tile map and level-text parsing
//!
//! The map is write-once: it is built by `TileMap::parse` and then shared
//! read-only (behind an `Arc`) by every world snapshot of a session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::actor::{Actor, ActorId, Coin, Lava, Monster, Player};
use crate::Tuning;

/// What a single grid cell is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    Wall,
    Lava,
}

/// Level text could not be turned into a map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level text is empty")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
    #[error("level has no player start")]
    MissingPlayer,
    #[error("second player start at ({x}, {y})")]
    ExtraPlayer { x: usize, y: usize },
}

/// Immutable tile grid plus the actors found in the level text
#[derive(Debug, Clone)]
pub struct TileMap {
    width: usize,
    height: usize,
    /// Row-major, `width * height` cells
    tiles: Vec<TileKind>,
    start_actors: Vec<Actor>,
}

impl TileMap {
    /// Parse level text, drawing coin phases from `rng`.
    ///
    /// The whole text and each line are trimmed, so indented literals work.
    pub fn parse<R: Rng>(
        text: &str,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Result<Self, LevelError> {
        let rows: Vec<&str> = text.trim().lines().map(str::trim).collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(LevelError::Empty);
        }
        let height = rows.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut start_actors = Vec::new();
        let mut player_seen = false;
        let mut next_id: ActorId = 0;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let cell = Vec2::new(x as f32, y as f32);
                let id = next_id;
                let actor = match glyph {
                    '.' => None,
                    '#' => {
                        tiles.push(TileKind::Wall);
                        continue;
                    }
                    '+' => {
                        tiles.push(TileKind::Lava);
                        continue;
                    }
                    '@' => {
                        if player_seen {
                            return Err(LevelError::ExtraPlayer { x, y });
                        }
                        player_seen = true;
                        Some(Actor::Player(Player::spawn(id, cell)))
                    }
                    'o' => Some(Actor::Coin(Coin::spawn(id, cell, rng))),
                    'M' => Some(Actor::Monster(Monster::spawn(id, cell, tuning))),
                    '=' => Some(Actor::Lava(Lava::horizontal(id, cell, tuning))),
                    '|' => Some(Actor::Lava(Lava::vertical(id, cell, tuning))),
                    'v' => Some(Actor::Lava(Lava::drip(id, cell, tuning))),
                    _ => return Err(LevelError::UnknownGlyph { glyph, x, y }),
                };

                // Actors stand on empty cells
                tiles.push(TileKind::Empty);
                if let Some(actor) = actor {
                    start_actors.push(actor);
                    next_id += 1;
                }
            }
        }

        if !player_seen {
            return Err(LevelError::MissingPlayer);
        }

        log::info!(
            "Parsed {}x{} level with {} actors",
            width,
            height,
            start_actors.len()
        );

        Ok(Self {
            width,
            height,
            tiles,
            start_actors,
        })
    }

    /// Parse level text with a reproducible coin-phase sequence
    pub fn parse_seeded(text: &str, tuning: &Tuning, seed: u64) -> Result<Self, LevelError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::parse(text, tuning, &mut rng)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Actors as they were placed in the level text, in reading order
    pub fn start_actors(&self) -> &[Actor] {
        &self.start_actors
    }

    /// Tile at a cell. Anything outside the grid is wall.
    pub fn tile(&self, x: i32, y: i32) -> TileKind {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return TileKind::Wall;
        }
        self.tiles[y as usize * self.width + x as usize]
    }

    /// Does the box at `pos` with `size` cover any cell of `kind`?
    ///
    /// Covered cells span `floor(min)..ceil(max)` on each axis, so a box
    /// edge lying exactly on a grid line does not reach the next cell.
    pub fn touches(&self, pos: Vec2, size: Vec2, kind: TileKind) -> bool {
        let min = pos.floor();
        let max = (pos + size).ceil();

        for y in min.y as i32..max.y as i32 {
            for x in min.x as i32..max.x as i32 {
                if self.tile(x, y) == kind {
                    return true;
                }
            }
        }
        false
    }
}
