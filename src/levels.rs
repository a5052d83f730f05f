//! Built-in levels
//!
//! Glyphs: `.` empty, `#` wall, `+` lava tile, `@` player, `o` coin,
//! `M` monster, `=` horizontal lava, `|` vertical lava, `v` dripping lava.

/// A short run over a lava pit with a patrolling monster
pub const FIRST: &str = "
    ......................
    ..#................#..
    ..#..............=.#..
    ..#.........o.o....#..
    ..#.@......#####...#..
    ..#####............#..
    ......#++++++++++++#..
    ......##############..
    ......................
";

/// Drips, a vertical lava column and a monster guarding the last coin
pub const SECOND: &str = "
    ########################
    #......................#
    #...........v..........#
    #..o...................#
    #.####.....|......o..M.#
    #.@.......####..#######.
    ###########++##........#
    ..........#++#.........#
    ..........######.......#
";

/// All built-in levels in play order
pub const ALL: &[&str] = &[FIRST, SECOND];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::{ActorKind, TileMap};

    #[test]
    fn test_builtin_levels_parse() {
        for (i, text) in ALL.iter().enumerate() {
            let map = TileMap::parse_seeded(text, &Tuning::default(), i as u64)
                .unwrap_or_else(|e| panic!("level {} failed to parse: {}", i, e));
            assert!(
                map.start_actors().iter().any(|a| a.kind() == ActorKind::Coin),
                "level {} has no coins",
                i
            );
        }
    }
}
