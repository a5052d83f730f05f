//! Per-tick state transition
//!
//! Advances every actor against the previous snapshot, then settles the
//! player's contacts with lava tiles and with other actors.

use std::sync::Arc;

use super::actor::Actor;
use super::map::TileKind;
use super::state::{Status, WorldState};
use crate::Tuning;

/// Keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the world by `dt` seconds.
///
/// A state that is already won or lost still moves its actors, but no
/// further contacts are resolved and the status is carried over.
pub fn tick(state: &WorldState, input: &TickInput, dt: f32, tuning: &Tuning) -> WorldState {
    // Every actor sees the same "before" world
    let actors: Vec<Actor> = state
        .actors()
        .iter()
        .map(|actor| actor.update(dt, state, input, tuning))
        .collect();

    let mut next = WorldState::new(Arc::clone(state.shared_map()), actors, state.status());
    if next.status() != Status::Playing {
        return next;
    }

    let Some(player) = next.player().copied() else {
        return next;
    };

    if state.map().touches(player.pos, player.bounds().size, TileKind::Lava) {
        log::debug!("player {} fell into lava at {}", player.id, player.pos);
        return next.with_status(Status::Lost);
    }

    let player_box = player.bounds();
    let touching: Vec<Actor> = next
        .actors()
        .iter()
        .filter(|actor| !matches!(actor, Actor::Player(_)))
        .filter(|actor| actor.bounds().overlaps(&player_box))
        .copied()
        .collect();

    // Sequential: each contact sees the state left by the previous one
    for actor in touching {
        log::debug!("player touched {} {}", actor.kind().as_str(), actor.id());
        next = actor.collide(next);
    }

    if next.status() != Status::Playing {
        log::debug!("level {}", next.status().as_str());
    }
    next
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::actor::{ActorKind, Coin, Monster};
    use crate::sim::collision::overlap;
    use crate::sim::map::TileMap;

    const DT: f32 = 0.02;

    fn start(text: &str) -> WorldState {
        let map = TileMap::parse_seeded(text, &Tuning::default(), 42).unwrap();
        WorldState::start(Arc::new(map))
    }

    /// Tick with fixed input until the level ends or `max` ticks pass
    fn run(mut state: WorldState, input: TickInput, max: usize) -> (WorldState, usize) {
        let tuning = Tuning::default();
        for ticks in 0..max {
            if state.status().is_terminal() {
                return (state, ticks);
            }
            state = state.update(DT, &input, &tuning);
        }
        (state, max)
    }

    #[test]
    fn test_walk_right_collects_last_coin() {
        let state = start("
            #####
            #...#
            #@.o#
            #####
        ");
        let right = TickInput {
            right: true,
            ..Default::default()
        };

        let (end, ticks) = run(state, right, 200);
        assert_eq!(end.status(), Status::Won, "not won after {} ticks", ticks);
        assert_eq!(end.coins_remaining(), 0);
        assert!(end.actors().iter().all(|a| a.kind() != ActorKind::Coin));
        assert_eq!(end.actors().len(), 1);
    }

    #[test]
    fn test_sweeping_lava_kills_standing_player() {
        let state = start("
            #######
            #.....#
            #@..=.#
            #######
        ");

        let tuning = Tuning::default();
        let mut previous = state;
        let mut state = previous.update(DT, &TickInput::default(), &tuning);
        for _ in 0..500 {
            if state.status().is_terminal() {
                break;
            }
            let next = state.update(DT, &TickInput::default(), &tuning);
            previous = std::mem::replace(&mut state, next);
        }

        assert_eq!(state.status(), Status::Lost);
        // The tick that ended the game is the first one with the boxes overlapping
        let (player, lava) = (state.actors()[0], state.actors()[1]);
        assert!(overlap(&player, &lava));
        assert!(!overlap(&previous.actors()[0], &previous.actors()[1]));
        assert_eq!(state.actors().len(), 2);
    }

    #[test]
    fn test_lava_tile_loses_without_touching_actors() {
        let state = start("
            #####
            #...#
            #@o.#
            #+..#
            #####
        ");
        let tuning = Tuning::default();
        let updated: Vec<Actor> = state
            .actors()
            .iter()
            .map(|a| a.update(DT, &state, &TickInput::default(), &tuning))
            .collect();

        let next = state.update(DT, &TickInput::default(), &tuning);
        assert_eq!(next.status(), Status::Lost);
        // The actor list is the plain update of the previous one
        assert_eq!(next.actors(), updated.as_slice());
        assert_eq!(next.coins_remaining(), 1);
    }

    #[test]
    fn test_terminal_state_still_moves_actors() {
        let state = start("
            #######
            #.....#
            #@..=.#
            #######
        ")
        .with_status(Status::Won);

        let next = state.update(DT, &TickInput::default(), &Tuning::default());
        assert_eq!(next.status(), Status::Won);
        assert!(next.actors()[1].pos().x > state.actors()[1].pos().x);
    }

    /// Player standing on a floor, touching a coin and a monster side-on
    fn crowded(coin_first: bool) -> WorldState {
        let state = start("
            .........
            .........
            ..@......
            #########
        ");
        let player = state.actors()[0];
        let coin = Actor::Coin(Coin {
            id: 1,
            pos: Vec2::new(2.2, 2.1),
            base_pos: Vec2::new(2.2, 2.1),
            wobble: 0.0,
        });
        let monster = Actor::Monster(Monster {
            id: 2,
            pos: Vec2::new(2.5, 1.0),
            vel: Vec2::new(-3.0, 0.0),
        });
        let actors = if coin_first {
            vec![player, coin, monster]
        } else {
            vec![player, monster, coin]
        };
        WorldState::new(Arc::clone(state.shared_map()), actors, Status::Playing)
    }

    #[test]
    fn test_collisions_resolve_in_list_order() {
        let tuning = Tuning::default();

        // Coin wins the level, then the monster's touch still loses it
        let next = crowded(true).update(DT, &TickInput::default(), &tuning);
        assert_eq!(next.status(), Status::Lost);
        assert_eq!(next.coins_remaining(), 0);
        assert_eq!(next.actors().len(), 2);

        // Monster first, then collecting the last coin overrides the loss
        let next = crowded(false).update(DT, &TickInput::default(), &tuning);
        assert_eq!(next.status(), Status::Won);
        assert_eq!(next.coins_remaining(), 0);
    }

    #[test]
    fn test_stomping_monster_removes_it() {
        let state = start("
            #########
            #.......#
            #.......#
            #.......#
            #...@...#
            #.......#
            #...M...#
            #########
        ");
        // Drop the player from above onto the monster
        let tuning = Tuning::default();
        let mut state = state;
        let mut stomped = false;
        for _ in 0..100 {
            state = state.update(DT, &TickInput::default(), &tuning);
            if state.actors().iter().all(|a| a.kind() != ActorKind::Monster) {
                stomped = true;
                break;
            }
            if state.status().is_terminal() {
                break;
            }
        }
        assert!(stomped, "monster not stomped, status {:?}", state.status());
        assert_eq!(state.status(), Status::Playing);
    }
}
