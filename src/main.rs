//! Lava Dash headless driver
//!
//! Plays one level with a scripted autopilot through a fixed-timestep loop
//! and reports the outcome.
//!
//! Usage: `lava-dash [LEVEL_FILE] [SEED]`

use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use lava_dash::Tuning;
use lava_dash::consts::*;
use lava_dash::levels;
use lava_dash::sim::{TickInput, TileMap, WorldState};

/// Give up after this much simulated time (seconds)
const TIME_LIMIT: f32 = 60.0;
/// Host frame delta fed into the accumulator (30 fps)
const FRAME_DT: f32 = 1.0 / 30.0;

/// Runner holding the live snapshot and timestep bookkeeping
struct Runner {
    state: WorldState,
    tuning: Tuning,
    accumulator: f32,
    elapsed: f32,
    heading_right: bool,
}

impl Runner {
    fn new(state: WorldState, tuning: Tuning) -> Self {
        Self {
            state,
            tuning,
            accumulator: 0.0,
            elapsed: 0.0,
            heading_right: true,
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.autopilot();
            let before = self.state.player().map(|p| p.pos);
            let next = self.state.update(SIM_DT, &input, &self.tuning);

            if next.status() != self.state.status() {
                log::info!(
                    "Level {} at t={:.2}s",
                    next.status().as_str(),
                    self.elapsed + SIM_DT
                );
            }

            // Walked into a wall: try the other way
            let after = next.player().map(|p| p.pos);
            if let (Some(before), Some(after)) = (before, after)
                && before.x == after.x
            {
                self.heading_right = !self.heading_right;
            }

            self.state = next;
            self.accumulator -= SIM_DT;
            self.elapsed += SIM_DT;
            substeps += 1;

            if self.state.status().is_terminal() {
                break;
            }
        }
    }

    /// Run in the current heading, jumping whenever possible
    fn autopilot(&self) -> TickInput {
        TickInput {
            left: !self.heading_right,
            right: self.heading_right,
            jump: true,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let text = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => levels::FIRST.to_string(),
    };
    let seed = match args.next() {
        Some(seed) => seed.parse()?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };

    let tuning = Tuning::load(Path::new(Tuning::FILE_NAME));
    let map = TileMap::parse_seeded(&text, &tuning, seed)?;
    log::info!("Lava Dash starting with seed {}", seed);

    let mut runner = Runner::new(WorldState::start(Arc::new(map)), tuning);
    while !runner.state.status().is_terminal() && runner.elapsed < TIME_LIMIT {
        runner.update(FRAME_DT);
    }

    println!(
        "status: {} after {:.2}s",
        runner.state.status().as_str(),
        runner.elapsed
    );
    println!("{}", serde_json::to_string_pretty(runner.state.actors())?);
    Ok(())
}
