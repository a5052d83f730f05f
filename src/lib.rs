//! Lava Dash - A tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Pure simulation (tile map, actors, collisions, world state)
//! - `tuning`: Data-driven physics constants
//! - `levels`: Built-in level texts

pub mod levels;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Fixed-timestep driving constants (caller policy, not enforced by `sim`)
pub mod consts {
    /// Simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta a driver should feed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Most simulation steps a driver runs for one frame
    pub const MAX_SUBSTEPS: u32 = 8;
}
