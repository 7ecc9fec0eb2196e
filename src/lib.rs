//! Cheat Sim - copy answers while the teacher isn't looking
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (activities, teacher, scoring)
//! - `game`: Screen flow and input routing
//! - `renderer`: Drawing boundary (canvas trait, recorded draw lists)
//! - `persistence`: Best-score storage
//! - `settings`: Layout/variant configuration

pub mod autopilot;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{Control, Game, Input, Screen};
pub use highscores::BestScore;
pub use settings::{Layout, Settings, Variant};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate; one tick per rendered frame
    pub const TICKS_PER_SECOND: u32 = 60;
}
