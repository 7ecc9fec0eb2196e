//! Deterministic round simulation
//!
//! All gameplay rules live here. This module must stay pure:
//! - Fixed timestep only (one tick per frame)
//! - Injected randomness only
//! - No rendering or platform dependencies

pub mod activity;
pub mod difficulty;
pub mod messages;
pub mod rng;
pub mod rules;
pub mod state;
pub mod teacher;
pub mod tick;

pub use activity::{Activity, ActivityTick, Student, UsedActivities};
pub use difficulty::{AlertPolicy, CLASSIC_ROUND_SECS, Difficulty, DifficultyProfile, RoundConfig};
pub use messages::{DEFAULT_TTL, Message, MessageQueue};
pub use rng::{RandomSource, ScriptedRng, seeded};
pub use rules::{ClickOutcome, award, handle_click};
pub use state::{Round, RoundOutcome, Verdict};
pub use teacher::{Teacher, TeacherEvent};
pub use tick::tick;
