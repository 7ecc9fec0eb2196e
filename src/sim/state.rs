//! Round state
//!
//! Everything that belongs to a single play-through lives here and is dropped
//! when the player returns to the menu.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::activity::Student;
use super::difficulty::{AlertPolicy, RoundConfig};
use super::messages::MessageQueue;
use super::rng::RandomSource;
use super::teacher::Teacher;
use crate::consts::TICKS_PER_SECOND;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Clock ran out with nobody caught
    Win,
    /// Teacher saw a risky activity
    Caught,
}

/// Verdict after a tick or click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Ended(RoundOutcome),
}

/// One round of play
#[derive(Debug, Clone)]
pub struct Round {
    pub student: Student,
    pub teacher: Teacher,
    pub messages: MessageQueue,
    /// Points banked this round
    pub score: u64,
    /// Ticks left on the round clock
    pub time_remaining: u32,
    /// Ticks played so far
    pub time_ticks: u64,
    pub config: RoundConfig,
    /// Set once the round is over
    pub outcome: Option<RoundOutcome>,
}

/// Lifetime of the opening notice
const INTRO_TTL: u32 = 120;

impl Round {
    /// Fresh round with the student and teacher at their desks
    pub fn new(
        config: RoundConfig,
        student_pos: Vec2,
        teacher_pos: Vec2,
        rng: &mut impl RandomSource,
    ) -> Self {
        let mut messages = MessageQueue::new();
        messages.enqueue("🎓 Exam time! Cheat, but don't get caught! 🎓", INTRO_TTL);

        Self {
            student: Student::new(student_pos),
            teacher: Teacher::new(teacher_pos, rng),
            messages,
            score: 0,
            time_remaining: config.round_secs * TICKS_PER_SECOND,
            time_ticks: 0,
            config,
            outcome: None,
        }
    }

    pub fn policy(&self) -> AlertPolicy {
        self.config.policy
    }

    /// Whole seconds left on the clock (for the HUD)
    pub fn seconds_remaining(&self) -> u32 {
        self.time_remaining / TICKS_PER_SECOND
    }

    /// Final ten seconds
    pub fn low_time(&self) -> bool {
        self.seconds_remaining() < 10
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Student is mid-activity while the teacher is watching
    pub fn is_caught(&self) -> bool {
        self.teacher.alert && self.student.is_busy()
    }

    /// Close the round; later verdicts are ignored
    pub(crate) fn finish(&mut self, outcome: RoundOutcome) -> Verdict {
        if self.outcome.is_none() {
            log::info!(
                "Round over: {:?} with {} points after {} ticks",
                outcome,
                self.score,
                self.time_ticks
            );
            self.outcome = Some(outcome);
        }
        Verdict::Ended(outcome)
    }
}
