//! The teacher and their attention schedule
//!
//! Each cycle is a waiting phase (2-5 s) followed by an alert phase
//! (60-180 ticks). Both lengths are drawn together when a cycle is scheduled.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::AlertPolicy;
use super::rng::RandomSource;
use crate::consts::TICKS_PER_SECOND;

/// Waiting delay range, whole seconds
pub const DELAY_SECS: (u32, u32) = (2, 5);
/// Alert duration range, ticks
pub const ALERT_TICKS: (u32, u32) = (60, 180);

/// What the teacher did on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherEvent {
    /// Still looking away
    Waiting,
    /// Decision point hit and the teacher turned around
    AlertStarted,
    /// Still watching
    Watching,
    /// Stopped watching; next cycle scheduled
    AlertEnded,
    /// Decision point hit but the roll failed; next cycle scheduled
    Missed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Desk position (cosmetic)
    pub pos: Vec2,
    /// Looking at the student
    pub alert: bool,
    /// Ticks until the next decision point
    pub timer: u32,
    /// Ticks of alert remaining
    pub duration: u32,
}

impl Teacher {
    /// A teacher with a freshly drawn first cycle
    pub fn new(pos: Vec2, rng: &mut impl RandomSource) -> Self {
        let mut teacher = Self {
            pos,
            alert: false,
            timer: 0,
            duration: 0,
        };
        teacher.schedule(rng);
        teacher
    }

    /// Draw the next waiting delay and alert duration
    pub fn schedule(&mut self, rng: &mut impl RandomSource) {
        let delay = rng.range_inclusive(DELAY_SECS.0, DELAY_SECS.1);
        self.timer = delay * TICKS_PER_SECOND;
        self.duration = rng.range_inclusive(ALERT_TICKS.0, ALERT_TICKS.1);
        log::debug!(
            "Teacher looks up in {} ticks for {} ticks",
            self.timer,
            self.duration
        );
    }

    /// Advance the schedule by one tick
    pub fn tick(&mut self, policy: AlertPolicy, rng: &mut impl RandomSource) -> TeacherEvent {
        if self.alert {
            self.duration = self.duration.saturating_sub(1);
            if self.duration > 0 {
                return TeacherEvent::Watching;
            }
            self.alert = false;
            self.schedule(rng);
            return TeacherEvent::AlertEnded;
        }

        self.timer = self.timer.saturating_sub(1);
        if self.timer > 0 {
            return TeacherEvent::Waiting;
        }

        if policy.roll(rng) {
            self.alert = true;
            TeacherEvent::AlertStarted
        } else {
            self.schedule(rng);
            TeacherEvent::Missed
        }
    }
}
