//! Student activities and the per-tick activity timer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;

/// Everything the student can be doing at a desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Activity {
    /// Neutral, never risky
    #[default]
    Studying,
    Cheating,
    PlayingGames,
    Sleeping,
    Eating,
}

impl Activity {
    /// The four one-shot activities, in button order
    pub const RISKY: [Activity; 4] = [
        Activity::Cheating,
        Activity::PlayingGames,
        Activity::Sleeping,
        Activity::Eating,
    ];

    /// How long the activity runs, in ticks
    pub fn duration_ticks(self) -> u32 {
        match self {
            Activity::Studying => 0,
            Activity::Cheating => 3 * TICKS_PER_SECOND,
            Activity::PlayingGames => 2 * TICKS_PER_SECOND,
            Activity::Sleeping => 4 * TICKS_PER_SECOND,
            Activity::Eating => 5 * TICKS_PER_SECOND / 2,
        }
    }

    /// Points awarded when the activity runs to completion
    pub fn points(self) -> u64 {
        match self {
            Activity::Studying => 0,
            Activity::Cheating => 20,
            Activity::PlayingGames => 10,
            Activity::Sleeping => 5,
            Activity::Eating => 5,
        }
    }

    pub fn is_risky(self) -> bool {
        self != Activity::Studying
    }

    pub fn label(self) -> &'static str {
        match self {
            Activity::Studying => "STUDY",
            Activity::Cheating => "CHEAT",
            Activity::PlayingGames => "PLAY",
            Activity::Sleeping => "SLEEP",
            Activity::Eating => "EAT",
        }
    }

    /// Icon drawn above the student's head and on the button
    pub fn icon(self) -> &'static str {
        match self {
            Activity::Studying => "📖",
            Activity::Cheating => "📝",
            Activity::PlayingGames => "🎮",
            Activity::Sleeping => "💤",
            Activity::Eating => "🍎",
        }
    }

    /// Human readable duration ("3 sec", "2.5 sec")
    pub fn duration_label(self) -> String {
        let ticks = self.duration_ticks();
        if ticks % TICKS_PER_SECOND == 0 {
            format!("{} sec", ticks / TICKS_PER_SECOND)
        } else {
            format!("{:.1} sec", ticks as f32 / TICKS_PER_SECOND as f32)
        }
    }
}

/// Result of advancing the activity timer by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTick {
    /// Nothing in flight
    Idle,
    /// Activity still running
    Running,
    /// Activity ran its full duration on this tick
    Completed(Activity),
}

/// One-shot flags, one per risky activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedActivities {
    pub cheating: bool,
    pub playing_games: bool,
    pub sleeping: bool,
    pub eating: bool,
}

impl UsedActivities {
    pub fn is_used(&self, activity: Activity) -> bool {
        match activity {
            Activity::Studying => false,
            Activity::Cheating => self.cheating,
            Activity::PlayingGames => self.playing_games,
            Activity::Sleeping => self.sleeping,
            Activity::Eating => self.eating,
        }
    }

    pub fn mark(&mut self, activity: Activity) {
        match activity {
            Activity::Studying => {}
            Activity::Cheating => self.cheating = true,
            Activity::PlayingGames => self.playing_games = true,
            Activity::Sleeping => self.sleeping = true,
            Activity::Eating => self.eating = true,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Desk position (cosmetic)
    pub pos: Vec2,
    activity: Activity,
    elapsed: u32,
    duration: u32,
    progress: u8,
    /// Risky activities already spent this round
    pub used: UsedActivities,
}

impl Student {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            activity: Activity::Studying,
            elapsed: 0,
            duration: 0,
            progress: 0,
            used: UsedActivities::default(),
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Progress through the current activity, 0-100 (floored)
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// True while a risky activity is in flight
    pub fn is_busy(&self) -> bool {
        self.duration > 0
    }

    /// Begin an activity from scratch. Flag bookkeeping is the caller's job.
    pub fn start(&mut self, activity: Activity) {
        self.activity = activity;
        self.elapsed = 0;
        self.progress = 0;
        self.duration = activity.duration_ticks();
    }

    /// Drop whatever is in flight without completing it
    pub fn abandon(&mut self) {
        self.start(Activity::Studying);
    }

    /// Advance the activity timer by one tick
    pub fn tick(&mut self) -> ActivityTick {
        if self.duration == 0 || self.elapsed >= self.duration {
            self.abandon();
            return ActivityTick::Idle;
        }

        self.elapsed += 1;
        self.progress = (self.elapsed * 100 / self.duration) as u8;
        if self.elapsed < self.duration {
            return ActivityTick::Running;
        }

        // Progress keeps reading 100 for this frame; cleared on the next tick
        let done = self.activity;
        self.activity = Activity::Studying;
        self.elapsed = 0;
        self.duration = 0;
        ActivityTick::Completed(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn risky() -> impl Strategy<Value = Activity> {
        prop::sample::select(Activity::RISKY.to_vec())
    }

    #[test]
    fn test_durations_and_points() {
        assert_eq!(Activity::Cheating.duration_ticks(), 180);
        assert_eq!(Activity::PlayingGames.duration_ticks(), 120);
        assert_eq!(Activity::Sleeping.duration_ticks(), 240);
        assert_eq!(Activity::Eating.duration_ticks(), 150);
        assert_eq!(Activity::Studying.duration_ticks(), 0);
        let total: u64 = Activity::RISKY.iter().map(|a| a.points()).sum();
        assert_eq!(total, 40);
        assert_eq!(Activity::Eating.duration_label(), "2.5 sec");
        assert_eq!(Activity::Sleeping.duration_label(), "4 sec");
    }

    #[test]
    fn test_studying_is_always_idle() {
        let mut student = Student::new(Vec2::ZERO);
        student.start(Activity::Studying);
        assert!(!student.is_busy());
        assert_eq!(student.tick(), ActivityTick::Idle);
        assert_eq!(student.progress(), 0);
    }

    #[test]
    fn test_progress_floors() {
        let mut student = Student::new(Vec2::ZERO);
        student.start(Activity::Eating);
        student.tick();
        // 1 * 100 / 150 = 0.66..
        assert_eq!(student.progress(), 0);
        student.tick();
        assert_eq!(student.progress(), 1);
        for _ in 2..149 {
            student.tick();
        }
        assert_eq!(student.progress(), 99);
    }

    #[test]
    fn test_completion_flashes_full_then_clears() {
        let mut student = Student::new(Vec2::ZERO);
        student.start(Activity::PlayingGames);
        for _ in 0..119 {
            assert_eq!(student.tick(), ActivityTick::Running);
        }
        assert_eq!(student.tick(), ActivityTick::Completed(Activity::PlayingGames));
        assert_eq!(student.progress(), 100);
        assert!(!student.is_busy());
        assert_eq!(student.activity(), Activity::Studying);

        assert_eq!(student.tick(), ActivityTick::Idle);
        assert_eq!(student.progress(), 0);
    }

    #[test]
    fn test_restart_abandons_previous() {
        let mut student = Student::new(Vec2::ZERO);
        student.start(Activity::Cheating);
        for _ in 0..50 {
            student.tick();
        }
        student.start(Activity::Eating);
        assert_eq!(student.elapsed(), 0);
        assert_eq!(student.duration(), 150);
        assert_eq!(student.activity(), Activity::Eating);
    }

    #[test]
    fn test_used_flags() {
        let mut used = UsedActivities::default();
        assert!(!used.is_used(Activity::Sleeping));
        used.mark(Activity::Sleeping);
        used.mark(Activity::Studying);
        assert!(used.is_used(Activity::Sleeping));
        assert!(!used.is_used(Activity::Cheating));
        assert!(!used.is_used(Activity::Studying));
    }

    proptest! {
        #[test]
        fn completes_on_exactly_the_last_tick(activity in risky()) {
            let mut student = Student::new(Vec2::ZERO);
            student.start(activity);
            let d = activity.duration_ticks();
            for _ in 1..d {
                prop_assert_eq!(student.tick(), ActivityTick::Running);
                prop_assert!(student.progress() < 100);
            }
            prop_assert_eq!(student.tick(), ActivityTick::Completed(activity));
            prop_assert_eq!(student.progress(), 100);
            prop_assert_eq!(student.tick(), ActivityTick::Idle);
            prop_assert_eq!(student.progress(), 0);
        }

        #[test]
        fn abandoning_never_completes(activity in risky(), ticks in 0u32..100) {
            let mut student = Student::new(Vec2::ZERO);
            student.start(activity);
            for _ in 0..ticks.min(activity.duration_ticks() - 1) {
                student.tick();
            }
            student.abandon();
            prop_assert!(!student.is_busy());
            prop_assert_eq!(student.tick(), ActivityTick::Idle);
        }
    }
}
