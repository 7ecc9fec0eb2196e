//! Click handling and scoring

use super::activity::Activity;
use super::messages::DEFAULT_TTL as NOTICE_TTL;
use super::state::{Round, RoundOutcome};

/// Lifetime of short warnings
const WARN_TTL: u32 = 100;
/// Lifetime of the "caught" notice
const CAUGHT_TTL: u32 = 180;

/// What a click during play did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No effect
    Ignored,
    /// Clicked while the teacher was watching an activity in flight
    Caught,
    Started(Activity),
    /// One-shot activity already spent this round
    AlreadyUsed(Activity),
    /// Back to studying
    Stopped,
}

fn started_text(activity: Activity) -> String {
    let what = match activity {
        Activity::Studying => "studying",
        Activity::Cheating => "copying answers",
        Activity::PlayingGames => "playing on the phone",
        Activity::Sleeping => "napping",
        Activity::Eating => "snacking",
    };
    format!(
        "{} Started {}! ({})",
        activity.icon(),
        what,
        activity.duration_label()
    )
}

/// Apply a click on an activity button (`None` when nothing was hit)
pub fn handle_click(round: &mut Round, target: Option<Activity>) -> ClickOutcome {
    if round.is_over() {
        return ClickOutcome::Ignored;
    }

    if round.teacher.alert {
        if round.student.is_busy() {
            catch(round, "😱 CAUGHT! The teacher saw you!");
            return ClickOutcome::Caught;
        }
        // Nothing to hide; the student just keeps studying
        return ClickOutcome::Ignored;
    }

    let Some(activity) = target else {
        return ClickOutcome::Ignored;
    };

    if !activity.is_risky() {
        if round.student.is_busy() {
            round
                .messages
                .enqueue("🛑 Stopped the forbidden activity!", WARN_TTL);
        }
        round.student.abandon();
        round
            .messages
            .enqueue("📖 Solving problems like a good student...", NOTICE_TTL);
        return ClickOutcome::Stopped;
    }

    if round.student.used.is_used(activity) {
        round
            .messages
            .enqueue("❌ That one is already used!", WARN_TTL);
        return ClickOutcome::AlreadyUsed(activity);
    }

    if round.student.is_busy() {
        log::debug!(
            "Abandoning {:?} at {}%",
            round.student.activity(),
            round.student.progress()
        );
        round
            .messages
            .enqueue("⚠️ Dropped the previous activity!", WARN_TTL);
    }

    round.student.used.mark(activity);
    round.student.start(activity);
    round.messages.enqueue(started_text(activity), NOTICE_TTL);
    ClickOutcome::Started(activity)
}

/// Bank the reward for a naturally completed activity
pub fn award(round: &mut Round, activity: Activity) {
    let points = activity.points();
    if points == 0 {
        return;
    }
    round.score += points;
    round
        .messages
        .enqueue(format!("Success! +{points} points"), NOTICE_TTL);
}

/// End the round as a loss
pub(crate) fn catch(round: &mut Round, text: &str) {
    round.messages.enqueue(text, CAUGHT_TTL);
    round.finish(RoundOutcome::Caught);
}
