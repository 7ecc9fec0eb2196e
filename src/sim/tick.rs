//! Fixed timestep round tick
//!
//! Order within a tick: notices age, the activity timer advances (and pays
//! out on completion), the clock counts down, then the teacher's schedule
//! advances. Running out the clock ends the round before the teacher can turn.

use super::activity::ActivityTick;
use super::rng::RandomSource;
use super::rules::{award, catch};
use super::state::{Round, RoundOutcome, Verdict};
use super::teacher::TeacherEvent;

const TIME_UP_TTL: u32 = 240;

/// Advance a round by one tick
pub fn tick(round: &mut Round, rng: &mut impl RandomSource) -> Verdict {
    if let Some(outcome) = round.outcome {
        return Verdict::Ended(outcome);
    }

    round.time_ticks += 1;
    round.messages.tick();

    if let ActivityTick::Completed(activity) = round.student.tick() {
        award(round, activity);
    }

    round.time_remaining = round.time_remaining.saturating_sub(1);
    if round.time_remaining == 0 {
        round
            .messages
            .enqueue("✅ Time's up! You made it!", TIME_UP_TTL);
        return round.finish(RoundOutcome::Win);
    }

    let policy = round.policy();
    let event = round.teacher.tick(policy, rng);
    if event == TeacherEvent::AlertStarted {
        log::debug!("Teacher alert at tick {}", round.time_ticks);
    }

    if round.is_caught() {
        catch(round, "😱 CAUGHT! The teacher noticed!");
        return Verdict::Ended(RoundOutcome::Caught);
    }

    Verdict::Continue
}
