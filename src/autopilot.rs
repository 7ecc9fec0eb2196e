//! Demo mode: a bot that plays the game
//!
//! It peeks at the teacher's schedule and only starts an activity that will
//! finish before the next decision point, so it never gets caught.

use crate::game::{Game, Input, Screen};
use crate::persistence::ScoreStore;
use crate::sim::{Activity, Difficulty, RandomSource, Round};
use crate::ui::ButtonAction;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Rounds to finish before pressing Exit
    pub rounds: u32,
    /// Tier to pick on the difficulty screen
    pub difficulty: Difficulty,
}

impl Autopilot {
    pub fn new(rounds: u32, difficulty: Difficulty) -> Self {
        Self { rounds, difficulty }
    }

    /// Input for this frame, if any
    pub fn next_input<S: ScoreStore, R: RandomSource>(&self, game: &Game<S, R>) -> Option<Input> {
        let action = match game.screen() {
            Screen::MainMenu if game.rounds_played() >= self.rounds => ButtonAction::Exit,
            Screen::MainMenu => ButtonAction::Start,
            Screen::DifficultySelect => ButtonAction::Choose(self.difficulty),
            Screen::Playing => ButtonAction::Activity(Self::pick(game.round()?)?),
            Screen::GameOver | Screen::Win => return Some(Input::Confirm),
        };
        game.button_center(action).map(Input::Click)
    }

    /// Unused activity that finishes before the teacher can look up
    fn pick(round: &Round) -> Option<Activity> {
        if round.teacher.alert || round.student.is_busy() {
            return None;
        }
        let window = round.teacher.timer;
        Activity::RISKY
            .into_iter()
            .filter(|&a| !round.student.used.is_used(a))
            .filter(|&a| a.duration_ticks() <= window)
            .max_by_key(|a| a.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Control;
    use crate::persistence::MemoryStore;
    use crate::settings::{Layout, Variant};
    use crate::sim::seeded;

    fn run(variant: Variant, seed: u64) -> Game<MemoryStore, rand_pcg::Pcg32> {
        let mut game = Game::new(Layout::Desktop, variant, MemoryStore::new(), seeded(seed));
        let pilot = Autopilot::new(2, Difficulty::Hard);
        for _ in 0..100_000 {
            if let Some(input) = pilot.next_input(&game) {
                if game.handle_input(input) == Control::Exit {
                    return game;
                }
            }
            game.tick();
        }
        panic!("autopilot never exited");
    }

    #[test]
    fn test_never_caught_classic() {
        let game = run(Variant::Classic, 11);
        assert_eq!(game.rounds_played(), 2);
        assert!(game.best_score() > 0);
    }

    #[test]
    fn test_never_caught_tiered() {
        let game = run(Variant::Tiered, 12);
        assert_eq!(game.rounds_played(), 2);
    }

    #[test]
    fn test_picks_highest_value_that_fits() {
        let mut rng = seeded(1);
        let mut round = Round::new(
            crate::sim::RoundConfig::classic(),
            Layout::Desktop.student_pos(),
            Layout::Desktop.teacher_pos(),
            &mut rng,
        );
        round.teacher.timer = 200;
        assert_eq!(Autopilot::pick(&round), Some(Activity::Cheating));
        round.teacher.timer = 130;
        assert_eq!(Autopilot::pick(&round), Some(Activity::PlayingGames));
        round.student.used.mark(Activity::PlayingGames);
        assert_eq!(Autopilot::pick(&round), None);
        round.teacher.timer = 240;
        round.teacher.alert = true;
        assert_eq!(Autopilot::pick(&round), None);
    }
}
