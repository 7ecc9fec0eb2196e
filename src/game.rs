//! Screen flow
//!
//! `Game` owns everything: the active screen, its buttons, the current round,
//! the best score and the collaborators (score store, RNG). The driver feeds
//! it input events and one `tick` per frame.

use glam::Vec2;

use crate::highscores::BestScore;
use crate::persistence::ScoreStore;
use crate::settings::{Layout, Variant};
use crate::sim::{
    self, ClickOutcome, Difficulty, MessageQueue, RandomSource, Round, RoundConfig, RoundOutcome,
    Verdict,
};
use crate::ui::{self, Button, ButtonAction};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    /// Tiered variant only
    DifficultySelect,
    Playing,
    GameOver,
    Win,
}

impl Screen {
    /// End of a round, waiting for confirm
    pub fn is_terminal(self) -> bool {
        matches!(self, Screen::GameOver | Screen::Win)
    }
}

/// Input already translated from device events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Primary pointer click at screen coordinates
    Click(Vec2),
    /// Confirm key (Enter)
    Confirm,
}

/// Tells the driver whether to keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

const RULES_TEXT: &str =
    "📖 Rules: hide your activities! If the teacher sees one, you're caught! 📖";
const RULES_TTL: u32 = 240;

pub struct Game<S: ScoreStore, R: RandomSource> {
    layout: Layout,
    variant: Variant,
    screen: Screen,
    buttons: Vec<Button>,
    round: Option<Round>,
    /// Menu notices (rules); round notices live in the round
    notices: MessageQueue,
    best: BestScore,
    /// Last finished round set a new record
    new_record: bool,
    rounds_played: u32,
    store: S,
    rng: R,
}

impl<S: ScoreStore, R: RandomSource> Game<S, R> {
    pub fn new(layout: Layout, variant: Variant, store: S, rng: R) -> Self {
        let best = BestScore::load(&store);
        Self {
            layout,
            variant,
            screen: Screen::MainMenu,
            buttons: ui::menu_buttons(layout),
            round: None,
            notices: MessageQueue::new(),
            best,
            new_record: false,
            rounds_played: 0,
            store,
            rng,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// The round in play, or the one just finished while a terminal screen shows
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn notices(&self) -> &MessageQueue {
        &self.notices
    }

    pub fn best_score(&self) -> u64 {
        self.best.get()
    }

    pub fn new_record(&self) -> bool {
        self.new_record
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Center of the first button with the given action, for scripted input
    pub fn button_center(&self, action: ButtonAction) -> Option<Vec2> {
        self.buttons
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.rect.center())
    }

    /// Apply one input event
    pub fn handle_input(&mut self, input: Input) -> Control {
        match input {
            Input::Confirm => {
                if self.screen.is_terminal() {
                    self.to_menu();
                }
                Control::Continue
            }
            Input::Click(pos) => self.handle_click(pos),
        }
    }

    fn handle_click(&mut self, pos: Vec2) -> Control {
        let action = ui::hit(&self.buttons, pos);
        match self.screen {
            Screen::MainMenu => match action {
                Some(ButtonAction::Start) => match self.variant {
                    Variant::Classic => self.start_round(RoundConfig::classic()),
                    Variant::Tiered => {
                        self.screen = Screen::DifficultySelect;
                        self.buttons = ui::difficulty_buttons(self.layout);
                    }
                },
                Some(ButtonAction::Rules) => self.notices.enqueue(RULES_TEXT, RULES_TTL),
                Some(ButtonAction::Exit) => {
                    log::info!("Exit requested from menu");
                    return Control::Exit;
                }
                _ => {}
            },
            Screen::DifficultySelect => match action {
                Some(ButtonAction::Choose(difficulty)) => self.choose(difficulty),
                Some(ButtonAction::Back) => self.to_menu(),
                _ => {}
            },
            Screen::Playing => self.play_click(action),
            Screen::GameOver | Screen::Win => {}
        }
        Control::Continue
    }

    fn choose(&mut self, difficulty: Difficulty) {
        log::info!("Difficulty {:?} selected", difficulty);
        self.start_round(RoundConfig::tiered(difficulty));
    }

    fn play_click(&mut self, action: Option<ButtonAction>) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let target = match action {
            Some(ButtonAction::Activity(activity)) => Some(activity),
            _ => None,
        };
        let outcome = sim::handle_click(round, target);
        ui::refresh_activity_labels(&mut self.buttons, &round.student.used);
        if outcome == ClickOutcome::Caught {
            self.end_round(RoundOutcome::Caught);
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.notices.tick();
        if self.screen != Screen::Playing {
            return;
        }
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let verdict = sim::tick(round, &mut self.rng);
        ui::refresh_activity_labels(&mut self.buttons, &round.student.used);
        if let Verdict::Ended(outcome) = verdict {
            self.end_round(outcome);
        }
    }

    fn start_round(&mut self, config: RoundConfig) {
        log::info!(
            "Round {} starting: {} s, {:?}",
            self.rounds_played + 1,
            config.round_secs,
            config.policy
        );
        let round = Round::new(
            config,
            self.layout.student_pos(),
            self.layout.teacher_pos(),
            &mut self.rng,
        );
        self.buttons = ui::activity_buttons(self.layout, &round.student.used);
        self.round = Some(round);
        self.notices.clear();
        self.new_record = false;
        self.screen = Screen::Playing;
    }

    fn end_round(&mut self, outcome: RoundOutcome) {
        let score = self.round.as_ref().map_or(0, |r| r.score);
        self.new_record = self.best.record(score, &mut self.store);
        self.rounds_played += 1;
        self.buttons.clear();
        self.screen = match outcome {
            RoundOutcome::Win => Screen::Win,
            RoundOutcome::Caught => Screen::GameOver,
        };
    }

    fn to_menu(&mut self) {
        self.round = None;
        self.screen = Screen::MainMenu;
        self.buttons = ui::menu_buttons(self.layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{JsonFileStore, MemoryStore};
    use crate::sim::{Activity, ScriptedRng, seeded};

    fn click(game: &mut Game<impl ScoreStore, impl RandomSource>, action: ButtonAction) -> Control {
        let pos = game
            .button_center(action)
            .unwrap_or_else(|| panic!("no {action:?} button on {:?}", game.screen()));
        game.handle_input(Input::Click(pos))
    }

    fn classic(store: MemoryStore, rng: ScriptedRng) -> Game<MemoryStore, ScriptedRng> {
        Game::new(Layout::Desktop, Variant::Classic, store, rng)
    }

    #[test]
    fn test_menu_actions() {
        let mut game = classic(MemoryStore::new(), ScriptedRng::new([2, 60]));
        assert_eq!(game.screen(), Screen::MainMenu);

        assert_eq!(click(&mut game, ButtonAction::Rules), Control::Continue);
        assert_eq!(game.screen(), Screen::MainMenu);
        assert_eq!(game.notices().len(), 1);

        assert_eq!(click(&mut game, ButtonAction::Exit), Control::Exit);
        assert_eq!(game.handle_input(Input::Confirm), Control::Continue);
        assert_eq!(game.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_classic_start_goes_straight_to_play() {
        let mut game = classic(MemoryStore::new(), ScriptedRng::new([2, 60]));
        click(&mut game, ButtonAction::Start);
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.buttons().len(), 5);
        assert_eq!(game.round().map(|r| r.time_remaining), Some(1800));
    }

    #[test]
    fn test_tiered_flow_and_back() {
        let mut game = Game::new(
            Layout::Mobile,
            Variant::Tiered,
            MemoryStore::new(),
            ScriptedRng::new([2, 60]),
        );
        click(&mut game, ButtonAction::Start);
        assert_eq!(game.screen(), Screen::DifficultySelect);
        click(&mut game, ButtonAction::Back);
        assert_eq!(game.screen(), Screen::MainMenu);

        click(&mut game, ButtonAction::Start);
        click(&mut game, ButtonAction::Choose(Difficulty::Hard));
        assert_eq!(game.screen(), Screen::Playing);
        let round = game.round().unwrap();
        assert_eq!(round.time_remaining, 3600);
        assert_eq!(round.config.difficulty, Some(Difficulty::Hard));
        assert_eq!(round.student.pos, Layout::Mobile.student_pos());
        assert_eq!(round.teacher.pos, Layout::Mobile.teacher_pos());
    }

    #[test]
    fn test_caught_by_click_then_confirm_returns_to_menu() {
        let mut game = classic(MemoryStore::new(), ScriptedRng::new([2, 60]));
        click(&mut game, ButtonAction::Start);
        click(&mut game, ButtonAction::Activity(Activity::Sleeping));
        // Teacher turns at tick 120; waiting stays safe until then
        for _ in 0..119 {
            game.tick();
        }
        assert_eq!(game.screen(), Screen::Playing);
        game.tick();
        assert_eq!(game.screen(), Screen::GameOver);

        // Only confirm leaves the terminal screen
        game.handle_input(Input::Click(Vec2::new(700.0, 340.0)));
        game.tick();
        assert_eq!(game.screen(), Screen::GameOver);
        game.handle_input(Input::Confirm);
        assert_eq!(game.screen(), Screen::MainMenu);
        assert!(game.round().is_none());
    }

    #[test]
    fn test_click_through_alert_loses() {
        let mut game = classic(MemoryStore::new(), ScriptedRng::new([2, 60]));
        click(&mut game, ButtonAction::Start);
        for _ in 0..120 {
            game.tick();
        }
        assert!(game.round().unwrap().teacher.alert);
        // Idle during alert: clicks do nothing
        click(&mut game, ButtonAction::Activity(Activity::Cheating));
        assert_eq!(game.screen(), Screen::Playing);
        assert!(!game.round().unwrap().student.is_busy());

        // Start an activity after the alert, then click into the next one
        for _ in 0..60 {
            game.tick();
        }
        assert!(!game.round().unwrap().teacher.alert);
        click(&mut game, ButtonAction::Activity(Activity::Sleeping));
        game.round.as_mut().unwrap().teacher.alert = true;
        game.handle_input(Input::Click(Vec2::new(-10.0, -10.0)));
        assert_eq!(game.screen(), Screen::GameOver);
    }

    #[test]
    fn test_best_score_is_max_and_persists() {
        let store = MemoryStore::new();
        let mut game = classic(store.clone(), ScriptedRng::new([5, 60]));
        let mut scores = Vec::new();

        // Round 1: cheat (20 points) then get caught sleeping at tick 300
        click(&mut game, ButtonAction::Start);
        click(&mut game, ButtonAction::Activity(Activity::Cheating));
        for _ in 0..200 {
            game.tick();
        }
        click(&mut game, ButtonAction::Activity(Activity::Sleeping));
        while game.screen() == Screen::Playing {
            game.tick();
        }
        assert_eq!(game.screen(), Screen::GameOver);
        scores.push(game.round().unwrap().score);
        assert!(game.new_record());
        game.handle_input(Input::Confirm);

        // Round 2: eat (5 points), then caught in the next round start
        click(&mut game, ButtonAction::Start);
        click(&mut game, ButtonAction::Activity(Activity::Eating));
        for _ in 0..150 {
            game.tick();
        }
        click(&mut game, ButtonAction::Activity(Activity::Sleeping));
        while game.screen() == Screen::Playing {
            game.tick();
        }
        scores.push(game.round().unwrap().score);
        assert!(!game.new_record());
        game.handle_input(Input::Confirm);

        assert_eq!(scores, [20, 5]);
        assert_eq!(game.best_score(), 20);
        assert_eq!(game.rounds_played(), 2);

        // Restart with the same store
        let restarted = classic(store, ScriptedRng::new([2]));
        assert_eq!(restarted.best_score(), 20);
    }

    #[test]
    fn test_win_persists_to_file_across_restart() {
        let dir = std::env::temp_dir().join(format!("cheat-sim-game-{}", std::process::id()));
        let path = dir.join("best_score.json");
        let _ = std::fs::remove_file(&path);

        let config_seed = 3;
        let mut game = Game::new(
            Layout::Desktop,
            Variant::Tiered,
            JsonFileStore::new(&path),
            seeded(config_seed),
        );
        click(&mut game, ButtonAction::Start);
        click(&mut game, ButtonAction::Choose(Difficulty::Easy));
        click(&mut game, ButtonAction::Activity(Activity::PlayingGames));
        // Force a sure miss on every decision point
        game.round.as_mut().unwrap().config.policy = sim::AlertPolicy::Chance(0);
        let mut ticks = 0;
        while game.screen() == Screen::Playing {
            game.tick();
            ticks += 1;
        }
        assert_eq!(ticks, 1800);
        assert_eq!(game.screen(), Screen::Win);
        assert_eq!(game.best_score(), 10);

        let restarted = Game::new(
            Layout::Desktop,
            Variant::Tiered,
            JsonFileStore::new(&path),
            seeded(config_seed),
        );
        assert_eq!(restarted.best_score(), 10);
    }
}
