//! Cheat Sim entry point
//!
//! Runs the game headlessly: the autopilot supplies input, each frame is
//! drawn into a recorded draw list, and the process exits once the bot
//! presses Exit.

use cheat_sim::autopilot::Autopilot;
use cheat_sim::persistence::JsonFileStore;
use cheat_sim::renderer::{DrawList, draw_frame};
use cheat_sim::sim::seeded;
use cheat_sim::{Control, Game, Screen, Settings};

fn main() {
    env_logger::init();
    log::info!("Cheat Sim (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Run seed {}", seed);

    let store = JsonFileStore::new(settings.best_score_path());
    let mut game = Game::new(settings.layout, settings.variant, store, seeded(seed));
    let pilot = Autopilot::new(settings.demo_rounds, settings.difficulty);

    let mut frame = DrawList::new();
    let mut frames: u64 = 0;
    let mut last_screen = game.screen();
    loop {
        // Input first, then the tick, then draw
        if let Some(input) = pilot.next_input(&game) {
            if game.handle_input(input) == Control::Exit {
                break;
            }
        }
        game.tick();
        frames += 1;

        frame.clear();
        draw_frame(&game, &mut frame);

        if game.screen() != last_screen {
            log::debug!(
                "Frame {}: {:?} -> {:?} ({} draw commands)",
                frames,
                last_screen,
                game.screen(),
                frame.len()
            );
            if game.screen() == Screen::Win || game.screen() == Screen::GameOver {
                let score = game.round().map_or(0, |r| r.score);
                println!(
                    "Round {}: {:?} with {} points",
                    game.rounds_played(),
                    game.screen(),
                    score
                );
            }
            last_screen = game.screen();
        }
    }

    println!("Best score: {}", game.best_score());
    log::info!("Exiting after {} frames", frames);
}
