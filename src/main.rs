//! Star Catcher headless runner
//!
//! Drives the simulation without a renderer: loads settings, runs frames with
//! the demo autopilot (or idle input), and plays the host's part on game over
//! by rebuilding the state from scratch.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use star_catcher::Settings;
    use star_catcher::demo::autopilot_input;
    use star_catcher::sim::{GameEvent, GameState, TickInput, tick};

    /// How a single run ended
    struct RunOutcome {
        state: GameState,
        game_over: bool,
    }

    fn play_run(settings: &Settings, seed: u64) -> RunOutcome {
        let mut state = GameState::new(seed);
        log::info!("Game initialized with seed: {}", seed);

        while state.time_ticks < settings.max_ticks {
            let input = if settings.autopilot {
                autopilot_input(&state)
            } else {
                TickInput::default()
            };

            let report = tick(&mut state, &input, settings.frame_dt);

            for event in &report.events {
                if let GameEvent::Collected { index } = event {
                    log::info!("Collected star {} (score {})", index, state.score);
                }
            }

            if settings.snapshot_interval > 0
                && state.time_ticks % settings.snapshot_interval == 0
            {
                match serde_json::to_string(&state.snapshot()) {
                    Ok(json) => log::trace!("tick {}: {}", state.time_ticks, json),
                    Err(e) => log::warn!("Snapshot failed: {}", e),
                }
            }

            if report.ended_run() {
                return RunOutcome {
                    state,
                    game_over: true,
                };
            }
        }

        log::info!("Tick limit reached ({} ticks)", settings.max_ticks);
        RunOutcome {
            state,
            game_over: false,
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Star Catcher (headless) starting...");

        let path = std::env::args().nth(1).map(PathBuf::from);
        let settings = Settings::load(path.as_deref());

        let mut run = 0;
        let outcome = loop {
            let seed = settings.seed.wrapping_add(run as u64);
            let outcome = play_run(&settings, seed);
            run += 1;

            if outcome.game_over {
                log::info!("Game Over - final score {}", outcome.state.score);
                if settings.restart_on_game_over && run < settings.max_runs {
                    log::info!("Restarting (run {} of {})", run + 1, settings.max_runs);
                    continue;
                }
            } else if outcome.state.live_collectibles() == 0 {
                log::info!("All stars collected - score {}", outcome.state.score);
            }
            break outcome;
        };

        match serde_json::to_string_pretty(&outcome.state.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize final snapshot: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is a library on web; the page host drives `tick` itself
}
