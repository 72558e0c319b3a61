//! Asteroids headless driver
//!
//! Runs a seeded autopilot game for a fixed number of ticks (or until game
//! over) and prints a JSON summary.
//!
//! Usage: `asteroids [settings.json] [ticks]`

use std::error::Error;

use serde::Serialize;

use asteroids::Settings;
use asteroids::sim::{GameEvent, GamePhase, GameState, autopilot, tick};

/// Default run length: one minute of play at 60 Hz
const DEFAULT_TICKS: u64 = 60 * 60;

#[derive(Debug, Default, Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    simulated_secs: f64,
    game_over: bool,
    round: u32,
    score: u64,
    health: u8,
    asteroids_left: usize,
    shots: u32,
    asteroids_destroyed: u32,
    deaths: u32,
    extra_lives: u32,
}

fn run() -> Result<Summary, Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let max_ticks = match args.next() {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_TICKS,
    };

    let tick_secs = settings.tick_duration().as_secs_f64();
    let mut state = GameState::new(settings)?;
    let mut summary = Summary {
        seed: state.settings.seed,
        ..Summary::default()
    };

    while summary.ticks < max_ticks && state.phase == GamePhase::Playing {
        let input = autopilot(&state);
        let report = tick(&mut state, &input);
        summary.ticks += 1;
        for event in &report.events {
            if let Some(cue) = event.cue() {
                log::debug!(
                    "tick {}: cue {cue:?} (volume {:.2}, shake {})",
                    state.tick_count,
                    cue.volume(),
                    cue.shakes() && state.settings.effective_screen_shake()
                );
            }
            match event {
                GameEvent::Fired => summary.shots += 1,
                GameEvent::AsteroidDestroyed { .. } => summary.asteroids_destroyed += 1,
                GameEvent::PlayerDied { .. } => summary.deaths += 1,
                GameEvent::ExtraLife { .. } => summary.extra_lives += 1,
                GameEvent::PlayerRespawned
                | GameEvent::RoundCleared { .. }
                | GameEvent::GameOver { .. } => {}
            }
        }
    }

    summary.simulated_secs = summary.ticks as f64 * tick_secs;
    summary.game_over = state.is_game_over();
    summary.round = state.round;
    summary.score = state.score;
    summary.health = state.player.health;
    summary.asteroids_left = state.asteroids().len();
    Ok(summary)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Asteroids (headless) starting...");

    match run() {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to encode summary: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
