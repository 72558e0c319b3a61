//! Fixed timestep simulation tick
//!
//! Order within a tick: round check, ship (steering or wreck animation),
//! asteroid pass (movement and collisions), bullet pass (advance, expire,
//! fire).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::normalize_degrees;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Turn counter-clockwise
    pub rotate_left: bool,
    /// Turn clockwise
    pub rotate_right: bool,
    /// Accelerate along the heading
    pub thrust: bool,
    /// Fire (edge-triggered)
    pub fire: bool,
}

/// What a tick produced
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    /// Score after the tick
    pub score: u64,
    /// An impact happened and the settings allow shaking
    pub screen_shake: bool,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return TickReport {
            score: state.score,
            screen_shake: false,
            events,
        };
    }

    state.tick_count += 1;
    state.shake_ticks = state.shake_ticks.saturating_sub(1);
    let area = state.area();

    if state.field.is_empty() {
        state.field.asteroid_no = (state.field.asteroid_no + 1).min(MAX_ASTEROIDS);
        state.round += 1;
        next_round(state);
        events.push(GameEvent::RoundCleared {
            round: state.round,
            asteroids: state.field.asteroid_no,
        });
    }

    if state.player.is_alive() {
        state.player.update(input, area);
    } else if let Some(health) = state.player.death_step() {
        if health == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over: score={}, round={}", state.score, state.round);
            events.push(GameEvent::GameOver { score: state.score });
            return finish(state, events);
        }
        state.respawn_player(health);
        log::debug!("Ship respawned with {} lives", health);
        events.push(GameEvent::PlayerRespawned);
    }

    state.score += state.field.update(
        &mut state.player,
        &mut state.bullets,
        &mut state.rng,
        area,
        &mut events,
    );
    award_extra_lives(state, &mut events);

    if state.bullets.update(&state.player, input.fire, area) {
        events.push(GameEvent::Fired);
    }

    finish(state, events)
}

/// Spawn the current round's asteroids
pub fn next_round(state: &mut GameState) {
    state.field.next_round(&mut state.rng);
    log::info!(
        "Round {}: {} asteroids",
        state.round,
        state.field.asteroid_no
    );
}

fn award_extra_lives(state: &mut GameState, events: &mut Vec<GameEvent>) {
    while state.score >= EXTRA_LIFE_SCORE * state.next_extra_life {
        state.next_extra_life += 1;
        state.player.health = (state.player.health + 1).min(MAX_HEALTH);
        log::debug!("Extra life at {} points", state.score);
        events.push(GameEvent::ExtraLife {
            health: state.player.health,
        });
    }
}

fn finish(state: &mut GameState, events: Vec<GameEvent>) -> TickReport {
    let impact = events
        .iter()
        .any(|e| e.cue().is_some_and(|cue| cue.shakes()));
    if impact {
        state.shake_ticks = SCREEN_SHAKE_TICKS;
    }
    TickReport {
        score: state.score,
        screen_shake: impact && state.settings.effective_screen_shake(),
        events,
    }
}

/// Demo-mode input: turn toward the nearest asteroid and tap fire when
/// roughly lined up
pub fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if !state.player.is_alive() {
        return input;
    }

    let ship = state.player.center();
    let nearest = state.asteroids().iter().map(|a| a.center()).min_by(|a, b| {
        a.distance_squared(ship)
            .partial_cmp(&b.distance_squared(ship))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let Some(target) = nearest else {
        return input;
    };

    // Heading 0 is up, clockwise positive
    let to_target: DVec2 = target - ship;
    let bearing = normalize_degrees(to_target.x.atan2(-to_target.y).to_degrees());
    let diff = normalize_degrees(bearing - state.player.heading() + 180.0) - 180.0;

    if diff > SHIP_ROTATION / 2.0 {
        input.rotate_right = true;
    } else if diff < -SHIP_ROTATION / 2.0 {
        input.rotate_left = true;
    }
    // Release every other tick so the latch re-arms
    input.fire = diff.abs() < 20.0 && state.tick_count % 2 == 0;
    input.thrust = to_target.length() > 250.0 && diff.abs() < 10.0;
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Tier;

    fn game(seed: u64) -> GameState {
        GameState::new(Settings {
            seed,
            ..Settings::default()
        })
        .unwrap()
    }

    #[test]
    fn test_round_check_runs_first() {
        let mut state = game(1);
        state.field.reset();
        let report = tick(&mut state, &TickInput::default());
        assert_eq!(state.round, 2);
        assert_eq!(state.field.asteroid_no, INITIAL_ASTEROIDS + 1);
        assert_eq!(state.asteroids().len(), 5);
        assert!(report.events.contains(&GameEvent::RoundCleared {
            round: 2,
            asteroids: 5
        }));
    }

    #[test]
    fn test_round_cleared_on_spawning_tick() {
        let mut state = game(1);
        state.field.reset();
        let spot = DVec2::new(40.0, 600.0);
        state.field.spawn_at(Tier::Small, 0, spot, DVec2::ZERO);
        state.bullets.spawn(spot, DVec2::ZERO);

        let last_kill = tick(&mut state, &TickInput::default());
        assert!(state.field.is_empty());
        assert_eq!(state.round, 1);
        assert!(!last_kill
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::RoundCleared { .. })));

        let spawning = tick(&mut state, &TickInput::default());
        assert_eq!(state.round, 2);
        assert!(spawning
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::RoundCleared { round: 2, .. })));
    }

    #[test]
    fn test_round_size_caps() {
        let mut state = game(1);
        state.field.reset();
        state.field.asteroid_no = MAX_ASTEROIDS;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.field.asteroid_no, MAX_ASTEROIDS);
    }

    #[test]
    fn test_fire_reports_event() {
        let mut state = game(2);
        state.field.reset();
        state.field.spawn_at(Tier::Large, 0, DVec2::new(60.0, 60.0), DVec2::ZERO);
        let fire = TickInput {
            fire: true,
            ..TickInput::default()
        };
        let report = tick(&mut state, &fire);
        assert_eq!(report.events, vec![GameEvent::Fired]);
        assert!(!report.screen_shake);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_extra_life_awarded_once_per_threshold() {
        let mut state = game(3);
        state.score = EXTRA_LIFE_SCORE * 2;
        let report = tick(&mut state, &TickInput::default());
        let lives = report
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ExtraLife { .. }))
            .count();
        assert_eq!(lives, 2);
        assert_eq!(state.player.health, STARTING_HEALTH + 2);

        let report = tick(&mut state, &TickInput::default());
        assert!(!report.events.iter().any(|e| matches!(e, GameEvent::ExtraLife { .. })));
    }

    #[test]
    fn test_extra_life_clamped() {
        let mut state = game(3);
        state.player.health = MAX_HEALTH;
        state.score = EXTRA_LIFE_SCORE;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health, MAX_HEALTH);
    }

    #[test]
    fn test_shake_respects_reduced_motion() {
        let mut state = GameState::new(Settings {
            reduced_motion: true,
            ..Settings::default()
        })
        .unwrap();
        state.field.reset();
        state.field.spawn_at(Tier::Large, 0, DVec2::new(100.0, 100.0), DVec2::ZERO);
        state.bullets.spawn(DVec2::new(100.0, 100.0), DVec2::ZERO);
        let report = tick(&mut state, &TickInput::default());
        assert!(report.events.iter().any(|e| matches!(e, GameEvent::AsteroidDestroyed { .. })));
        assert!(!report.screen_shake);
        assert_eq!(state.shake_ticks, SCREEN_SHAKE_TICKS);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = game(4);
        state.phase = GamePhase::GameOver;
        let before = state.tick_count;
        let report = tick(&mut state, &TickInput::default());
        assert!(report.events.is_empty());
        assert_eq!(state.tick_count, before);
    }

    #[test]
    fn test_autopilot_turns_toward_target() {
        let mut state = game(5);
        state.field.reset();
        // Straight to the right of the ship
        let right = state.player.center() + DVec2::new(200.0, 0.0);
        state.field.spawn_at(Tier::Large, 0, right, DVec2::ZERO);
        let input = autopilot(&state);
        assert!(input.rotate_right);
        assert!(!input.rotate_left);
        assert!(!input.fire);
    }
}
