//! Whole-tick gameplay scenarios

use asteroids::Settings;
use asteroids::consts::*;
use asteroids::geom::Rect;
use asteroids::sim::{GameEvent, GamePhase, GameState, TickInput, Tier, autopilot, next_round, tick};
use glam::DVec2;

fn game(seed: u64) -> GameState {
    GameState::new(Settings {
        seed,
        ..Settings::default()
    })
    .unwrap()
}

/// A game with a single stationary asteroid far from the ship
fn quiet_game(seed: u64) -> GameState {
    let mut state = game(seed);
    state.field.reset();
    state
        .field
        .spawn_at(Tier::Small, 0, DVec2::new(40.0, 600.0), DVec2::ZERO);
    state
}

fn fire() -> TickInput {
    TickInput {
        fire: true,
        ..TickInput::default()
    }
}

#[test]
fn test_fire_held_spawns_one_bullet() {
    let mut state = quiet_game(1);
    let mut fired = 0;
    for _ in 0..10 {
        let report = tick(&mut state, &fire());
        fired += report.events.iter().filter(|e| **e == GameEvent::Fired).count();
    }
    assert_eq!(fired, 1);
    assert_eq!(state.bullets.len(), 1);
}

#[test]
fn test_bullet_breaks_large_asteroid() {
    let mut state = quiet_game(2);
    let target = DVec2::new(150.0, 150.0);
    state.field.spawn_at(Tier::Large, 2, target, DVec2::ZERO);
    state.bullets.spawn(target, DVec2::ZERO);

    let report = tick(&mut state, &TickInput::default());
    assert_eq!(report.score, 20);
    assert!(state.bullets.is_empty());
    let mediums: Vec<_> = state
        .asteroids()
        .iter()
        .filter(|a| a.tier == Tier::Medium)
        .collect();
    assert_eq!(mediums.len(), 2);
    assert!(!state.asteroids().iter().any(|a| a.tier == Tier::Large));
    assert!(report.screen_shake);
}

#[test]
fn test_bullet_hit_shields_ship_that_tick() {
    let mut state = quiet_game(3);
    let center = state.player.center();
    state.field.spawn_at(Tier::Large, 0, center, DVec2::ZERO);
    state.bullets.spawn(center, DVec2::ZERO);

    let report = tick(&mut state, &TickInput::default());
    assert!(state.player.is_alive());
    assert!(!report.events.iter().any(|e| matches!(e, GameEvent::PlayerDied { .. })));
    assert_eq!(
        report
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::AsteroidDestroyed { .. }))
            .count(),
        1
    );
}

#[test]
fn test_next_round_avoids_spawn_cell() {
    let mut state = game(4);
    state.field.reset();
    state.field.asteroid_no = MAX_ASTEROIDS;
    next_round(&mut state);
    assert_eq!(state.asteroids().len(), MAX_ASTEROIDS as usize);

    let third = DVec2::new(AREA_WIDTH, AREA_HEIGHT) / 3.0;
    let middle = Rect::new(third.x, third.y, third.x, third.y);
    for a in state.asteroids() {
        let c = a.center();
        assert_eq!(a.tier, Tier::Large);
        let strictly_inside = middle.left() < c.x
            && c.x < middle.right()
            && middle.top() < c.y
            && c.y < middle.bottom();
        assert!(!strictly_inside, "spawned in the middle cell at {c:?}");
    }
}

#[test]
fn test_death_then_respawn() {
    let mut state = quiet_game(5);
    let center = state.player.center();
    state.field.spawn_at(Tier::Large, 1, center, DVec2::ZERO);

    let report = tick(&mut state, &TickInput::default());
    assert!(report.events.contains(&GameEvent::PlayerDied { health: 2 }));
    assert!(!state.player.is_alive());
    assert_eq!(report.score, 20);

    for _ in 0..DEATH_TICKS - 1 {
        let report = tick(&mut state, &fire());
        assert!(!report.events.contains(&GameEvent::PlayerRespawned));
        assert!(!report.events.contains(&GameEvent::Fired));
    }
    let report = tick(&mut state, &TickInput::default());
    assert!(report.events.contains(&GameEvent::PlayerRespawned));
    assert!(state.player.is_alive());
    assert!(state.player.is_invulnerable());
    assert_eq!(state.player.health, 2);
    assert_eq!(state.player.center(), DVec2::new(325.0, 310.0));
}

#[test]
fn test_last_life_ends_game() {
    let mut state = quiet_game(6);
    state.player.health = 1;
    let center = state.player.center();
    state.field.spawn_at(Tier::Small, 0, center, DVec2::ZERO);

    tick(&mut state, &TickInput::default());
    assert_eq!(state.player.health, 0);

    let mut over = None;
    for _ in 0..DEATH_TICKS {
        let report = tick(&mut state, &TickInput::default());
        if let Some(GameEvent::GameOver { score }) = report
            .events
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            over = Some(*score);
        }
    }
    assert_eq!(over, Some(Tier::Small.score()));
    assert_eq!(state.phase, GamePhase::GameOver);

    let frozen = state.tick_count;
    let report = tick(&mut state, &fire());
    assert!(report.events.is_empty());
    assert_eq!(state.tick_count, frozen);

    state.reset();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.player.health, STARTING_HEALTH);
    assert_eq!(state.asteroids().len(), INITIAL_ASTEROIDS as usize);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = game(1234);
    let mut b = game(1234);
    for _ in 0..1500 {
        let input = autopilot(&a);
        assert_eq!(input, autopilot(&b));
        let ra = tick(&mut a, &input);
        let rb = tick(&mut b, &input);
        assert_eq!(ra, rb);
    }
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

#[test]
fn test_different_seeds_differ() {
    let a = game(1);
    let b = game(2);
    let centers = |s: &GameState| -> Vec<DVec2> { s.asteroids().iter().map(|a| a.center()).collect() };
    assert_ne!(centers(&a), centers(&b));
}
