//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::asteroids::{Asteroid, AsteroidField, Tier};
use super::bullets::Bullets;
use super::player::Player;
use crate::cue::Cue;
use crate::error::GameError;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; ticks are no-ops until `reset`
    GameOver,
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// Bullet left the nose
    Fired,
    /// Asteroid broken by a bullet or the ship
    AsteroidDestroyed { tier: Tier, position: DVec2 },
    /// Ship hit an asteroid; `health` is what remains
    PlayerDied { health: u8 },
    /// Death animation over, new ship at the center
    PlayerRespawned,
    /// Score threshold crossed
    ExtraLife { health: u8 },
    /// Field emptied and a new round began.
    ///
    /// Reported on the tick that spawns the new round, which is the tick
    /// after the last asteroid was destroyed.
    RoundCleared { round: u32, asteroids: u32 },
    /// Last life lost
    GameOver { score: u64 },
}

impl GameEvent {
    /// Presentation cue for this event, if any
    pub fn cue(&self) -> Option<Cue> {
        match self {
            GameEvent::Fired => Some(Cue::Fire),
            GameEvent::AsteroidDestroyed { .. } => Some(Cue::AsteroidHit),
            GameEvent::PlayerDied { .. } => Some(Cue::ShipDestroyed),
            GameEvent::GameOver { .. } => Some(Cue::GameOver),
            GameEvent::PlayerRespawned
            | GameEvent::ExtraLife { .. }
            | GameEvent::RoundCleared { .. } => None,
        }
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub settings: Settings,
    /// Seeded from `settings.seed`
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Current round (1-based)
    pub round: u32,
    pub score: u64,
    /// Simulation tick counter
    pub tick_count: u64,
    /// Ticks of screen shake left
    pub shake_ticks: u32,
    /// Next multiple of the extra-life score still to be awarded
    pub(crate) next_extra_life: u64,
    pub player: Player,
    pub bullets: Bullets,
    pub field: AsteroidField,
    /// Spawn-position ship, cloned on respawn
    #[serde(skip)]
    ship_template: Player,
}

impl GameState {
    /// Create a new game and spawn the first round.
    ///
    /// Settings are validated first, so a degenerate play area is an error
    /// rather than an empty spawn region.
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let area = DVec2::new(settings.width, settings.height);
        let ship_template = Player::new(area)?;
        let mut state = Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            phase: GamePhase::Playing,
            round: 1,
            score: 0,
            tick_count: 0,
            shake_ticks: 0,
            next_extra_life: 1,
            player: ship_template.clone(),
            bullets: Bullets::new()?,
            field: AsteroidField::new(area)?,
            ship_template,
            settings,
        };
        state.reset();
        Ok(state)
    }

    /// Start over with the same settings and seed
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.settings.seed);
        self.phase = GamePhase::Playing;
        self.round = 1;
        self.score = 0;
        self.tick_count = 0;
        self.shake_ticks = 0;
        self.next_extra_life = 1;
        self.player = self.ship_template.clone();
        self.bullets.clear();
        self.field.reset();
        self.field.next_round(&mut self.rng);
        log::info!(
            "New game: seed={}, {} asteroids",
            self.settings.seed,
            self.field.len()
        );
    }

    /// Play area size
    pub fn area(&self) -> DVec2 {
        DVec2::new(self.settings.width, self.settings.height)
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        self.field.asteroids()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Replace the ship with a fresh one at the spawn point
    pub(crate) fn respawn_player(&mut self, health: u8) {
        self.player = Player::respawn(&self.ship_template, health);
    }
}
