//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Seeded RNG only
//! - Stable iteration order (asteroids and bullets are processed newest first)
//! - No rendering, audio or platform dependencies

pub mod asteroids;
pub mod bullets;
pub mod player;
pub mod state;
pub mod tick;

pub use asteroids::{Asteroid, AsteroidField, Tier};
pub use bullets::{Bullet, Bullets};
pub use player::{Player, ShipState};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, TickReport, autopilot, next_round, tick};
