//! Asteroids - shape collision engine and simulation core
//!
//! Core modules:
//! - `geom`: Shape primitives (rect, circle, line, polygon) and collision dispatch
//! - `sim`: Fixed-tick simulation (player, bullets, asteroid field, scoring)
//! - `settings`: Play area and presentation preferences
//! - `cue`: Audio/visual cues handed to the presentation layer
//! - `error`: Construction and configuration errors

pub mod cue;
pub mod error;
pub mod geom;
pub mod settings;
pub mod sim;

pub use cue::Cue;
pub use error::{ConfigError, GameError, ShapeError};
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Default play area (pixels)
    pub const AREA_WIDTH: f64 = 650.0;
    pub const AREA_HEIGHT: f64 = 650.0;
    /// Simulation rate
    pub const TICK_RATE: u32 = 60;

    /// Ship rotation per tick while a turn key is held (degrees)
    pub const SHIP_ROTATION: f64 = 4.0;
    /// Ship top speed (pixels/tick)
    pub const SHIP_MAX_SPEED: f64 = 5.0;
    /// Fraction of top speed gained per tick of thrust
    pub const SHIP_ACCEL: f64 = 0.02;
    /// Fraction of top speed lost per tick without thrust
    pub const SHIP_DRAG: f64 = 0.005;
    /// Outline scale applied to the ship at spawn
    pub const SHIP_SCALE: f64 = 0.6;
    /// How far past the edge the ship center travels before wrapping
    pub const SHIP_WRAP_MARGIN_X: f64 = 31.0;
    pub const SHIP_WRAP_MARGIN_Y: f64 = 43.0;

    pub const STARTING_HEALTH: u8 = 3;
    pub const MAX_HEALTH: u8 = 5;
    /// Death animation length (3 seconds at 60 Hz)
    pub const DEATH_TICKS: u32 = 180;
    /// Spin applied to each wreck line per death tick (degrees, sign is random)
    pub const DEATH_SPIN: f64 = 3.0;
    /// Invulnerability granted on respawn (5 seconds)
    pub const RESPAWN_INVULNERABLE_TICKS: u32 = 300;
    /// Visibility toggles every this many ticks while invulnerable
    pub const BLINK_PERIOD: u32 = 25;

    pub const BULLET_SPEED: f64 = 11.0;
    pub const BULLET_RADIUS: f64 = 2.5;

    /// Large asteroids in the first round
    pub const INITIAL_ASTEROIDS: u32 = 4;
    /// Large asteroids per round never exceed this
    pub const MAX_ASTEROIDS: u32 = 6;
    /// Random velocity components closer to zero than this are rerolled
    pub const MIN_VELOCITY_COMPONENT: f64 = 0.1;

    /// One extra life per this many points
    pub const EXTRA_LIFE_SCORE: u64 = 10_000;

    /// Screen shake length after an impact
    pub const SCREEN_SHAKE_TICKS: u32 = 15;
}

/// Normalize a heading to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Unit-speed direction for a heading in degrees (0 = up, clockwise positive)
#[inline]
pub fn heading_vector(degrees: f64) -> DVec2 {
    let theta = degrees.to_radians();
    DVec2::new(theta.sin(), -theta.cos())
}

/// Rotate `point` by `degrees` about `pivot`
#[inline]
pub fn rotate_point(point: DVec2, degrees: f64, pivot: DVec2) -> DVec2 {
    pivot + DVec2::from_angle(degrees.to_radians()).rotate(point - pivot)
}

/// Scale the offset of `point` from `pivot` by `scale`
#[inline]
pub fn enlarge_point(point: DVec2, scale: f64, pivot: DVec2) -> DVec2 {
    pivot + (point - pivot) * scale
}

/// Mean of a set of points (origin for an empty set)
pub fn centroid(points: &[DVec2]) -> DVec2 {
    if points.is_empty() {
        return DVec2::ZERO;
    }
    points.iter().copied().sum::<DVec2>() / points.len() as f64
}
