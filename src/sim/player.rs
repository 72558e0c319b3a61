//! Player ship: steering, thrust, wrap-around, death animation

use glam::DVec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use super::tick::TickInput;
use crate::consts::*;
use crate::error::ShapeError;
use crate::geom::{Line, Rect};
use crate::{enlarge_point, heading_vector, normalize_degrees, rotate_point};

/// Per-line drift applied while the wreck spins (left, right, crossbar)
const WRECK_DRIFT: [DVec2; 3] = [
    DVec2::new(-0.5, -0.5),
    DVec2::new(0.5, -0.5),
    DVec2::new(0.0, 0.5),
];

/// Ship lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ShipState {
    /// Flying and steerable
    Alive,
    /// Wreck animation; each body line spins by its own `spins` entry per tick
    Dying { ticks_left: u32, spins: [f64; 3] },
}

/// The player's ship
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Left side, right side, crossbar
    body: [Line; 3],
    /// Bullet spawn point
    nose: DVec2,
    /// Rotation pivot and wrap reference
    center: DVec2,
    /// Degrees in [0, 360), 0 = up, clockwise positive
    heading: f64,
    velocity: DVec2,
    pub health: u8,
    invulnerable_ticks: u32,
    visible: bool,
    state: ShipState,
}

impl Player {
    /// Ship at the middle of an `area`-sized field, pointing up
    pub fn new(area: DVec2) -> Result<Self, ShapeError> {
        let (w, h) = (area.x, area.y);
        let nose = DVec2::new(w / 2.0, h / 2.0 - 50.0);
        let left = DVec2::new(w / 2.0 - 25.0, h / 2.0 + 20.0);
        let right = DVec2::new(w / 2.0 + 25.0, h / 2.0 + 20.0);
        let center = Rect::bounding(&[nose, left, right]).center();

        let part = |a: DVec2, b: DVec2| -> Result<Line, ShapeError> {
            let mut line = Line::new(a, b)?;
            line.enlarge(SHIP_SCALE, Some(center));
            Ok(line)
        };
        let body = [
            part(nose, left)?,
            part(nose, right)?,
            part(
                DVec2::new(w / 2.0 - 20.0, h / 2.0 + 4.0),
                DVec2::new(w / 2.0 + 20.0, h / 2.0 + 4.0),
            )?,
        ];

        Ok(Self {
            body,
            nose: enlarge_point(nose, SHIP_SCALE, center),
            center,
            heading: 0.0,
            velocity: DVec2::ZERO,
            health: STARTING_HEALTH,
            invulnerable_ticks: 0,
            visible: true,
            state: ShipState::Alive,
        })
    }

    /// Fresh ship from `template` after a death, keeping `health`
    pub fn respawn(template: &Player, health: u8) -> Self {
        let mut ship = template.clone();
        ship.health = health;
        ship.invulnerable_ticks = RESPAWN_INVULNERABLE_TICKS;
        ship
    }

    #[inline]
    pub fn body(&self) -> &[Line; 3] {
        &self.body
    }

    #[inline]
    pub fn nose(&self) -> DVec2 {
        self.nose
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    #[inline]
    pub fn state(&self) -> ShipState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.state, ShipState::Alive)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }

    pub fn invulnerable_ticks(&self) -> u32 {
        self.invulnerable_ticks
    }

    /// Blink state for the renderer
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Move the whole ship so its center lands on `center`
    pub fn move_to(&mut self, center: DVec2) {
        let delta = center - self.center;
        self.shift(delta);
    }

    fn shift(&mut self, delta: DVec2) {
        if delta == DVec2::ZERO {
            return;
        }
        for line in &mut self.body {
            line.translate(delta);
        }
        self.nose += delta;
        self.center += delta;
    }

    fn turn(&mut self, degrees: f64) {
        self.heading = normalize_degrees(self.heading + degrees);
        for line in &mut self.body {
            line.rotate(degrees, Some(self.center));
        }
        self.nose = rotate_point(self.nose, degrees, self.center);
    }

    /// One tick of steering and movement. No-op while dying.
    pub fn update(&mut self, input: &TickInput, area: DVec2) {
        if !self.is_alive() {
            return;
        }

        if input.rotate_left {
            self.turn(-SHIP_ROTATION);
        }
        if input.rotate_right {
            self.turn(SHIP_ROTATION);
        }

        let target = heading_vector(self.heading) * SHIP_MAX_SPEED;
        let sign = DVec2::new(
            if 0.0 < self.heading && self.heading < 180.0 { 1.0 } else { -1.0 },
            if 90.0 < self.heading && self.heading < 270.0 { 1.0 } else { -1.0 },
        );

        if input.thrust {
            self.velocity += target * SHIP_ACCEL;
            self.velocity.x = cap_toward(self.velocity.x, target.x, sign.x);
            self.velocity.y = cap_toward(self.velocity.y, target.y, sign.y);
        } else {
            self.velocity -= target * SHIP_DRAG;
            self.velocity.x = stop_at_zero(self.velocity.x, sign.x);
            self.velocity.y = stop_at_zero(self.velocity.y, sign.y);
        }

        self.shift(self.velocity);
        self.wrap(area);

        if self.invulnerable_ticks > 0 {
            self.invulnerable_ticks -= 1;
            if self.invulnerable_ticks == 0 {
                self.visible = true;
            } else if self.invulnerable_ticks % BLINK_PERIOD == 0 {
                self.visible = !self.visible;
            }
        }
    }

    fn wrap(&mut self, area: DVec2) {
        let mut wrapped = self.center;
        if wrapped.x > area.x + SHIP_WRAP_MARGIN_X {
            wrapped.x = -SHIP_WRAP_MARGIN_X;
        } else if wrapped.x < -SHIP_WRAP_MARGIN_X {
            wrapped.x = area.x + SHIP_WRAP_MARGIN_X;
        }
        if wrapped.y > area.y + SHIP_WRAP_MARGIN_Y {
            wrapped.y = -SHIP_WRAP_MARGIN_Y;
        } else if wrapped.y < -SHIP_WRAP_MARGIN_Y {
            wrapped.y = area.y + SHIP_WRAP_MARGIN_Y;
        }
        self.shift(wrapped - self.center);
    }

    /// Lose a life and start the wreck animation
    pub fn kill(&mut self, rng: &mut impl Rng) {
        if !self.is_alive() {
            return;
        }
        self.health = self.health.saturating_sub(1);
        let choices = [-DEATH_SPIN, DEATH_SPIN];
        let mut spins = [DEATH_SPIN; 3];
        for spin in &mut spins {
            if let Some(&s) = choices.choose(rng) {
                *spin = s;
            }
        }
        self.state = ShipState::Dying {
            ticks_left: DEATH_TICKS,
            spins,
        };
        self.velocity = DVec2::ZERO;
    }

    /// Advance the wreck animation. Returns the remaining health once the
    /// animation has finished, `None` while it runs or if the ship is alive.
    pub fn death_step(&mut self) -> Option<u8> {
        let ShipState::Dying { ticks_left, spins } = &mut self.state else {
            return None;
        };
        for ((line, drift), spin) in self.body.iter_mut().zip(WRECK_DRIFT).zip(*spins) {
            line.translate(drift);
            line.rotate(spin, None);
        }
        *ticks_left = ticks_left.saturating_sub(1);
        (*ticks_left == 0).then_some(self.health)
    }
}

/// Thrust clamp: never pass `target` in the heading's direction
#[inline]
fn cap_toward(v: f64, target: f64, sign: f64) -> f64 {
    if (sign > 0.0 && v > target) || (sign < 0.0 && v < target) {
        target
    } else {
        v
    }
}

/// Drag clamp: stop at zero instead of reversing
#[inline]
fn stop_at_zero(v: f64, sign: f64) -> f64 {
    if (sign > 0.0 && v < 0.0) || (sign < 0.0 && v > 0.0) {
        0.0
    } else {
        v
    }
}
