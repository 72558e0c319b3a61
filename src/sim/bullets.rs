//! Bullets and the edge-triggered fire latch

use glam::DVec2;
use serde::Serialize;

use super::player::Player;
use crate::consts::{BULLET_RADIUS, BULLET_SPEED};
use crate::error::ShapeError;
use crate::geom::Circle;
use crate::heading_vector;

/// A bullet in flight
#[derive(Debug, Clone, Serialize)]
pub struct Bullet {
    circle: Circle,
    velocity: DVec2,
}

impl Bullet {
    #[inline]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.circle.center()
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    fn advance(&mut self) {
        self.circle.translate(self.velocity);
    }

    /// Strictly inside the play area (edges count as out)
    fn in_bounds(&self, area: DVec2) -> bool {
        let p = self.position();
        0.0 < p.x && p.x < area.x && 0.0 < p.y && p.y < area.y
    }
}

/// All live bullets plus the trigger state
#[derive(Debug, Clone, Serialize)]
pub struct Bullets {
    list: Vec<Bullet>,
    /// Set after a shot until fire is released
    trigger_latched: bool,
    #[serde(skip)]
    template: Circle,
}

impl Bullets {
    pub fn new() -> Result<Self, ShapeError> {
        Ok(Self {
            list: Vec::new(),
            trigger_latched: false,
            template: Circle::new(DVec2::ZERO, BULLET_RADIUS)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[Bullet] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn trigger_latched(&self) -> bool {
        self.trigger_latched
    }

    /// Add a bullet at `position` moving by `velocity` per tick
    pub fn spawn(&mut self, position: DVec2, velocity: DVec2) {
        let mut circle = self.template.clone();
        circle.set_center(position);
        self.list.push(Bullet { circle, velocity });
    }

    pub(crate) fn remove(&mut self, index: usize) -> Bullet {
        self.list.remove(index)
    }

    pub fn clear(&mut self) {
        self.list.clear();
        self.trigger_latched = false;
    }

    /// Advance and expire bullets, then handle the trigger.
    /// Returns true when a bullet was fired this tick.
    pub fn update(&mut self, player: &Player, fire: bool, area: DVec2) -> bool {
        self.list.retain_mut(|bullet| {
            bullet.advance();
            bullet.in_bounds(area)
        });

        if fire && !self.trigger_latched && player.is_alive() {
            self.spawn(player.nose(), heading_vector(player.heading()) * BULLET_SPEED);
            self.trigger_latched = true;
            log::trace!("Bullet fired from {:?}", player.nose());
            true
        } else {
            if !fire {
                self.trigger_latched = false;
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: DVec2 = DVec2::new(650.0, 650.0);

    #[test]
    fn test_fire_is_edge_triggered() {
        let player = Player::new(AREA).unwrap();
        let mut bullets = Bullets::new().unwrap();
        let fired = (0..10).filter(|_| bullets.update(&player, true, AREA)).count();
        assert_eq!(fired, 1);
        assert_eq!(bullets.len(), 1);

        bullets.update(&player, false, AREA);
        assert!(!bullets.trigger_latched());
        assert!(bullets.update(&player, true, AREA));
        assert_eq!(bullets.len(), 2);
    }

    #[test]
    fn test_bullet_leaves_nose_at_bullet_speed() {
        let player = Player::new(AREA).unwrap();
        let mut bullets = Bullets::new().unwrap();
        bullets.update(&player, true, AREA);
        let b = &bullets.as_slice()[0];
        assert_eq!(b.position(), player.nose());
        assert!((b.velocity() - DVec2::new(0.0, -BULLET_SPEED)).length() < 1e-9);
        assert_eq!(b.circle().radius(), BULLET_RADIUS);
    }

    #[test]
    fn test_expires_on_or_past_edge() {
        let player = Player::new(AREA).unwrap();
        let mut bullets = Bullets::new().unwrap();
        bullets.spawn(DVec2::new(5.0, 100.0), DVec2::new(-5.0, 0.0));
        bullets.spawn(DVec2::new(100.0, 100.0), DVec2::new(-5.0, 0.0));
        bullets.spawn(DVec2::new(640.0, 100.0), DVec2::new(11.0, 0.0));
        bullets.update(&player, false, AREA);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets.as_slice()[0].position(), DVec2::new(95.0, 100.0));
    }

    #[test]
    fn test_no_fire_while_dying() {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(3);
        let mut player = Player::new(AREA).unwrap();
        player.kill(&mut rng);
        let mut bullets = Bullets::new().unwrap();
        assert!(!bullets.update(&player, true, AREA));
        assert!(bullets.is_empty());
        assert!(!bullets.trigger_latched());
    }
}
