//! Asteroid field: round spawning, movement, splitting, and the per-tick
//! collision pass against bullets and the ship.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bullets::Bullets;
use super::player::Player;
use super::state::GameEvent;
use crate::consts::{INITIAL_ASTEROIDS, MIN_VELOCITY_COMPONENT};
use crate::error::ShapeError;
use crate::geom::{Polygon, Rect};

/// Hand-authored outlines, 80x80 design space
const OUTLINES: [&[(f64, f64)]; 3] = [
    &[(23.0, 0.0), (72.0, 12.0), (79.0, 46.0), (64.0, 71.0), (25.0, 79.0), (0.0, 51.0), (0.0, 18.0)],
    &[(25.0, 0.0), (79.0, 24.0), (79.0, 54.0), (46.0, 79.0), (2.0, 61.0), (0.0, 19.0)],
    &[(25.0, 2.0), (66.0, 0.0), (79.0, 38.0), (67.0, 63.0), (38.0, 79.0), (14.0, 69.0), (0.0, 20.0)],
];

/// Children spawned when a Large or Medium asteroid breaks
const CHILDREN_PER_SPLIT: usize = 2;

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Large,
    Medium,
    Small,
}

impl Tier {
    /// Points for destroying one
    pub fn score(self) -> u64 {
        match self {
            Tier::Large => 20,
            Tier::Medium => 50,
            Tier::Small => 100,
        }
    }

    /// Bound on each velocity component
    pub fn speed(self) -> f64 {
        match self {
            Tier::Large => 1.0,
            Tier::Medium => 2.0,
            Tier::Small => 1.75,
        }
    }

    /// Outline scale relative to the design space
    pub fn scale(self) -> f64 {
        match self {
            Tier::Large => 1.0,
            Tier::Medium => 0.625,
            Tier::Small => 0.325,
        }
    }

    /// Tier of the pieces this one breaks into
    pub fn smaller(self) -> Option<Tier> {
        match self {
            Tier::Large => Some(Tier::Medium),
            Tier::Medium => Some(Tier::Small),
            Tier::Small => None,
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, Serialize)]
pub struct Asteroid {
    pub polygon: Polygon,
    pub velocity: DVec2,
    pub tier: Tier,
}

impl Asteroid {
    pub fn center(&self) -> DVec2 {
        self.polygon.center()
    }

    /// Drift one tick, wrapping once the body is fully off an edge
    pub fn advance(&mut self, area: DVec2) {
        self.polygon.translate(self.velocity);

        let half = DVec2::new(
            self.polygon.bounding_box().w / 2.0,
            self.polygon.bounding_box().h / 2.0,
        );
        let mut c = self.polygon.center();
        let before = c;
        if c.x > area.x + half.x {
            c.x = -half.x;
        } else if c.x < -half.x {
            c.x = area.x + half.x;
        }
        if c.y > area.y + half.y {
            c.y = -half.y;
        } else if c.y < -half.y {
            c.y = area.y + half.y;
        }
        if c != before {
            self.polygon.set_center(c);
        }
    }
}

/// Rerolls velocity components that are near zero or already taken in
/// the current batch
#[derive(Debug, Default)]
struct VelocityPicker {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl VelocityPicker {
    fn pick(&mut self, rng: &mut impl Rng, speed: f64) -> DVec2 {
        let x = Self::component(rng, speed, &mut self.xs);
        let y = Self::component(rng, speed, &mut self.ys);
        DVec2::new(x, y)
    }

    fn component(rng: &mut impl Rng, speed: f64, taken: &mut Vec<f64>) -> f64 {
        loop {
            let v = rng.random_range(-speed..speed);
            if v.abs() >= MIN_VELOCITY_COMPONENT && !taken.contains(&v) {
                taken.push(v);
                return v;
            }
        }
    }
}

/// The 3x3 screen grid minus the middle cell; the bottom-middle cell
/// starts at the horizontal center.
fn spawn_regions(area: DVec2) -> [Rect; 8] {
    let (w, h) = (area.x, area.y);
    let (w1, w2) = (w / 3.0, w * 2.0 / 3.0);
    let (h1, h2) = (h / 3.0, h * 2.0 / 3.0);
    let span = |x0: f64, x1: f64, y0: f64, y1: f64| Rect::new(x0, y0, x1 - x0, y1 - y0);
    [
        span(0.0, w1, 0.0, h1),
        span(w1, w2, 0.0, h1),
        span(w2, w, 0.0, h1),
        span(0.0, w1, h1, h2),
        span(w2, w, h1, h2),
        span(0.0, w1, h2, h),
        span(w / 2.0, w2, h2, h),
        span(w2, w, h2, h),
    ]
}

/// Live asteroids and round sizing
#[derive(Debug, Clone, Serialize)]
pub struct AsteroidField {
    asteroids: Vec<Asteroid>,
    /// Large asteroids spawned by the next round
    pub asteroid_no: u32,
    #[serde(skip)]
    outlines: [Polygon; 3],
    #[serde(skip)]
    regions: [Rect; 8],
}

impl AsteroidField {
    pub fn new(area: DVec2) -> Result<Self, ShapeError> {
        let outline = |raw: &[(f64, f64)]| -> Result<Polygon, ShapeError> {
            let points: Vec<DVec2> = raw.iter().map(|&(x, y)| DVec2::new(x, y)).collect();
            Polygon::new(&points)
        };
        Ok(Self {
            asteroids: Vec::new(),
            asteroid_no: INITIAL_ASTEROIDS,
            outlines: [outline(OUTLINES[0])?, outline(OUTLINES[1])?, outline(OUTLINES[2])?],
            regions: spawn_regions(area),
        })
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    /// Spawn regions, in grid order
    pub fn regions(&self) -> &[Rect; 8] {
        &self.regions
    }

    /// Empty the field and go back to the first round's size
    pub fn reset(&mut self) {
        self.asteroids.clear();
        self.asteroid_no = INITIAL_ASTEROIDS;
    }

    /// A `tier` asteroid from outline `outline % 3`, centered on `center`
    pub fn spawn_at(&mut self, tier: Tier, outline: usize, center: DVec2, velocity: DVec2) {
        let mut polygon = self.outlines[outline % self.outlines.len()].clone();
        polygon.enlarge(tier.scale(), None).set_center(center);
        self.asteroids.push(Asteroid {
            polygon,
            velocity,
            tier,
        });
    }

    fn random_outline(&self, rng: &mut impl Rng) -> Polygon {
        self.outlines[rng.random_range(0..self.outlines.len())].clone()
    }

    /// Spawn `asteroid_no` Large asteroids away from the ship's start cell
    pub fn next_round(&mut self, rng: &mut impl Rng) {
        let mut picker = VelocityPicker::default();
        for _ in 0..self.asteroid_no {
            let velocity = picker.pick(rng, Tier::Large.speed());
            let mut polygon = self.random_outline(rng);
            let region = self.regions[rng.random_range(0..self.regions.len())];
            let center = DVec2::new(
                rng.random_range(region.left()..region.right()),
                rng.random_range(region.top()..region.bottom()),
            );
            polygon.set_center(center);
            log::trace!("Asteroid spawned at {center:?} moving {velocity:?}");
            self.asteroids.push(Asteroid {
                polygon,
                velocity,
                tier: Tier::Large,
            });
        }
    }

    /// The two pieces a broken asteroid leaves behind (none for Small)
    fn split(&self, parent: &Asteroid, rng: &mut impl Rng) -> Vec<Asteroid> {
        let Some(tier) = parent.tier.smaller() else {
            return Vec::new();
        };
        let mut picker = VelocityPicker::default();
        (0..CHILDREN_PER_SPLIT)
            .map(|_| {
                let velocity = picker.pick(rng, tier.speed());
                let mut polygon = self.random_outline(rng);
                polygon.enlarge(tier.scale(), None);
                polygon.set_center(parent.center());
                Asteroid {
                    polygon,
                    velocity,
                    tier,
                }
            })
            .collect()
    }

    /// Move every asteroid and resolve its collisions, newest first.
    ///
    /// A bullet hit removes both and skips the ship check for that asteroid.
    /// A ship hit (alive, not invulnerable) kills the ship. Either way the
    /// asteroid splits; the pieces join the field after the pass. Returns the
    /// points scored.
    pub fn update(
        &mut self,
        player: &mut Player,
        bullets: &mut Bullets,
        rng: &mut impl Rng,
        area: DVec2,
        events: &mut Vec<GameEvent>,
    ) -> u64 {
        let mut gained = 0;
        let mut pieces = Vec::new();

        for index in (0..self.asteroids.len()).rev() {
            let asteroid = &mut self.asteroids[index];
            asteroid.advance(area);

            let shot = bullets
                .as_slice()
                .iter()
                .rposition(|b| asteroid.polygon.collide_circle(b.circle()));
            if let Some(bullet) = shot {
                bullets.remove(bullet);
                let asteroid = self.asteroids.remove(index);
                gained += self.destroy(&asteroid, rng, &mut pieces, events);
                continue;
            }

            if player.is_alive()
                && !player.is_invulnerable()
                && player.body().iter().any(|line| line.collide_polygon(&asteroid.polygon))
            {
                player.kill(rng);
                log::debug!("Ship destroyed, {} lives left", player.health);
                events.push(GameEvent::PlayerDied {
                    health: player.health,
                });
                let asteroid = self.asteroids.remove(index);
                gained += self.destroy(&asteroid, rng, &mut pieces, events);
            }
        }

        self.asteroids.extend(pieces);
        gained
    }

    fn destroy(
        &self,
        asteroid: &Asteroid,
        rng: &mut impl Rng,
        pieces: &mut Vec<Asteroid>,
        events: &mut Vec<GameEvent>,
    ) -> u64 {
        log::debug!("{:?} asteroid destroyed at {:?}", asteroid.tier, asteroid.center());
        events.push(GameEvent::AsteroidDestroyed {
            tier: asteroid.tier,
            position: asteroid.center(),
        });
        pieces.extend(self.split(asteroid, rng));
        asteroid.tier.score()
    }
}
