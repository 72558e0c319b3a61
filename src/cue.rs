//! Presentation cues
//!
//! The simulation never touches audio or visuals; it reports cues and the
//! front end decides how to play them.

use serde::{Deserialize, Serialize};

/// Sound/visual cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Bullet fired from the nose
    Fire,
    /// Asteroid broken by a bullet or the ship
    AsteroidHit,
    /// Ship destroyed by an asteroid
    ShipDestroyed,
    /// Last life lost
    GameOver,
}

impl Cue {
    /// Suggested playback volume (0.0 - 1.0).
    ///
    /// A hint for front ends that mix their own sounds; the headless driver
    /// only logs it.
    pub fn volume(&self) -> f32 {
        match self {
            Cue::Fire => 0.25,
            Cue::AsteroidHit => 0.1,
            Cue::ShipDestroyed => 0.25,
            Cue::GameOver => 0.5,
        }
    }

    /// Whether the cue also shakes the screen
    pub fn shakes(&self) -> bool {
        matches!(self, Cue::AsteroidHit | Cue::ShipDestroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumes_in_range() {
        for cue in [Cue::Fire, Cue::AsteroidHit, Cue::ShipDestroyed, Cue::GameOver] {
            let v = cue.volume();
            assert!((0.0..=1.0).contains(&v), "{cue:?} volume {v}");
        }
        assert!(Cue::GameOver.volume() > Cue::Fire.volume());
        assert!(Cue::AsteroidHit.volume() < Cue::ShipDestroyed.volume());
    }

    #[test]
    fn test_only_impacts_shake() {
        assert!(Cue::AsteroidHit.shakes());
        assert!(Cue::ShipDestroyed.shakes());
        assert!(!Cue::Fire.shakes());
        assert!(!Cue::GameOver.shakes());
    }
}
