//! Coins and the exit door
//!
//! Both bob up and down around a fixed base height; the motion lives in
//! [`FloatingMotion`] and is attached to each entity rather than inherited.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Sine bob around a base height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatingMotion {
    pub base_y: f32,
    pub timer: u32,
}

impl FloatingMotion {
    pub fn new(base_y: f32, timer: u32) -> Self {
        Self { base_y, timer }
    }

    /// Start at a random phase so neighbours don't bob in lockstep
    pub fn with_random_phase<R: Rng>(base_y: f32, rng: &mut R) -> Self {
        Self::new(base_y, rng.random_range(0..=FLOAT_PHASE_MAX))
    }

    /// Advance the phase and return the new center y
    pub fn advance(&mut self) -> f32 {
        self.timer = self.timer.wrapping_add(1);
        self.base_y + FLOAT_AMPLITUDE * (self.timer as f32 * FLOAT_PHASE_STEP).sin()
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    pub float: FloatingMotion,
}

impl Coin {
    pub fn new<R: Rng>(center: Vec2, rng: &mut R) -> Self {
        Self {
            rect: Rect::from_center(center, COIN_SIZE.0, COIN_SIZE.1),
            float: FloatingMotion::with_random_phase(center.y, rng),
        }
    }

    pub fn update(&mut self) {
        let y = self.float.advance();
        self.rect.set_centery(y);
    }
}

/// The level exit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    pub rect: Rect,
    pub float: FloatingMotion,
}

impl Door {
    /// Place the door standing on `platform`
    pub fn on_platform<R: Rng>(platform: &Rect, rng: &mut R) -> Self {
        let center = Vec2::new(platform.centerx(), platform.top - DOOR_SIZE.1 / 2.0);
        Self {
            rect: Rect::from_center(center, DOOR_SIZE.0, DOOR_SIZE.1),
            float: FloatingMotion::with_random_phase(center.y, rng),
        }
    }

    pub fn update(&mut self) {
        let y = self.float.advance();
        self.rect.set_centery(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_float_stays_within_amplitude() {
        let mut motion = FloatingMotion::new(100.0, 0);
        for _ in 0..200 {
            let y = motion.advance();
            assert!((y - 100.0).abs() <= FLOAT_AMPLITUDE + 1e-4);
        }
        assert_eq!(motion.timer, 200);
    }

    #[test]
    fn test_float_phase() {
        let mut motion = FloatingMotion::new(0.0, 0);
        let y = motion.advance();
        assert!((y - 3.0 * 0.1f32.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_random_phase_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let motion = FloatingMotion::with_random_phase(0.0, &mut rng);
            assert!(motion.timer <= FLOAT_PHASE_MAX);
        }
    }

    #[test]
    fn test_coin_bobs_around_base() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut coin = Coin::new(Vec2::new(280.0, 484.0), &mut rng);
        let left = coin.rect.left;
        for _ in 0..50 {
            coin.update();
            assert!((coin.rect.centery() - 484.0).abs() <= FLOAT_AMPLITUDE + 1e-3);
            assert_eq!(coin.rect.left, left);
        }
    }

    #[test]
    fn test_door_stands_on_platform() {
        let mut rng = Pcg32::seed_from_u64(1);
        let platform = Rect::new(650.0, 180.0, 160.0, 32.0);
        let door = Door::on_platform(&platform, &mut rng);
        assert_eq!(door.rect.centerx(), 730.0);
        assert_eq!(door.rect.bottom(), 180.0);
    }
}
