//! Data-driven game balance
//!
//! Every load-bearing constant of the simulation, loadable from JSON.
//! Missing fields fall back to the values in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Physics, AI and fade constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_power: f32,
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub detection_range: f32,
    pub side_hit_threshold: f32,
    pub landing_tolerance: f32,
    pub ai_vertical_gate: f32,
    pub fade_step: u8,
    pub enemy_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,
            detection_range: DETECTION_RANGE,
            side_hit_threshold: SIDE_HIT_THRESHOLD,
            landing_tolerance: LANDING_TOLERANCE,
            ai_vertical_gate: AI_VERTICAL_GATE,
            fade_step: FADE_STEP,
            enemy_count: ENEMY_COUNT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    /// Reject out-of-range values instead of clamping them
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("detection_range", self.detection_range),
            ("side_hit_threshold", self.side_hit_threshold),
            ("landing_tolerance", self.landing_tolerance),
            ("ai_vertical_gate", self.ai_vertical_gate),
        ];
        for (field, value) in positive {
            // `!(v > 0)` also catches NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(self.jump_power < 0.0) {
            return Err(ConfigError::JumpNotUpward {
                value: self.jump_power,
            });
        }
        if self.fade_step == 0 {
            return Err(ConfigError::ZeroFadeStep);
        }
        if self.enemy_count == 0 {
            return Err(ConfigError::NoEnemies);
        }
        Ok(())
    }
}
