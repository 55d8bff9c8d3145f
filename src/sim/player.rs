//! Player controller
//!
//! Turns per-tick movement intent into velocity, then hands the body to
//! [`super::collision::step_body`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::step_body;
use super::geometry::Geometry;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Horizontal facing, shared by player and enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal velocity (zero counts as right)
    pub fn from_velocity(vx: f32) -> Self {
        if vx >= 0.0 { Facing::Right } else { Facing::Left }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Animation frame for a running tick counter
#[inline]
pub fn anim_frame(timer: u32) -> u32 {
    (timer / ANIM_TICKS_PER_FRAME) % ANIM_FRAMES
}

/// Resolved horizontal intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Left,
    Right,
    Idle,
}

impl MoveIntent {
    /// Left is checked first, so holding both keys moves left
    pub fn resolve(move_left: bool, move_right: bool) -> Self {
        if move_left {
            MoveIntent::Left
        } else if move_right {
            MoveIntent::Right
        } else {
            MoveIntent::Idle
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    /// Set only by the latest vertical collision pass
    pub on_ground: bool,
    pub facing: Facing,
    pub anim_timer: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}

impl Player {
    /// A player standing at the spawn point
    pub fn spawn() -> Self {
        let (x, y) = PLAYER_SPAWN;
        Self {
            rect: Rect::from_center(Vec2::new(x, y), PLAYER_SIZE.0, PLAYER_SIZE.1),
            vel: Vec2::ZERO,
            on_ground: false,
            facing: Facing::Right,
            anim_timer: 0,
        }
    }

    /// Put the player back at spawn with zeroed motion and animation
    pub fn reset(&mut self) {
        *self = Self::spawn();
    }

    /// Advance one tick: apply intent, integrate, collide, animate
    pub fn update(&mut self, intent: MoveIntent, jump: bool, geometry: &Geometry, tuning: &Tuning) {
        match intent {
            MoveIntent::Left => {
                self.vel.x = -tuning.player_speed;
                self.facing = Facing::Left;
            }
            MoveIntent::Right => {
                self.vel.x = tuning.player_speed;
                self.facing = Facing::Right;
            }
            // Facing persists while idle
            MoveIntent::Idle => self.vel.x = 0.0,
        }

        // Grounded flag is last tick's, so holding jump in the air does nothing
        if jump && self.on_ground {
            self.vel.y = tuning.jump_power;
        }

        self.on_ground = step_body(&mut self.rect, &mut self.vel, geometry, tuning);

        self.anim_timer = self.anim_timer.wrapping_add(1);
    }

    pub fn anim_frame(&self) -> u32 {
        anim_frame(self.anim_timer)
    }

    /// Sprite key for the renderer, e.g. `mage-left-2`
    pub fn sprite_name(&self) -> String {
        format!("mage-{}-{}", self.facing.as_str(), self.anim_frame())
    }
}
