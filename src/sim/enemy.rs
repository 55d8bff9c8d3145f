//! Enemy patrol/chase AI
//!
//! Each enemy is pinned to one home platform for its whole life. Whether it
//! patrols or chases is recomputed from positions every tick; only the
//! patrol direction (the sign of `vel_x`) carries over between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::{Facing, anim_frame};
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Kind of home platform, which decides the same-platform rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeKind {
    /// The world-wide floor strip
    Ground,
    /// A floating platform
    Elevated,
}

/// The platform an enemy walks on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomePlatform {
    pub rect: Rect,
    pub kind: HomeKind,
}

impl HomePlatform {
    pub fn ground(rect: Rect) -> Self {
        Self {
            rect,
            kind: HomeKind::Ground,
        }
    }

    pub fn elevated(rect: Rect) -> Self {
        Self {
            rect,
            kind: HomeKind::Elevated,
        }
    }

    /// Whether a player centered at `player` counts as standing on this platform
    pub fn holds_player(&self, player: Vec2, vertical_gate: f32) -> bool {
        match self.kind {
            // Anywhere on the ground level, no horizontal bound
            HomeKind::Ground => player.y >= self.rect.top - GROUND_LEVEL_BAND,
            HomeKind::Elevated => {
                self.rect.spans_x(player.x) && (player.y - self.rect.top).abs() < vertical_gate
            }
        }
    }
}

/// Behavior chosen for the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// Walk toward the player at this velocity
    Chase { vel_x: f32 },
    /// Keep patrolling the home platform
    Patrol,
}

/// A zombie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub vel_x: f32,
    pub facing: Facing,
    home: HomePlatform,
    pub anim_timer: u32,
}

impl Enemy {
    /// Spawn centered at `center`, feet on the home platform
    pub fn new(center: Vec2, home: HomePlatform, vel_x: f32) -> Self {
        let mut rect = Rect::from_center(center, ENEMY_SIZE.0, ENEMY_SIZE.1);
        rect.set_bottom(home.rect.top);
        Self {
            rect,
            vel_x,
            facing: Facing::from_velocity(vel_x),
            home,
            anim_timer: 0,
        }
    }

    /// Home platform, fixed at spawn
    pub fn home(&self) -> &HomePlatform {
        &self.home
    }

    /// Advance one tick against the player's current box
    pub fn update(&mut self, player: &Rect, tuning: &Tuning) {
        match decide(self, player, tuning) {
            Behavior::Chase { vel_x } => self.vel_x = vel_x,
            Behavior::Patrol => {
                if self.rect.left <= self.home.rect.left {
                    self.vel_x = tuning.enemy_speed;
                }
                if self.rect.right() >= self.home.rect.right() {
                    self.vel_x = -tuning.enemy_speed;
                }
            }
        }
        self.facing = Facing::from_velocity(self.vel_x);

        self.rect.left += self.vel_x;
        // Never leave the home span; patrol turns around on the next tick
        let min = self.home.rect.left;
        let max = self.home.rect.right() - self.rect.width;
        self.rect.left = self.rect.left.clamp(min, max);
        self.rect.set_bottom(self.home.rect.top);

        self.anim_timer = self.anim_timer.wrapping_add(1);
    }

    pub fn anim_frame(&self) -> u32 {
        anim_frame(self.anim_timer)
    }

    /// Sprite key for the renderer, e.g. `zombie-right-1`
    pub fn sprite_name(&self) -> String {
        format!("zombie-{}-{}", self.facing.as_str(), self.anim_frame())
    }
}

/// Pure chase/patrol decision from current positions.
///
/// Chase when the player is within detection range horizontally, within the
/// vertical gate, and on this enemy's platform. Chase velocity re-aims at
/// the player every tick.
pub fn decide(enemy: &Enemy, player: &Rect, tuning: &Tuning) -> Behavior {
    let me = enemy.rect.center();
    let target = player.center();

    let dx = (me.x - target.x).abs();
    let dy = (me.y - target.y).abs();

    if dx < tuning.detection_range
        && dy < tuning.ai_vertical_gate
        && enemy.home.holds_player(target, tuning.ai_vertical_gate)
    {
        let vel_x = if target.x > me.x {
            tuning.enemy_speed
        } else {
            -tuning.enemy_speed
        };
        Behavior::Chase { vel_x }
    } else {
        Behavior::Patrol
    }
}
