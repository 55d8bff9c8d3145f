//! Read-only per-tick view of the world for an external renderer

use serde::Serialize;

use super::fade::FadePhase;
use super::player::Facing;
use super::rect::Rect;
use super::state::{GameMode, GameState};

/// One animated sprite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    pub rect: Rect,
    pub facing: Facing,
    pub frame: u32,
    /// Image key, e.g. `mage-right-0`
    pub sprite: String,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot<'a> {
    pub mode: GameMode,
    pub score: u32,
    pub fade_alpha: u8,
    pub fade_phase: FadePhase,
    pub world_width: f32,
    pub world_height: f32,
    pub player: SpriteView,
    pub enemies: Vec<SpriteView>,
    pub coins: Vec<Rect>,
    pub door: Rect,
    pub floor_tiles: &'a [Rect],
    pub platforms: &'a [Rect],
}

impl GameState {
    /// Build the renderer's view of the current tick
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        let player = SpriteView {
            rect: self.player.rect,
            facing: self.player.facing,
            frame: self.player.anim_frame(),
            sprite: self.player.sprite_name(),
        };
        let enemies = self
            .enemies
            .iter()
            .map(|e| SpriteView {
                rect: e.rect,
                facing: e.facing,
                frame: e.anim_frame(),
                sprite: e.sprite_name(),
            })
            .collect();

        RenderSnapshot {
            mode: self.mode,
            score: self.score,
            fade_alpha: self.fade.alpha(),
            fade_phase: self.fade.phase(),
            world_width: self.geometry.world_width(),
            world_height: self.geometry.world_height(),
            player,
            enemies,
            coins: self.coins.iter().map(|c| c.rect).collect(),
            door: self.door.rect,
            floor_tiles: self.geometry.floor_tiles(),
            platforms: self.geometry.platforms(),
        }
    }
}
