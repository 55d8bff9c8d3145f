//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick cadence only
//! - Seeded RNG only
//! - Stable iteration order (registry order for geometry, spawn order for entities)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod enemy;
pub mod fade;
pub mod geometry;
pub mod pickup;
pub mod player;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{VerticalHit, clamp_to_world, resolve_horizontal, resolve_vertical, step_body};
pub use enemy::{Behavior, Enemy, HomeKind, HomePlatform, decide};
pub use fade::{Fade, FadePhase, FadeSignal};
pub use geometry::{Geometry, LayoutConfig};
pub use pickup::{Coin, Door, FloatingMotion};
pub use player::{Facing, MoveIntent, Player};
pub use rect::Rect;
pub use snapshot::{RenderSnapshot, SpriteView};
pub use state::{GameEvent, GameMode, GameState, RngState};
pub use tick::{TickInput, tick};
