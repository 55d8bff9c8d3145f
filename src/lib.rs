//! Zombie Escape - a single-screen platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, enemy AI, game mode, fade)
//! - `tuning`: Data-driven physics and AI constants
//! - `audio`: Event-to-sound mapping for an external audio backend
//! - `settings`: Player preferences (music toggle, volumes)

pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World dimensions (pixels)
    pub const WIDTH: f32 = 1280.0;
    pub const HEIGHT: f32 = 640.0;

    /// Tick cadence the tuning values assume
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Side length of one floor tile
    pub const TILE_SIZE: f32 = 32.0;

    /// Downward acceleration applied every tick (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set on jump (negative = up)
    pub const JUMP_POWER: f32 = -12.0;
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const ENEMY_SPEED: f32 = 1.5;
    /// Horizontal center distance under which an enemy starts chasing
    pub const DETECTION_RANGE: f32 = 200.0;

    /// Vertical penetration above which an x-overlap counts as a side hit
    pub const SIDE_HIT_THRESHOLD: f32 = 5.0;
    /// How far below a surface top the player's bottom may sink and still land
    pub const LANDING_TOLERANCE: f32 = 15.0;
    /// Vertical gate for chase detection and elevated same-platform test
    pub const AI_VERTICAL_GATE: f32 = 50.0;
    /// Band above the floor top that counts as "on the ground level"
    pub const GROUND_LEVEL_BAND: f32 = 32.0;

    /// Fade overlay alpha change per tick
    pub const FADE_STEP: u8 = 8;
    /// Enemies drawn on every round reset
    pub const ENEMY_COUNT: usize = 5;
    /// Ticks per animation frame, and frames per cycle
    pub const ANIM_TICKS_PER_FRAME: u32 = 10;
    pub const ANIM_FRAMES: u32 = 4;

    /// Sprite sizes (width, height)
    pub const PLAYER_SIZE: (f32, f32) = (32.0, 64.0);
    pub const ENEMY_SIZE: (f32, f32) = (32.0, 48.0);
    pub const COIN_SIZE: (f32, f32) = (24.0, 24.0);
    pub const DOOR_SIZE: (f32, f32) = (48.0, 64.0);

    /// Player spawn point (sprite center)
    pub const PLAYER_SPAWN: (f32, f32) = (32.0, HEIGHT - 64.0);

    /// Coin center height above the surface it hovers over
    pub const COIN_LIFT: f32 = 16.0;

    /// Floating pickups bob this many pixels around their base height
    pub const FLOAT_AMPLITUDE: f32 = 3.0;
    pub const FLOAT_PHASE_STEP: f32 = 0.1;
    /// Upper bound (inclusive) of the random starting float phase
    pub const FLOAT_PHASE_MAX: u32 = 60;
}
