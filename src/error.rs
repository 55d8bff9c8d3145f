use std::fmt;

/// Rejected world configuration.
///
/// Raised only while building a [`crate::sim::GameState`]; nothing at
/// runtime returns it.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NoPlatforms,
    NoFloorTiles,
    EmptyRect { index: usize, width: f32, height: f32 },
    RectOutOfWorld { index: usize },
    PlatformTooNarrow { index: usize, width: f32, min: f32 },
    NonPositive { field: &'static str, value: f32 },
    JumpNotUpward { value: f32 },
    NoEnemies,
    ZeroFadeStep,
    GroundCoinOutOfWorld { x: f32 },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlatforms => write!(f, "layout has no platforms"),
            Self::NoFloorTiles => write!(f, "layout has no floor tiles"),
            Self::EmptyRect {
                index,
                width,
                height,
            } => write!(f, "rect {index} has empty size {width}x{height}"),
            Self::RectOutOfWorld { index } => write!(f, "rect {index} lies outside the world"),
            Self::PlatformTooNarrow { index, width, min } => write!(
                f,
                "platform {index} is {width} px wide, enemies need at least {min}"
            ),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::JumpNotUpward { value } => {
                write!(f, "jump_power must be negative (upward), got {value}")
            }
            Self::NoEnemies => write!(f, "enemy_count must be at least 1"),
            Self::ZeroFadeStep => write!(f, "fade_step must be non-zero"),
            Self::GroundCoinOutOfWorld { x } => write!(f, "ground coin x={x} is outside the world"),
            Self::Parse(msg) => write!(f, "invalid config json: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
