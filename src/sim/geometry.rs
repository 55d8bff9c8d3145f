//! Static level geometry
//!
//! The registry of solid rectangles (floor tiles and floating platforms).
//! Built once from a [`LayoutConfig`], never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::error::ConfigError;

/// Serializable level description, rects as `[x, y, width, height]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub floor_tiles: Vec<[f32; 4]>,
    /// Order matters: the door sits on the last platform
    pub platforms: Vec<[f32; 4]>,
    /// Center x of each coin resting on the ground level
    pub ground_coins: Vec<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let tiles = (WIDTH / TILE_SIZE) as usize;
        Self {
            world_width: WIDTH,
            world_height: HEIGHT,
            floor_tiles: (0..tiles)
                .map(|i| [i as f32 * TILE_SIZE, HEIGHT - TILE_SIZE, TILE_SIZE, TILE_SIZE])
                .collect(),
            platforms: vec![
                [200.0, 500.0, 160.0, 32.0],
                [500.0, 420.0, 160.0, 32.0],
                [700.0, 340.0, 160.0, 32.0],
                [350.0, 320.0, 64.0, 32.0],
                [500.0, 260.0, 160.0, 32.0],
                [650.0, 180.0, 160.0, 32.0],
            ],
            ground_coins: vec![100.0, 400.0, 600.0, 900.0, 1150.0],
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated, read-only level geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    world_width: f32,
    world_height: f32,
    floor_tiles: Vec<Rect>,
    platforms: Vec<Rect>,
    ground_coins: Vec<f32>,
}

impl Geometry {
    /// Validate a layout and freeze it into a registry
    pub fn new(layout: &LayoutConfig) -> Result<Self, ConfigError> {
        if !(layout.world_width > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "world_width",
                value: layout.world_width,
            });
        }
        if !(layout.world_height > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "world_height",
                value: layout.world_height,
            });
        }
        if layout.floor_tiles.is_empty() {
            return Err(ConfigError::NoFloorTiles);
        }
        if layout.platforms.is_empty() {
            return Err(ConfigError::NoPlatforms);
        }

        let floor_tiles: Vec<Rect> = layout.floor_tiles.iter().copied().map(Rect::from).collect();
        let platforms: Vec<Rect> = layout.platforms.iter().copied().map(Rect::from).collect();

        // Indices run across the combined registry, floor tiles first
        for (index, rect) in floor_tiles.iter().chain(&platforms).enumerate() {
            if !(rect.width > 0.0 && rect.height > 0.0) {
                return Err(ConfigError::EmptyRect {
                    index,
                    width: rect.width,
                    height: rect.height,
                });
            }
            if rect.left < 0.0
                || rect.right() > layout.world_width
                || rect.top < 0.0
                || rect.bottom() > layout.world_height
            {
                return Err(ConfigError::RectOutOfWorld { index });
            }
        }

        for (index, platform) in platforms.iter().enumerate() {
            if platform.width < ENEMY_SIZE.0 {
                return Err(ConfigError::PlatformTooNarrow {
                    index,
                    width: platform.width,
                    min: ENEMY_SIZE.0,
                });
            }
        }

        for &x in &layout.ground_coins {
            if !(0.0..=layout.world_width).contains(&x) {
                return Err(ConfigError::GroundCoinOutOfWorld { x });
            }
        }

        Ok(Self {
            world_width: layout.world_width,
            world_height: layout.world_height,
            floor_tiles,
            platforms,
            ground_coins: layout.ground_coins.clone(),
        })
    }

    pub fn world_width(&self) -> f32 {
        self.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.world_height
    }

    pub fn floor_tiles(&self) -> &[Rect] {
        &self.floor_tiles
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn ground_coins(&self) -> &[f32] {
        &self.ground_coins
    }

    /// Every solid rect in registry order: floor tiles, then platforms
    pub fn solid_surfaces(&self) -> impl Iterator<Item = &Rect> {
        self.floor_tiles.iter().chain(self.platforms.iter())
    }

    /// Top edge of the ground level (highest floor tile top)
    pub fn floor_top(&self) -> f32 {
        self.floor_tiles
            .iter()
            .map(|t| t.top)
            .fold(f32::INFINITY, f32::min)
    }

    /// The whole floor as a single world-wide strip, used as the home of
    /// ground enemies
    pub fn ground_strip(&self) -> Rect {
        let top = self.floor_top();
        let height = self
            .floor_tiles
            .iter()
            .filter(|t| t.top == top)
            .map(|t| t.height)
            .fold(0.0, f32::max);
        Rect::new(0.0, top, self.world_width, height)
    }

    /// Platform the door stands on
    pub fn door_platform(&self) -> &Rect {
        // Non-empty, checked in `new`
        &self.platforms[self.platforms.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let geo = Geometry::new(&LayoutConfig::default()).unwrap();
        assert_eq!(geo.floor_tiles().len(), 40);
        assert_eq!(geo.platforms().len(), 6);
        assert_eq!(geo.solid_surfaces().count(), 46);
        assert_eq!(geo.floor_top(), HEIGHT - 32.0);
        assert_eq!(geo.ground_strip(), Rect::new(0.0, 608.0, 1280.0, 32.0));
        assert_eq!(*geo.door_platform(), Rect::new(650.0, 180.0, 160.0, 32.0));
    }

    #[test]
    fn test_registry_order_floor_first() {
        let geo = Geometry::new(&LayoutConfig::default()).unwrap();
        let first = geo.solid_surfaces().next().unwrap();
        let last = geo.solid_surfaces().last().unwrap();
        assert_eq!(*first, Rect::new(0.0, 608.0, 32.0, 32.0));
        assert_eq!(last, geo.door_platform());
    }

    #[test]
    fn test_empty_platforms_rejected() {
        let layout = LayoutConfig {
            platforms: Vec::new(),
            ..Default::default()
        };
        assert_eq!(Geometry::new(&layout).unwrap_err(), ConfigError::NoPlatforms);
    }

    #[test]
    fn test_empty_floor_rejected() {
        let layout = LayoutConfig {
            floor_tiles: Vec::new(),
            ..Default::default()
        };
        assert_eq!(Geometry::new(&layout).unwrap_err(), ConfigError::NoFloorTiles);
    }

    #[test]
    fn test_negative_size_rejected() {
        let layout = LayoutConfig {
            platforms: vec![[100.0, 300.0, -50.0, 32.0]],
            ..Default::default()
        };
        assert!(matches!(
            Geometry::new(&layout),
            Err(ConfigError::EmptyRect { index: 40, .. })
        ));
    }

    #[test]
    fn test_out_of_world_rejected() {
        let layout = LayoutConfig {
            platforms: vec![[1200.0, 300.0, 160.0, 32.0]],
            ..Default::default()
        };
        assert_eq!(
            Geometry::new(&layout).unwrap_err(),
            ConfigError::RectOutOfWorld { index: 40 }
        );
    }

    #[test]
    fn test_narrow_platform_rejected() {
        let layout = LayoutConfig {
            platforms: vec![[100.0, 300.0, 16.0, 32.0]],
            ..Default::default()
        };
        assert!(matches!(
            Geometry::new(&layout),
            Err(ConfigError::PlatformTooNarrow { index: 0, .. })
        ));
    }

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "floor_tiles": [[0, 608, 1280, 32]],
            "platforms": [[200, 500, 160, 32]],
            "ground_coins": [640]
        }"#;
        let layout = LayoutConfig::from_json(json).unwrap();
        let geo = Geometry::new(&layout).unwrap();
        assert_eq!(geo.world_width(), WIDTH);
        assert_eq!(geo.ground_strip(), Rect::new(0.0, 608.0, 1280.0, 32.0));
        assert_eq!(geo.ground_coins(), &[640.0]);
    }
}
