//! Axis-aligned rectangles
//!
//! Screen coordinates: x grows right, y grows down. A rect is stored as its
//! top-left corner plus size; every other edge is derived.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rect of the given size centered on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn centerx(&self) -> f32 {
        self.left + self.width / 2.0
    }

    #[inline]
    pub fn centery(&self) -> f32 {
        self.top + self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.centerx(), self.centery())
    }

    pub fn set_left(&mut self, left: f32) {
        self.left = left;
    }

    /// Move so the right edge lands on `right` (size unchanged)
    pub fn set_right(&mut self, right: f32) {
        self.left = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    /// Move so the bottom edge lands on `bottom` (size unchanged)
    pub fn set_bottom(&mut self, bottom: f32) {
        self.top = bottom - self.height;
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.left = center.x - self.width / 2.0;
        self.top = center.y - self.height / 2.0;
    }

    pub fn set_centery(&mut self, centery: f32) {
        self.top = centery - self.height / 2.0;
    }

    /// Strict overlap test: rects that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    /// True if `x` lies within the closed horizontal span [left, right]
    pub fn spans_x(&self, x: f32) -> bool {
        self.left <= x && x <= self.right()
    }
}

impl From<[f32; 4]> for Rect {
    fn from([left, top, width, height]: [f32; 4]) -> Self {
        Self::new(left, top, width, height)
    }
}

impl From<(f32, f32, f32, f32)> for Rect {
    fn from((left, top, width, height): (f32, f32, f32, f32)) -> Self {
        Self::new(left, top, width, height)
    }
}
