//! Collision detection and response against static geometry
//!
//! Axis-separated resolution: move along x and push out of side hits, then
//! move along y and land or bump heads against the corrected position.
//! Merging the two passes breaks landings on a platform edge while moving
//! sideways into it.

use glam::Vec2;

use super::geometry::Geometry;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Outcome of the vertical pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalHit {
    None,
    /// Falling body snapped onto a surface top
    Landed,
    /// Rising body snapped under a surface bottom
    HeadBump,
}

/// Integrate one tick of motion for a gravity-affected body.
///
/// Returns whether the body ended the tick grounded. The flag comes only
/// from this tick's vertical pass; callers must not carry the previous value.
pub fn step_body(rect: &mut Rect, vel: &mut Vec2, geometry: &Geometry, tuning: &Tuning) -> bool {
    vel.y += tuning.gravity;

    rect.left += vel.x;
    resolve_horizontal(rect, vel.x, geometry.solid_surfaces(), tuning.side_hit_threshold);

    rect.top += vel.y;
    let hit = resolve_vertical(
        rect,
        &mut vel.y,
        geometry.solid_surfaces(),
        tuning.landing_tolerance,
    );

    clamp_to_world(rect, geometry.world_width());

    hit == VerticalHit::Landed
}

/// Push `rect` out of the first surface it hits from the side.
///
/// An overlap whose vertical penetration (`|rect.bottom - surface.top|`) is
/// within `side_hit_threshold` is a near-landing and left for the vertical
/// pass. Returns true if a correction was applied. Never touches velocity.
pub fn resolve_horizontal<'a>(
    rect: &mut Rect,
    vx: f32,
    surfaces: impl IntoIterator<Item = &'a Rect>,
    side_hit_threshold: f32,
) -> bool {
    for surface in surfaces {
        if !rect.overlaps(surface) || (rect.bottom() - surface.top).abs() <= side_hit_threshold {
            continue;
        }
        if vx > 0.0 {
            rect.set_right(surface.left);
            return true;
        } else if vx < 0.0 {
            rect.set_left(surface.right());
            return true;
        }
    }
    false
}

/// Land on or bump under the first applicable overlapping surface.
///
/// Falling bodies only land if their bottom is at most `landing_tolerance`
/// below the surface top; deeper overlaps fall through. Zeroes `vy` on any
/// hit and never touches horizontal position.
pub fn resolve_vertical<'a>(
    rect: &mut Rect,
    vy: &mut f32,
    surfaces: impl IntoIterator<Item = &'a Rect>,
    landing_tolerance: f32,
) -> VerticalHit {
    for surface in surfaces {
        if !rect.overlaps(surface) {
            continue;
        }
        if *vy > 0.0 && rect.bottom() <= surface.top + landing_tolerance {
            rect.set_bottom(surface.top);
            *vy = 0.0;
            return VerticalHit::Landed;
        } else if *vy < 0.0 {
            rect.set_top(surface.bottom());
            *vy = 0.0;
            return VerticalHit::HeadBump;
        }
    }
    VerticalHit::None
}

/// Keep `rect` inside [0, world_width] horizontally. No vertical clamp.
pub fn clamp_to_world(rect: &mut Rect, world_width: f32) {
    if rect.left < 0.0 {
        rect.set_left(0.0);
    }
    if rect.right() > world_width {
        rect.set_right(world_width);
    }
}
