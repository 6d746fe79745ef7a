//! Perspective projection from trench space into screen space
//!
//! Trench space is `(x, y, z)`: lateral/vertical offsets in the play plane
//! plus a signed depth. Depth shrinks points toward the view center; the
//! same scale factor sizes hitboxes, so drawing and collision must both go
//! through here and nowhere else.

use glam::{Vec2, Vec3};

use crate::consts::*;

/// A trench-space point mapped onto the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub screen: Vec2,
    /// Perspective shrink factor; 1.0 at depth 0, toward 0 far away
    pub scale: f32,
}

/// True when a depth sits at or behind the camera plane, where the scale
/// formula diverges. Such points are never projected, drawn, or collided.
#[inline]
pub fn behind_camera(depth: f32) -> bool {
    depth <= NEAR_PLANE_DEPTH
}

/// Project a trench-space point. Returns `None` behind the camera.
pub fn project(point: Vec3) -> Option<Projection> {
    if behind_camera(point.z) {
        return None;
    }
    let scale = 1.0 / (point.z * PERSPECTIVE_K + 1.0);
    let screen = VIEW_CENTER + (point.truncate() - VIEW_CENTER) * scale;
    Some(Projection { screen, scale })
}

/// Visibility test: inside the viewport expanded by the prune margin
pub fn on_screen(screen: Vec2) -> bool {
    screen.x >= -OFFSCREEN_MARGIN
        && screen.x <= VIEW_WIDTH + OFFSCREEN_MARGIN
        && screen.y >= -OFFSCREEN_MARGIN
        && screen.y <= VIEW_HEIGHT + OFFSCREEN_MARGIN
}

/// Combined prune test for a trench-space position
pub fn visible(point: Vec3) -> bool {
    match project(point) {
        Some(p) => on_screen(p.screen),
        None => false,
    }
}
