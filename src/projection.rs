//! Physics-space to screen-space projection
//!
//! One fixed affine transform shared by everything that draws. The same
//! scale and origin must map the trajectory, the particles, and the
//! targets, or the displayed scene drifts away from the geometry the hit
//! test runs on.

use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::consts::{ORIGIN_X_PX, ORIGIN_Y_PX, PIXELS_PER_METER};

/// Affine physics→screen transform: linear scale plus a fixed origin
/// offset, with y flipped (physics is y-up, the screen is y-down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenProjection {
    /// Pixels per meter
    pub pixels_per_meter: f32,
    /// Screen position of the physics origin (px)
    pub origin: Vec2,
}

impl Default for ScreenProjection {
    fn default() -> Self {
        Self {
            pixels_per_meter: PIXELS_PER_METER,
            origin: vec2(ORIGIN_X_PX, ORIGIN_Y_PX),
        }
    }
}

impl ScreenProjection {
    /// Physics meters (y-up) to screen pixels (y-down)
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        vec2(
            self.origin.x + world.x * self.pixels_per_meter,
            self.origin.y - world.y * self.pixels_per_meter,
        )
    }

    /// Screen pixels back to physics meters
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        vec2(
            (screen.x - self.origin.x) / self.pixels_per_meter,
            (self.origin.y - screen.y) / self.pixels_per_meter,
        )
    }
}
