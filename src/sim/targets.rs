//! Level targets and hit evaluation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::trajectory::Trajectory;
use crate::consts::MAX_LEVEL;

/// A circular target in physics space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Center (m)
    pub pos: Vec2,
    /// Nominal radius (m)
    pub radius: f32,
}

/// Fixed catalog, one entry per level, progressively farther and higher
const TARGETS: [Target; MAX_LEVEL as usize] = [
    Target {
        pos: Vec2::new(62.5, 17.5),
        radius: 5.0,
    },
    Target {
        pos: Vec2::new(100.0, 37.5),
        radius: 4.5,
    },
    Target {
        pos: Vec2::new(137.5, 50.0),
        radius: 4.0,
    },
];

/// Look up the target for a level.
///
/// Total: out-of-range levels clamp to the highest defined entry.
pub fn target_for_level(level: u8) -> Target {
    let idx = level.max(1).min(MAX_LEVEL) as usize - 1;
    TARGETS[idx]
}

/// Swept-path hit test.
///
/// Walks every sample of the trajectory, not just the impact point: an
/// arc can pass through an elevated target's hitbox mid-flight even
/// though it lands far away, and testing only the final point would call
/// that a miss. Short-circuits on the first sample inside
/// `radius + margin`.
pub fn evaluate(trajectory: &Trajectory, target: &Target, margin: f32) -> bool {
    let hit_radius = target.radius + margin;
    trajectory
        .samples
        .iter()
        .any(|sample| sample.pos.distance(target.pos) < hit_radius)
}
