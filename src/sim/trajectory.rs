//! Closed-form trajectory solver
//!
//! Launch parameters in, sampled path plus exact scalar measurements out.
//! The sampled sequence exists purely to drive playback and hit-testing;
//! every reported measurement is derived analytically, so sampling
//! resolution never corrupts the physics readout.

use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::consts::{MIN_SAMPLE_DT, SAMPLE_INTERVALS};

/// Control clamp bounds, applied before anything reaches the solver
pub const MIN_VELOCITY: f32 = 1.0;
pub const MAX_VELOCITY: f32 = 150.0;
pub const MAX_ANGLE_DEG: f32 = 90.0;
pub const MAX_HEIGHT: f32 = 50.0;

/// Gravity environment presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Environment {
    #[default]
    Earth,
    Moon,
    Mars,
    Jupiter,
}

impl Environment {
    /// Gravitational acceleration for this environment (m/s²)
    pub fn gravity(&self) -> f32 {
        match self {
            Environment::Earth => 9.8,
            Environment::Moon => 1.62,
            Environment::Mars => 3.71,
            Environment::Jupiter => 24.79,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Environment::Earth => "Earth",
            Environment::Moon => "Moon",
            Environment::Mars => "Mars",
            Environment::Jupiter => "Jupiter",
        }
    }
}

/// One immutable snapshot of the launch controls
///
/// A new value is produced on every control change, never mutated in
/// place. [`LaunchParams::clamped`] is the entry point for raw control
/// input; the environment and gravity fields stay bound one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchParams {
    /// Initial speed (m/s)
    pub velocity: f32,
    /// Launch angle above horizontal (degrees)
    pub angle_deg: f32,
    /// Launch height (m)
    pub height: f32,
    /// Gravitational acceleration (m/s²)
    pub gravity: f32,
    pub environment: Environment,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            velocity: 50.0,
            angle_deg: 45.0,
            height: 0.0,
            gravity: Environment::Earth.gravity(),
            environment: Environment::Earth,
        }
    }
}

impl LaunchParams {
    /// Clamp raw control input into the legal domain
    pub fn clamped(velocity: f32, angle_deg: f32, height: f32, environment: Environment) -> Self {
        Self {
            velocity: velocity.clamp(MIN_VELOCITY, MAX_VELOCITY),
            angle_deg: angle_deg.clamp(0.0, MAX_ANGLE_DEG),
            height: height.clamp(0.0, MAX_HEIGHT),
            gravity: environment.gravity(),
            environment,
        }
    }

    /// Re-bind the environment, rewriting gravity with it
    pub fn with_environment(self, environment: Environment) -> Self {
        Self {
            environment,
            gravity: environment.gravity(),
            ..self
        }
    }

    /// Solve these controls into a trajectory
    pub fn solve(&self) -> Trajectory {
        solve(self.velocity, self.angle_deg, self.height, self.gravity)
    }
}

/// One (position, time) point along a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Displacement from the launch origin (m); y is height above ground
    pub pos: Vec2,
    /// Elapsed time since launch (s)
    pub t: f32,
}

/// A solved flight: the sampled path plus derived measurements
///
/// Display layers treat this as a read-only snapshot; a fresh value is
/// produced whenever the controls change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Launch-to-impact samples; the last one sits exactly on the ground
    pub samples: Vec<TrajectorySample>,
    /// Peak height (m)
    pub max_height: f32,
    /// Horizontal distance at impact (m)
    pub max_range: f32,
    /// Total flight time (s)
    pub time_of_flight: f32,
    /// Speed magnitude at impact (m/s)
    pub impact_velocity: f32,
    /// Direction of the impact velocity (degrees, negative = descending)
    pub impact_angle: f32,
}

/// Solve a launch into a sampled path and exact measurements.
///
/// Pure and deterministic. Inputs are assumed pre-clamped (see
/// [`LaunchParams::clamped`]); out-of-range values here are a caller bug,
/// not a recoverable condition, and degrade to a zero-duration flight at
/// worst.
pub fn solve(v0: f32, angle_deg: f32, h0: f32, g: f32) -> Trajectory {
    let theta = angle_deg.to_radians();
    let vx = v0 * theta.cos();
    let vy = v0 * theta.sin();

    // Positive root of h0 + vy·t - (g/2)·t² = 0.
    let a = -g / 2.0;
    let b = vy;
    let c = h0;
    let discriminant = b * b - 4.0 * a * c;
    let time_of_flight = if discriminant >= 0.0 {
        (-b - discriminant.sqrt()) / (2.0 * a)
    } else {
        log::debug!("degenerate flight (discriminant {discriminant}), zero-duration trajectory");
        0.0
    };

    let dt = (time_of_flight / SAMPLE_INTERVALS as f32).max(MIN_SAMPLE_DT);
    let mut samples = Vec::with_capacity(SAMPLE_INTERVALS as usize + 2);
    let mut t = 0.0;
    while t <= time_of_flight {
        let y = h0 + vy * t - 0.5 * g * t * t;
        // The last natural step can overshoot past the ground; drop it.
        if y >= 0.0 {
            samples.push(TrajectorySample {
                pos: vec2(vx * t, y),
                t,
            });
        }
        t += dt;
    }

    // A degenerate flight keeps its launch point so the sequence always
    // has a start and an end.
    if samples.is_empty() {
        samples.push(TrajectorySample {
            pos: vec2(0.0, h0.max(0.0)),
            t: 0.0,
        });
    }

    // Exact impact point, appended regardless of where sampling stopped.
    // max_range stays analytic rather than interpolated.
    samples.push(TrajectorySample {
        pos: vec2(vx * time_of_flight, 0.0),
        t: time_of_flight,
    });

    let impact_vy = vy - g * time_of_flight;
    Trajectory {
        samples,
        max_height: (h0 + (vy * vy) / (2.0 * g)).max(0.0),
        max_range: vx * time_of_flight,
        time_of_flight,
        impact_velocity: (vx * vx + impact_vy * impact_vy).sqrt(),
        impact_angle: impact_vy.atan2(vx).to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_flight() {
        // 50 m/s at 45° on Earth, the classic textbook arc.
        let traj = solve(50.0, 45.0, 0.0, 9.8);
        assert!((traj.time_of_flight - 7.2154).abs() < 0.008);
        assert!((traj.max_height - 63.776).abs() < 0.064);
        assert!((traj.max_range - 255.102).abs() < 0.26);
        // Impact mirrors the launch on flat ground.
        assert!((traj.impact_velocity - 50.0).abs() < 0.05);
        assert!((traj.impact_angle - (-45.0)).abs() < 0.05);
    }

    #[test]
    fn test_final_sample_is_exact_impact() {
        let traj = solve(30.0, 60.0, 12.0, 9.8);
        let last = traj.samples.last().unwrap();
        assert_eq!(last.pos.y, 0.0);
        assert_eq!(last.t, traj.time_of_flight);
        assert_eq!(last.pos.x, traj.max_range);
    }

    #[test]
    fn test_time_strictly_increases() {
        let traj = solve(80.0, 35.0, 5.0, 9.8);
        for pair in traj.samples.windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn test_range_symmetry() {
        // θ and 90-θ cover the same ground from ground level.
        let low = solve(40.0, 30.0, 0.0, 9.8);
        let high = solve(40.0, 60.0, 0.0, 9.8);
        assert!((low.max_range - high.max_range).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_flight_below_ground() {
        // Negative height is a caller bug; it must not panic.
        let traj = solve(10.0, 0.0, -5.0, 9.8);
        assert_eq!(traj.time_of_flight, 0.0);
        assert!(traj.samples.len() >= 2);
        assert_eq!(traj.samples.last().unwrap().pos.y, 0.0);
        assert_eq!(traj.max_range, 0.0);
    }

    #[test]
    fn test_environment_gravity_binding() {
        let params = LaunchParams::default().with_environment(Environment::Moon);
        assert_eq!(params.gravity, Environment::Moon.gravity());
        // Lower gravity, longer hang time.
        let moon = params.solve();
        let earth = LaunchParams::default().solve();
        assert!(moon.time_of_flight > earth.time_of_flight);
    }

    #[test]
    fn test_clamped_bounds() {
        let params = LaunchParams::clamped(500.0, -10.0, 99.0, Environment::Mars);
        assert_eq!(params.velocity, MAX_VELOCITY);
        assert_eq!(params.angle_deg, 0.0);
        assert_eq!(params.height, MAX_HEIGHT);
        assert_eq!(params.gravity, Environment::Mars.gravity());
    }

    proptest! {
        #[test]
        fn prop_solver_invariants(
            v0 in 1.0f32..150.0,
            angle in 0.0f32..90.0,
            h0 in 0.0f32..50.0,
            g in 1.62f32..24.79,
        ) {
            let traj = solve(v0, angle, h0, g);
            let vx = v0 * angle.to_radians().cos();
            let last = traj.samples.last().unwrap();

            prop_assert!(traj.samples.len() >= 2);
            prop_assert_eq!(last.pos.y, 0.0);
            prop_assert_eq!(last.t, traj.time_of_flight);
            prop_assert_eq!(last.pos.x, traj.max_range);

            prop_assert!(traj.max_height >= 0.0);
            let height_tol = traj.max_height.max(1.0) * 1e-4 + 1e-3;
            for sample in &traj.samples {
                prop_assert!(sample.pos.y >= 0.0);
                prop_assert!(sample.pos.y <= traj.max_height + height_tol);
                prop_assert!(sample.t <= traj.time_of_flight + 1e-6);
            }

            // Range is vx·tof regardless of how coarsely we sampled.
            let range_tol = traj.max_range.abs().max(1.0) * 1e-3;
            prop_assert!((traj.max_range - vx * traj.time_of_flight).abs() <= range_tol);
        }
    }
}
