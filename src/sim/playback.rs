//! Trajectory playback and particle effects
//!
//! Advances a cursor through a solved trajectory on the visual cadence
//! and keeps a transient pool of spark particles alive around the moving
//! projectile. Pure bookkeeping over the sample sequence; drawing is a
//! read-only consumer.

use glam::{Vec2, vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::trajectory::{Trajectory, TrajectorySample};
use crate::projection::ScreenProjection;
use crate::tuning::Tuning;

/// One spark, in screen space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Position (px, y-down)
    pub pos: Vec2,
    /// Velocity (px per tick)
    pub vel: Vec2,
    /// Remaining life in (0, 1]
    pub life: f32,
    /// Life drained per tick
    pub decay: f32,
    /// Base color, hsla with embedded alpha
    pub color: String,
}

impl Particle {
    /// Color with the alpha channel faded by remaining life, ready to draw
    pub fn display_color(&self) -> String {
        match self.color.rsplit_once(',') {
            Some((head, _)) => format!("{head}, {:.2})", (self.life * 0.8).max(0.0)),
            None => self.color.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PlaybackPhase {
    #[default]
    Idle,
    Running,
}

/// Outcome of one playback tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing in flight
    Idle,
    /// Cursor advanced, flight continues
    Running,
    /// Cursor just ran off the end of the path
    Completed,
}

/// Frame-by-frame traversal of a trajectory's samples
///
/// Ephemeral per run: `start` rebuilds the cursor, the particle pool,
/// and the RNG stream; nothing survives a stop or reset.
#[derive(Debug)]
pub struct Playback {
    phase: PlaybackPhase,
    /// Next sample index to show, in [0, samples.len()]
    cursor: usize,
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            cursor: 0,
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(0),
        }
    }
}

impl Playback {
    pub fn is_running(&self) -> bool {
        self.phase == PlaybackPhase::Running
    }

    /// Begin a run. Accepted only while idle with a non-empty path;
    /// returns whether the run started.
    pub fn start(&mut self, trajectory: &Trajectory, seed: u64) -> bool {
        if self.is_running() || trajectory.samples.is_empty() {
            return false;
        }
        self.phase = PlaybackPhase::Running;
        self.cursor = 0;
        self.particles.clear();
        self.rng = Pcg32::seed_from_u64(seed);
        log::debug!(
            "playback started: {} samples, seed {seed}",
            trajectory.samples.len()
        );
        true
    }

    /// Cancel the run, discarding cursor and particles eagerly.
    pub fn stop(&mut self) {
        self.phase = PlaybackPhase::Idle;
        self.cursor = 0;
        self.particles.clear();
    }

    /// The sample under the cursor, if a run is showing one.
    pub fn current_sample<'t>(&self, trajectory: &'t Trajectory) -> Option<&'t TrajectorySample> {
        if self.is_running() {
            trajectory.samples.get(self.cursor)
        } else {
            None
        }
    }

    /// Live particles for the drawing layer.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one visual tick.
    ///
    /// Particles integrate every tick, running or not, so a burst left
    /// behind by a finished flight decays away on its own. The cursor
    /// only moves while running; when it runs off the end of the path
    /// the engine returns [`PlaybackStatus::Completed`] exactly once and
    /// drops back to idle.
    pub fn advance(
        &mut self,
        trajectory: Option<&Trajectory>,
        projection: &ScreenProjection,
        tuning: &Tuning,
    ) -> PlaybackStatus {
        self.integrate_particles(tuning);

        if !self.is_running() {
            return PlaybackStatus::Idle;
        }
        let Some(trajectory) = trajectory else {
            // The trajectory vanished under us; treat as a cancel.
            self.stop();
            return PlaybackStatus::Idle;
        };

        if let Some(sample) = trajectory.samples.get(self.cursor) {
            if tuning.particle_cadence > 0 && self.cursor % tuning.particle_cadence == 0 {
                self.spawn_burst(sample, projection, tuning);
            }
        }

        self.cursor += 1;
        if self.cursor >= trajectory.samples.len() {
            // Natural completion keeps the spark pool; only the cursor
            // state is discarded.
            self.phase = PlaybackPhase::Idle;
            self.cursor = 0;
            return PlaybackStatus::Completed;
        }
        PlaybackStatus::Running
    }

    fn spawn_burst(
        &mut self,
        sample: &TrajectorySample,
        projection: &ScreenProjection,
        tuning: &Tuning,
    ) {
        let screen = projection.to_screen(sample.pos);
        let count = self.rng.random_range(tuning.burst_min..=tuning.burst_max);
        for _ in 0..count {
            if self.particles.len() >= tuning.max_particles {
                // Recycle the oldest slot rather than grow without bound.
                self.particles.swap_remove(0);
            }
            let hue = self.rng.random_range(340.0..400.0f32);
            let jitter = vec2(
                self.rng.random_range(-2.0..2.0),
                self.rng.random_range(-2.0..2.0),
            );
            let vel = vec2(
                self.rng.random_range(-2.0..2.0),
                self.rng.random_range(-2.0..0.0),
            );
            self.particles.push(Particle {
                pos: screen + jitter,
                vel,
                life: 1.0,
                decay: self.rng.random_range(0.01..0.03),
                color: format!("hsla({hue:.0}, 100%, 50%, 0.8)"),
            });
        }
    }

    fn integrate_particles(&mut self, tuning: &Tuning) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.pos += p.vel;
            p.vel.y += tuning.particle_gravity;
            p.life -= p.decay;
            if p.life <= 0.0 {
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::trajectory::solve;

    fn fixtures() -> (Trajectory, ScreenProjection, Tuning) {
        (
            solve(50.0, 45.0, 0.0, 9.8),
            ScreenProjection::default(),
            Tuning::default(),
        )
    }

    #[test]
    fn test_start_requires_idle() {
        let (traj, _, _) = fixtures();
        let mut playback = Playback::default();
        assert!(playback.start(&traj, 1));
        assert!(playback.is_running());
        // Second launch request while in flight is refused.
        assert!(!playback.start(&traj, 2));
    }

    #[test]
    fn test_runs_to_completion() {
        let (traj, projection, tuning) = fixtures();
        let mut playback = Playback::default();
        playback.start(&traj, 1);

        let mut steps = 0;
        loop {
            match playback.advance(Some(&traj), &projection, &tuning) {
                PlaybackStatus::Running => steps += 1,
                PlaybackStatus::Completed => break,
                PlaybackStatus::Idle => panic!("went idle without completing"),
            }
            assert!(steps <= traj.samples.len(), "cursor overran the path");
        }
        // One advance per sample, the last one signalling completion.
        assert_eq!(steps + 1, traj.samples.len());
        assert!(!playback.is_running());
    }

    #[test]
    fn test_particles_spawn_on_cadence() {
        let (traj, projection, tuning) = fixtures();
        let mut playback = Playback::default();
        playback.start(&traj, 42);

        // Cursor 0 is on the cadence, so the first advance spawns a burst.
        playback.advance(Some(&traj), &projection, &tuning);
        let burst = playback.particles().len();
        assert!((tuning.burst_min as usize..=tuning.burst_max as usize).contains(&burst));

        // The next two ticks are off-cadence: no new particles beyond decay.
        playback.advance(Some(&traj), &projection, &tuning);
        playback.advance(Some(&traj), &projection, &tuning);
        assert!(playback.particles().len() <= burst);
    }

    #[test]
    fn test_stop_discards_cursor_and_particles() {
        let (traj, projection, tuning) = fixtures();
        let mut playback = Playback::default();
        playback.start(&traj, 3);
        playback.advance(Some(&traj), &projection, &tuning);
        assert!(!playback.particles().is_empty());

        playback.stop();
        assert!(!playback.is_running());
        assert!(playback.particles().is_empty());
        assert!(playback.current_sample(&traj).is_none());
    }

    #[test]
    fn test_particles_decay_while_idle() {
        let (traj, projection, tuning) = fixtures();
        let mut playback = Playback::default();
        playback.start(&traj, 9);
        // Let the run finish, then idle until every spark dies.
        while playback.advance(Some(&traj), &projection, &tuning) != PlaybackStatus::Completed {}
        assert!(!playback.particles().is_empty());
        for _ in 0..200 {
            playback.advance(None, &projection, &tuning);
        }
        assert!(playback.particles().is_empty());
    }

    #[test]
    fn test_pool_respects_capacity() {
        let (traj, projection, mut tuning) = fixtures();
        tuning.max_particles = 8;
        tuning.particle_cadence = 1;
        let mut playback = Playback::default();
        playback.start(&traj, 5);
        for _ in 0..traj.samples.len() {
            playback.advance(Some(&traj), &projection, &tuning);
            assert!(playback.particles().len() <= tuning.max_particles);
        }
    }

    #[test]
    fn test_same_seed_same_sparks() {
        let (traj, projection, tuning) = fixtures();
        let mut a = Playback::default();
        let mut b = Playback::default();
        a.start(&traj, 77);
        b.start(&traj, 77);
        for _ in 0..30 {
            a.advance(Some(&traj), &projection, &tuning);
            b.advance(Some(&traj), &projection, &tuning);
        }
        assert_eq!(a.particles().len(), b.particles().len());
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.color, pb.color);
        }
    }

    #[test]
    fn test_display_color_fades_with_life() {
        let particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 0.5,
            decay: 0.01,
            color: "hsla(350, 100%, 50%, 0.8)".to_string(),
        };
        assert_eq!(particle.display_color(), "hsla(350, 100%, 50%, 0.40)");
    }
}
