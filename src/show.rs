//! The show: a growing and shrinking collection of fireworks.
//!
//! The host calls [`FireworkShow::update`] once per rendered frame with the
//! frame delta. Elapsed time accumulates until it crosses the configured
//! gate, then the show performs one simulation step: advance every
//! firework with the accumulated time, retire the finished ones, and
//! launch one new firework from a random spot along the bottom edge.
//! Stepping is therefore capped at the configured rate no matter how fast
//! the host renders.

use glam::DVec2;

use crate::config::ShowConfig;
use crate::firework::Firework;
use crate::particle::Particle;
use crate::spawn::SpawnContext;

/// Pixels above the bottom edge where rockets launch.
const LAUNCH_MARGIN: f64 = 2.0;

/// Owns every active [`Firework`] and drives their lifecycle.
pub struct FireworkShow {
    fireworks: Vec<Firework>,
    width: u32,
    height: u32,
    accumulated: f64,
    config: ShowConfig,
    spawn: SpawnContext,
}

impl FireworkShow {
    /// Create an empty show over a render surface of `width` by `height`
    /// pixels.
    pub fn new(width: u32, height: u32, config: ShowConfig) -> Self {
        let spawn = match config.seed {
            Some(seed) => SpawnContext::from_seed(seed),
            None => SpawnContext::new(),
        };

        Self {
            fireworks: Vec::new(),
            width,
            height,
            accumulated: 0.0,
            config,
            spawn,
        }
    }

    /// Accumulate frame time and step the simulation once the gate is
    /// crossed.
    ///
    /// A step advances every firework with the *accumulated* time (not the
    /// raw frame delta), retires finished fireworks, launches exactly one
    /// new firework, and resets the accumulator.
    pub fn update(&mut self, dt: f64) {
        self.accumulated += dt;
        if self.accumulated <= self.config.update_rate {
            return;
        }

        let step = self.accumulated;
        for firework in &mut self.fireworks {
            firework.update(step, &self.config, &mut self.spawn);
        }
        self.fireworks.retain(|firework| !firework.is_finished());

        let position = DVec2::new(
            self.spawn.spawn_x(self.width),
            self.height as f64 - LAUNCH_MARGIN,
        );
        self.fireworks.push(Firework::new(position, &mut self.spawn));

        self.accumulated = 0.0;
    }

    /// Every particle a renderer should draw this frame.
    pub fn visible_particles(&self) -> impl Iterator<Item = &Particle> {
        self.fireworks.iter().flat_map(Firework::visible_particles)
    }

    /// Track a render-surface size change. Affects where new fireworks
    /// launch; active ones keep flying.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Drop every firework. Safe to call any number of times.
    pub fn clear(&mut self) {
        self.fireworks.clear();
    }

    /// Number of active fireworks.
    pub fn len(&self) -> usize {
        self.fireworks.len()
    }

    /// Whether no fireworks are active.
    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }

    /// Number of particles a renderer would draw this frame.
    pub fn particle_count(&self) -> usize {
        self.visible_particles().count()
    }

    /// The active fireworks, oldest first.
    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_show() -> FireworkShow {
        FireworkShow::new(1280, 720, ShowConfig::new().with_seed(21))
    }

    #[test]
    fn starts_empty() {
        let show = seeded_show();
        assert!(show.is_empty());
        assert_eq!(show.particle_count(), 0);
    }

    #[test]
    fn below_gate_accumulates_without_stepping() {
        let mut show = seeded_show();
        show.update(1.0 / 500.0);
        assert!(show.is_empty());

        // Accumulated time crosses the gate on a later call.
        show.update(1.0 / 500.0);
        show.update(1.0 / 500.0);
        show.update(1.0 / 500.0);
        show.update(1.0 / 500.0);
        assert_eq!(show.len(), 1);
    }

    #[test]
    fn first_step_launches_one_firework_at_bottom_edge() {
        let mut show = seeded_show();
        show.update(0.016);

        assert_eq!(show.len(), 1);
        let rocket = show.fireworks()[0].rocket();
        assert!(rocket.position.x >= 0.0 && rocket.position.x < 1280.0);
        assert_eq!(rocket.position.y, 718.0);
    }

    #[test]
    fn each_step_launches_exactly_one() {
        let mut show = seeded_show();
        for expected in 1..=20 {
            show.update(0.016);
            assert_eq!(show.len(), expected);
        }
    }

    #[test]
    fn fireworks_eventually_retire() {
        let mut show = seeded_show();
        let steps = 1200;
        for _ in 0..steps {
            show.update(0.016);
        }

        // Early fireworks (apex after at most ~750 steps, sparks gone ~63
        // steps later) must have been retired by now.
        assert!(show.len() < steps);
        assert!(show.fireworks().iter().all(|f| !f.is_finished()));
    }

    #[test]
    fn resize_moves_launch_edge() {
        let mut show = FireworkShow::new(1280, 720, ShowConfig::new().with_seed(3));
        show.resize(100, 200);
        show.update(0.016);

        let rocket = show.fireworks()[0].rocket();
        assert!(rocket.position.x >= 0.0 && rocket.position.x < 100.0);
        assert_eq!(rocket.position.y, 198.0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut show = seeded_show();
        for _ in 0..10 {
            show.update(0.016);
        }
        assert!(!show.is_empty());

        show.clear();
        assert!(show.is_empty());
        show.clear();
        assert!(show.is_empty());

        // The show keeps working after a clear.
        show.update(0.016);
        assert_eq!(show.len(), 1);
    }

    #[test]
    fn seeded_shows_replay_identically() {
        let mut a = FireworkShow::new(800, 600, ShowConfig::new().with_seed(77));
        let mut b = FireworkShow::new(800, 600, ShowConfig::new().with_seed(77));

        for _ in 0..800 {
            a.update(0.016);
            b.update(0.016);
        }

        assert_eq!(a.len(), b.len());
        let pairs = a.visible_particles().zip(b.visible_particles());
        for (pa, pb) in pairs {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
            assert_eq!(pa.life_span, pb.life_span);
        }
    }

    #[test]
    fn visible_particles_counts_rockets_and_sparks() {
        let mut show = seeded_show();
        show.update(0.016);
        assert_eq!(show.particle_count(), 1);

        // Run until at least one firework has exploded; visible count then
        // includes spark volleys instead of those rockets.
        for _ in 0..800 {
            show.update(0.016);
        }
        let exploded = show.fireworks().iter().filter(|f| f.exploded()).count();
        let rising = show.len() - exploded;
        let sparks: usize = show.fireworks().iter().map(|f| f.sparks().len()).sum();
        assert!(exploded > 0);
        assert_eq!(show.particle_count(), rising + sparks);
    }
}
