//! A single firework: one rocket that explodes into sparks.
//!
//! The lifecycle is a one-way state machine. A firework starts rising,
//! explodes exactly once when its rocket stops climbing, and becomes
//! removable once every spark has burned out. Particles are exclusively
//! owned here; dropping the firework frees them.

use glam::DVec2;

use crate::config::ShowConfig;
use crate::particle::Particle;
use crate::spawn::SpawnContext;

/// One rocket and, after explosion, its sparks.
#[derive(Debug)]
pub struct Firework {
    rocket: Particle,
    sparks: Vec<Particle>,
    exploded: bool,
}

impl Firework {
    /// Launch a firework from `position`.
    pub fn new(position: DVec2, spawn: &mut SpawnContext) -> Self {
        Self {
            rocket: Particle::rocket(position, spawn),
            sparks: Vec::new(),
            exploded: false,
        }
    }

    /// Advance one step.
    ///
    /// While rising, gravity acts on the rocket; the moment its vertical
    /// velocity is no longer negative (apex reached), the firework explodes.
    /// Sparks are then advanced in the same call, so they start moving in
    /// the very step that spawned them.
    pub fn update(&mut self, dt: f64, config: &ShowConfig, spawn: &mut SpawnContext) {
        if !self.exploded {
            self.rocket.apply_force(config.gravity);
            self.rocket.update(dt);

            if self.rocket.velocity.y >= 0.0 {
                self.exploded = true;
                self.explode(config.spark_count, spawn);
            }
        }

        for spark in &mut self.sparks {
            spark.apply_force(config.gravity);
            spark.update(dt);
        }
    }

    /// Burst into `count` sparks at the rocket's current position.
    ///
    /// The rocket itself is kept (it still marks the burst origin) but is
    /// no longer rendered.
    fn explode(&mut self, count: usize, spawn: &mut SpawnContext) {
        self.sparks.reserve(count);
        for _ in 0..count {
            self.sparks.push(Particle::spark(self.rocket.position, spawn));
        }
    }

    /// Whether the show may retire this firework.
    ///
    /// False while no sparks exist (covers the rising state), true once
    /// every spark has burned out.
    pub fn is_finished(&self) -> bool {
        if self.sparks.is_empty() {
            return false;
        }
        self.sparks.iter().all(Particle::is_finished)
    }

    /// Whether the rocket has burst.
    pub fn exploded(&self) -> bool {
        self.exploded
    }

    /// The rocket particle.
    pub fn rocket(&self) -> &Particle {
        &self.rocket
    }

    /// The spark particles. Empty until the firework explodes.
    pub fn sparks(&self) -> &[Particle] {
        &self.sparks
    }

    /// The particles a renderer should draw: the rocket only while rising,
    /// then every spark.
    pub fn visible_particles(&self) -> impl Iterator<Item = &Particle> {
        let rocket = (!self.exploded).then_some(&self.rocket);
        rocket.into_iter().chain(self.sparks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleKind;

    fn fixture() -> (ShowConfig, SpawnContext) {
        (ShowConfig::new(), SpawnContext::from_seed(11))
    }

    /// Step until the rocket bursts, returning the step count.
    fn steps_to_explosion(firework: &mut Firework, config: &ShowConfig, spawn: &mut SpawnContext) -> usize {
        let mut steps = 0;
        while !firework.exploded() {
            firework.update(0.016, config, spawn);
            steps += 1;
            assert!(steps < 1000, "rocket never reached apex");
        }
        steps
    }

    #[test]
    fn fresh_firework_is_not_finished() {
        let (_, mut spawn) = fixture();
        let firework = Firework::new(DVec2::new(100.0, 500.0), &mut spawn);
        assert!(!firework.is_finished());
        assert!(!firework.exploded());
        assert!(firework.sparks().is_empty());
    }

    #[test]
    fn explodes_at_apex_within_expected_steps() {
        let (config, mut spawn) = fixture();
        let mut firework = Firework::new(DVec2::new(100.0, 500.0), &mut spawn);

        let steps = steps_to_explosion(&mut firework, &config, &mut spawn);

        // Initial upward speed is 100..=149 and gravity adds 0.2 per step,
        // so apex arrives after roughly 500..=750 steps.
        assert!(steps >= 500 && steps <= 750, "apex after {steps} steps");
        assert!(firework.rocket().velocity.y >= 0.0);
    }

    #[test]
    fn explosion_spawns_full_spark_volley() {
        let (config, mut spawn) = fixture();
        let mut firework = Firework::new(DVec2::new(100.0, 500.0), &mut spawn);
        steps_to_explosion(&mut firework, &config, &mut spawn);

        assert_eq!(firework.sparks().len(), 100);
        for spark in firework.sparks() {
            assert_eq!(spark.kind, ParticleKind::Spark);
            // Sparks were advanced once in the explosion step.
            assert!((spark.life_span - (1.0 - 0.016)).abs() < 1e-9);
        }
    }

    #[test]
    fn explodes_only_once() {
        let (config, mut spawn) = fixture();
        let mut firework = Firework::new(DVec2::new(100.0, 500.0), &mut spawn);
        steps_to_explosion(&mut firework, &config, &mut spawn);

        let spark_count = firework.sparks().len();
        for _ in 0..100 {
            firework.update(0.016, &config, &mut spawn);
            assert!(firework.exploded());
            assert_eq!(firework.sparks().len(), spark_count);
        }
    }

    #[test]
    fn finishes_only_after_all_sparks_burn_out() {
        let (config, mut spawn) = fixture();
        let mut firework = Firework::new(DVec2::new(100.0, 500.0), &mut spawn);
        steps_to_explosion(&mut firework, &config, &mut spawn);

        // Life 1.0 burns off at 0.016 per step, minus the one update the
        // sparks already received.
        let mut steps = 0;
        while !firework.is_finished() {
            firework.update(0.016, &config, &mut spawn);
            steps += 1;
            assert!(steps < 100, "sparks never burned out");
        }
        assert!(steps >= 60);
        assert!(firework.sparks().iter().all(Particle::is_finished));
    }

    #[test]
    fn rocket_hidden_after_explosion() {
        let (config, mut spawn) = fixture();
        let mut firework = Firework::new(DVec2::new(100.0, 500.0), &mut spawn);

        assert_eq!(firework.visible_particles().count(), 1);

        steps_to_explosion(&mut firework, &config, &mut spawn);
        let visible = firework.visible_particles().count();
        assert_eq!(visible, firework.sparks().len());
        assert!(firework
            .visible_particles()
            .all(|p| p.kind == ParticleKind::Spark));
    }

    #[test]
    fn sparks_share_burst_origin() {
        let (config, mut spawn) = fixture();
        let mut firework = Firework::new(DVec2::new(320.0, 700.0), &mut spawn);
        steps_to_explosion(&mut firework, &config, &mut spawn);

        // One step of drift from the origin at the fixed integration scale.
        let origin = firework.rocket().position;
        for spark in firework.sparks() {
            let drift = (spark.position - origin).length();
            assert!(drift <= 5.9 * 49.0 * 0.01 + 1e-9);
        }
    }
}
