//! Context-scoped randomness for spawning.
//!
//! All random draws the simulation makes go through a [`SpawnContext`] so a
//! show can be seeded once and replayed deterministically. The draws are
//! quantized to integer steps (whole degrees, hundredths) rather than
//! continuous distributions; the quantization is part of the look.

use glam::DVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random-draw context owned by a show.
///
/// Wraps a [`SmallRng`] seeded once at construction. Every helper mirrors
/// one draw the simulation needs; nothing else in the crate touches the RNG
/// directly.
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a context with a fixed seed, for deterministic runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Vector with each component quantized to hundredths, roughly in
    /// `[-0.5, 0.5)`.
    pub fn random_unit(&mut self) -> DVec2 {
        DVec2::new(
            (self.rng.gen_range(0..100) - 50) as f64 * 0.01,
            (self.rng.gen_range(0..100) - 50) as f64 * 0.01,
        )
    }

    /// Unit vector at a whole-degree angle in `{0, .., 359}`.
    pub fn random_direction(&mut self) -> DVec2 {
        let angle = (self.rng.gen_range(0..360) as f64).to_radians();
        DVec2::new(angle.cos(), angle.sin())
    }

    /// Launch velocity for a rocket: straight up, speed in `[100, 149]`.
    ///
    /// Negative y because screen-space y grows downward.
    pub fn rocket_velocity(&mut self) -> DVec2 {
        DVec2::new(0.0, -((self.rng.gen_range(0..50) + 100) as f64))
    }

    /// Launch velocity for a spark.
    ///
    /// A random direction scaled by two independent draws, `[2.0, 5.9]`
    /// times `[0, 49]`. The product distribution is heavy-tailed: most
    /// sparks are slow, a few streak.
    pub fn spark_velocity(&mut self) -> DVec2 {
        let direction = self.random_direction();
        let base = (self.rng.gen_range(0..40) + 20) as f64 * 0.1;
        let scale = self.rng.gen_range(0..50) as f64;
        direction * base * scale
    }

    /// Horizontal launch position along a surface of the given width.
    pub fn spawn_x(&mut self, width: u32) -> f64 {
        if width == 0 {
            return 0.0;
        }
        self.rng.gen_range(0..width) as f64
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_unit_stays_in_half_square() {
        let mut spawn = SpawnContext::from_seed(1);
        for _ in 0..1000 {
            let v = spawn.random_unit();
            assert!(v.x >= -0.5 && v.x < 0.5);
            assert!(v.y >= -0.5 && v.y < 0.5);
        }
    }

    #[test]
    fn random_direction_is_unit_length() {
        let mut spawn = SpawnContext::from_seed(2);
        for _ in 0..1000 {
            let v = spawn.random_direction();
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rocket_velocity_range() {
        let mut spawn = SpawnContext::from_seed(3);
        for _ in 0..1000 {
            let v = spawn.rocket_velocity();
            assert_eq!(v.x, 0.0);
            assert!(v.y >= -149.0 && v.y <= -100.0);
        }
    }

    #[test]
    fn spark_velocity_bounds() {
        let mut spawn = SpawnContext::from_seed(4);
        let max_speed = 5.9 * 49.0;
        for _ in 0..1000 {
            let v = spawn.spark_velocity();
            assert!(v.length() <= max_speed + 1e-9);
        }
    }

    #[test]
    fn spawn_x_within_surface() {
        let mut spawn = SpawnContext::from_seed(5);
        for _ in 0..1000 {
            let x = spawn.spawn_x(1280);
            assert!(x >= 0.0 && x < 1280.0);
            assert_eq!(x.fract(), 0.0);
        }
        assert_eq!(spawn.spawn_x(0), 0.0);
    }

    #[test]
    fn seeded_contexts_repeat() {
        let mut a = SpawnContext::from_seed(42);
        let mut b = SpawnContext::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.spark_velocity(), b.spark_velocity());
            assert_eq!(a.spawn_x(640), b.spawn_x(640));
        }
    }
}
