//! Show configuration.

use glam::DVec2;

/// Tunables for a [`FireworkShow`](crate::show::FireworkShow).
///
/// The defaults give the stock show. Use method chaining to override:
///
/// ```
/// use skyburst::config::ShowConfig;
/// use skyburst::DVec2;
///
/// let config = ShowConfig::new()
///     .with_gravity(DVec2::new(0.0, 0.4))
///     .with_spark_count(250)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
pub struct ShowConfig {
    /// Constant downward acceleration applied to every particle each step.
    pub gravity: DVec2,
    /// Sparks spawned per explosion.
    pub spark_count: usize,
    /// Minimum accumulated time, in seconds, before the show steps.
    pub update_rate: f64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl ShowConfig {
    /// The stock show: gravity `(0, 0.2)`, 100 sparks per explosion, a
    /// 120 Hz step gate, entropy seeding.
    pub fn new() -> Self {
        Self {
            gravity: DVec2::new(0.0, 0.2),
            spark_count: 100,
            update_rate: 1.0 / 120.0,
            seed: None,
        }
    }

    /// Set the gravity vector (positive y pulls down the screen).
    pub fn with_gravity(mut self, gravity: DVec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set how many sparks each explosion spawns.
    pub fn with_spark_count(mut self, count: usize) -> Self {
        self.spark_count = count;
        self
    }

    /// Set the minimum accumulated time before the show steps.
    pub fn with_update_rate(mut self, seconds: f64) -> Self {
        self.update_rate = seconds;
        self
    }

    /// Seed the show's RNG for a deterministic run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}
