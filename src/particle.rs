//! The point masses a firework is made of.
//!
//! Two behaviors share one struct, selected by [`ParticleKind`]:
//!
//! | Kind | Launch velocity | Per-update extras | Ends when |
//! |------|-----------------|-------------------|-----------|
//! | [`ParticleKind::Rocket`] | straight up, speed 100-149 | none | owning firework explodes |
//! | [`ParticleKind::Spark`] | random direction, heavy-tailed speed | velocity damping, life decay | life span reaches zero |
//!
//! Integration is intentionally simple: forces accumulate into
//! `acceleration`, `update` folds them into `velocity`, and the position
//! step uses a fixed scale rather than the frame delta. The delta only
//! drives spark life decay.

use glam::DVec2;

use crate::spawn::SpawnContext;

/// Velocity retained by a spark each update.
pub const SPARK_DAMPING: f64 = 0.95;

/// Fixed position integration scale, independent of the frame delta.
pub const POSITION_SCALE: f64 = 0.01;

/// Life spans at or below this count as expired.
///
/// The decay clamp (`max(0.0)`) means zero is reached exactly in practice;
/// the tolerance keeps termination robust if the numeric path ever changes.
pub const LIFE_EPSILON: f64 = 1e-9;

/// Distinguishes the rising shell from explosion debris.
///
/// The tag is all the behavior branches need; particles hold no reference
/// to their owning firework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// The rising particle representing a firework shell before explosion.
    Rocket,
    /// One of the particles created at explosion, representing visible debris.
    Spark,
}

/// A point mass with position, velocity, accumulated acceleration, and a
/// life span in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in surface pixels (y grows downward).
    pub position: DVec2,
    /// Velocity in pixels per position step.
    pub velocity: DVec2,
    /// Force accumulator, cleared by every `update`.
    pub acceleration: DVec2,
    /// Remaining life fraction. Stays at 1.0 for rockets.
    pub life_span: f64,
    /// Behavior selector.
    pub kind: ParticleKind,
}

impl Particle {
    /// Create a rocket at `position`, launched straight up with a random
    /// speed in `[100, 149]` (negative y is up in screen space).
    pub fn rocket(position: DVec2, spawn: &mut SpawnContext) -> Self {
        Self {
            position,
            velocity: spawn.rocket_velocity(),
            acceleration: DVec2::ZERO,
            life_span: 1.0,
            kind: ParticleKind::Rocket,
        }
    }

    /// Create a spark at `position` with a random direction and a speed
    /// drawn as the product of two independent draws.
    ///
    /// The product gives a markedly heavy-tailed speed distribution, which
    /// is what makes the explosions look the way they do. Do not replace it
    /// with a single draw.
    pub fn spark(position: DVec2, spawn: &mut SpawnContext) -> Self {
        Self {
            position,
            velocity: spawn.spark_velocity(),
            acceleration: DVec2::ZERO,
            life_span: 1.0,
            kind: ParticleKind::Spark,
        }
    }

    /// Accumulate a force. Applied and cleared by the next [`update`].
    ///
    /// [`update`]: Particle::update
    pub fn apply_force(&mut self, force: DVec2) {
        self.acceleration += force;
    }

    /// Advance one step.
    ///
    /// Sparks damp their velocity and burn `dt` off their life span
    /// (clamped at zero). Both kinds then integrate: acceleration into
    /// velocity, velocity into position at the fixed scale, and the force
    /// accumulator resets.
    pub fn update(&mut self, dt: f64) {
        if self.kind == ParticleKind::Spark {
            self.velocity *= SPARK_DAMPING;
            self.life_span = (self.life_span - dt).max(0.0);
        }

        self.velocity += self.acceleration;
        self.position += self.velocity * POSITION_SCALE;

        self.acceleration = DVec2::ZERO;
    }

    /// Whether the life span has expired.
    ///
    /// Rockets never decay, so this is always false for them; their end is
    /// decided by the owning firework's apex check.
    pub fn is_finished(&self) -> bool {
        self.life_span <= LIFE_EPSILON
    }

    /// Rendered opacity: the remaining life fraction.
    ///
    /// Rockets stay fully opaque.
    pub fn alpha(&self) -> f64 {
        self.life_span
    }
}
