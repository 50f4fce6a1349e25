//! # Skyburst
//!
//! A firework show: rockets rise under gravity, explode at apex into a
//! volley of decaying sparks, and the show keeps launching new ones. The
//! simulation runs on the CPU in double precision; a small wgpu renderer
//! draws every particle as a white point whose opacity is its remaining
//! life.
//!
//! ## Quick Start
//!
//! ```no_run
//! use skyburst::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Simulation::new()
//!         .with_title("Fireworks")
//!         .run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Driving the simulation yourself
//!
//! The core is independent of the window host. A [`FireworkShow`] only
//! needs a surface size and per-frame deltas, so it can be stepped headless
//! (tests do exactly this):
//!
//! ```
//! use skyburst::prelude::*;
//!
//! let mut show = FireworkShow::new(1280, 720, ShowConfig::new().with_seed(1));
//! for _ in 0..600 {
//!     show.update(1.0 / 60.0);
//! }
//! assert!(!show.is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! - A [`Particle`] is a point mass; its [`ParticleKind`] picks rocket or
//!   spark behavior.
//! - A [`Firework`] owns one rocket and, after the apex, its sparks.
//! - A [`FireworkShow`] owns the fireworks, gates stepping to a fixed
//!   cadence, launches one new firework per step, and retires burned-out
//!   ones.
//! - A [`SpawnContext`] holds the show's RNG; seed it via
//!   [`ShowConfig::with_seed`] for reproducible runs.

pub mod config;
pub mod error;
pub mod firework;
pub mod particle;
pub mod render;
pub mod show;
mod simulation;
pub mod spawn;
pub mod time;
mod window;

pub use config::ShowConfig;
pub use error::{GpuError, RunError};
pub use firework::Firework;
pub use glam::DVec2;
pub use particle::{Particle, ParticleKind};
pub use show::FireworkShow;
pub use simulation::Simulation;
pub use spawn::SpawnContext;

/// Convenient re-exports for common usage.
///
/// ```no_run
/// use skyburst::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ShowConfig;
    pub use crate::firework::Firework;
    pub use crate::particle::{Particle, ParticleKind};
    pub use crate::show::FireworkShow;
    pub use crate::simulation::Simulation;
    pub use crate::spawn::SpawnContext;
    pub use crate::time::Time;
    pub use crate::DVec2;
}
