//! Demo builder and runner.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::ShowConfig;
use crate::error::RunError;
use crate::window::App;

/// A windowed firework show.
///
/// Use method chaining to configure, then call [`run`](Simulation::run) to
/// open the window. Blocks until the window closes.
///
/// ```no_run
/// use skyburst::{ShowConfig, Simulation};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     Simulation::new()
///         .with_window_size(1920, 1080)
///         .with_config(ShowConfig::new().with_spark_count(200))
///         .run()?;
///     Ok(())
/// }
/// ```
pub struct Simulation {
    config: ShowConfig,
    width: u32,
    height: u32,
    title: String,
}

impl Simulation {
    /// A 1280x720 show with default settings.
    pub fn new() -> Self {
        Self {
            config: ShowConfig::new(),
            width: 1280,
            height: 720,
            title: "Skyburst".to_string(),
        }
    }

    /// Replace the show configuration.
    pub fn with_config(mut self, config: ShowConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the window's logical size.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the window and run the show until it is closed.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config, self.width, self.height, self.title);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
