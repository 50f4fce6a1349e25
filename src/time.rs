//! Frame timing for the host loop.
//!
//! A [`Time`] is the single source of elapsed and delta time for the demo
//! host. Values are `f64` to match the simulation's precision.
//!
//! ```no_run
//! use skyburst::time::Time;
//!
//! let mut time = Time::new();
//! loop {
//!     let (elapsed, delta) = time.update();
//!     // step the show with `delta`...
//!     # let _ = (elapsed, delta);
//! }
//! ```

use std::time::{Duration, Instant};

/// How often the FPS estimate refreshes.
const FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

/// Wall-clock tracking: elapsed, delta, frame count, FPS, pause.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f64,
    delta_secs: f64,
    frame_count: u64,
    fps: f64,
    fps_frame_count: u64,
    fps_update_time: Instant,
    paused: bool,
    pause_elapsed: Duration,
    fixed_delta: Option<f64>,
}

impl Time {
    /// Start the clock now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            paused: false,
            pause_elapsed: Duration::ZERO,
            fixed_delta: None,
        }
    }

    /// Advance the clock. Call once per frame.
    ///
    /// Returns `(elapsed, delta)` in seconds. While paused the delta is
    /// zero and elapsed time stands still.
    pub fn update(&mut self) -> (f64, f64) {
        let now = Instant::now();

        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, 0.0);
        }

        let raw_delta = now.duration_since(self.last_frame).as_secs_f64();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta);
        self.last_frame = now;

        self.elapsed_secs = (now.duration_since(self.start) - self.pause_elapsed).as_secs_f64();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= FPS_UPDATE_INTERVAL {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f64 / fps_elapsed.as_secs_f64();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        (self.elapsed_secs, self.delta_secs)
    }

    /// Seconds since the clock started, excluding paused stretches.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed_secs
    }

    /// Seconds covered by the last `update`.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta_secs
    }

    /// Frames counted so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Recent frames-per-second estimate.
    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Whether the clock is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop time. Subsequent updates report a zero delta.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause. The paused stretch does not count toward
    /// elapsed time.
    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_elapsed += now.duration_since(self.last_frame);
            self.last_frame = now;
            self.paused = false;
        }
    }

    /// Pause or resume, whichever applies.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Force a constant delta, for deterministic stepping. `None` restores
    /// wall-clock deltas.
    pub fn set_fixed_delta(&mut self, delta: Option<f64>) {
        self.fixed_delta = delta;
    }

    /// Restart the clock from zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
