//! Frame timing utilities

/// Reporting interval for FPS samples, in seconds.
const REPORT_INTERVAL: f64 = 1.0;

/// A computed frame-rate sample covering one reporting interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsSample {
    /// Frames per second over the interval
    pub fps: f64,
    /// Average milliseconds spent per frame over the interval
    pub frame_ms: f64,
}

/// Frame counter that produces one [`FpsSample`] per elapsed second.
///
/// Timestamps are passed in by the caller (seconds on a monotonic clock,
/// e.g. GLFW's), so the threshold logic can be driven without a window.
pub struct FpsCounter {
    frame_count: u32,
    last_update: f64,
}

impl FpsCounter {
    /// Create a counter whose first interval starts at `now`.
    #[must_use]
    pub fn new(now: f64) -> Self {
        Self {
            frame_count: 0,
            last_update: now,
        }
    }

    /// Record one rendered frame.
    pub fn frame(&mut self) {
        self.frame_count += 1;
    }

    /// Number of frames recorded in the current interval.
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Produce a sample once at least one second has elapsed since the last
    /// report, then reset the counter and the interval start.
    ///
    /// Returns `None` between threshold crossings. A threshold crossing with
    /// zero recorded frames also returns `None` (the rate is undefined); the
    /// interval restarts so a stalled renderer does not report nonsense.
    pub fn sample(&mut self, now: f64) -> Option<FpsSample> {
        let elapsed = now - self.last_update;
        if elapsed < REPORT_INTERVAL {
            return None;
        }

        if self.frame_count == 0 {
            self.last_update = now;
            return None;
        }

        let fps = f64::from(self.frame_count) / elapsed;
        let frame_ms = (elapsed * 1000.0) / f64::from(self.frame_count);

        self.frame_count = 0;
        self.last_update = now;

        Some(FpsSample { fps, frame_ms })
    }
}
