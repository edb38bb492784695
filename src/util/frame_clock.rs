//! Frame delta measurement with smoothed FPS.

use web_time::{Duration, Instant};

/// Per-frame delta source for hosts whose frame scheduler does not hand
/// out timestamps.
///
/// Call [`tick`](FrameClock::tick) once per rendered frame and feed the
/// returned delta to
/// [`DragControls::advance`](crate::controls::DragControls::advance).
pub struct FrameClock {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameClock {
    /// Clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Reasonable starting estimate
            smoothing: 0.05,
        }
    }

    /// Duration since the previous `tick` (or since construction, on the
    /// first call). Also folds the sample into the FPS average.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Exponentially smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt >= Duration::from_millis(5));
        assert!(clock.fps() > 0.0);
    }
}
