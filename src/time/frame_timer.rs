/// Per-frame delta-time tracker driven by the platform's monotonic clock.
///
/// The first tick after construction reports a nominal 1/60 s, since there is
/// no previous frame to measure against. Later ticks report the exact
/// difference between consecutive timestamps; no clamping is applied, the
/// GUI side owns any smoothing policy.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    /// Timestamp of the previous tick; values <= 0 mean "no frame yet".
    last: f64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { last: 0.0 }
    }

    /// Advances the timer with the current monotonic time in seconds and
    /// returns the frame delta.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = if self.last > 0.0 {
            (now - self.last) as f32
        } else {
            1.0 / 60.0
        };
        self.last = now;
        dt
    }
}
