/// Tracks frame timing for a [`Scene`](crate::Scene).
///
/// Unlike a wall-clock timer this is driven entirely by the deltas handed to
/// [`FrameTime::advance`], which keeps scene updates deterministic.
#[derive(Debug, Clone)]
pub struct FrameTime {
    /// Total scaled time elapsed, in seconds
    elapsed: f64,
    /// Scaled delta of the last frame, in seconds
    delta: f32,
    /// Number of frames advanced
    frame_count: u64,
    /// Time scale multiplier (1.0 = normal, 0.5 = half speed, 0.0 = paused)
    time_scale: f32,
    /// Raw deltas above this are clamped
    max_delta: Option<f32>,
}

impl FrameTime {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
            time_scale: 1.0,
            max_delta: None,
        }
    }

    /// Advance one frame by a raw delta and return the delta to simulate with.
    pub fn advance(&mut self, raw_delta: f32) -> f32 {
        let mut delta = raw_delta.max(0.0);
        if let Some(max) = self.max_delta {
            delta = delta.min(max);
        }
        self.delta = delta * self.time_scale;
        self.elapsed += self.delta as f64;
        self.frame_count += 1;
        self.delta
    }

    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta
    }

    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Sets the time scale; negative values are treated as paused.
    #[inline]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    #[inline]
    pub fn max_delta(&self) -> Option<f32> {
        self.max_delta
    }

    pub fn set_max_delta(&mut self, max_delta: Option<f32>) {
        self.max_delta = max_delta;
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}
