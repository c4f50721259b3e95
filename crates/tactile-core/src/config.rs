use crate::profiling::ProfilingBackend;

/// Runtime configuration shared by a Tactile stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub profiling: ProfilingMode,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Largest frame delta, in seconds, fed to actions and timers.
    /// `None` passes deltas through unclamped.
    pub max_frame_delta: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profiling: ProfilingMode::Off,
            log_filter: crate::logging::DEFAULT_FILTER.to_string(),
            max_frame_delta: None,
        }
    }
}

impl Config {
    /// Apply the logging and profiling parts of this configuration.
    pub fn install(&self) {
        crate::logging::init_with_filter(&self.log_filter);
        if let ProfilingMode::On(backend) = self.profiling {
            crate::profiling::init_profiling(backend);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling is disabled
    Off,
    /// Profiling is enabled and streamed through the given backend
    On(ProfilingBackend),
}
