use crate::foundation::config::SplashConfig;
use crate::foundation::error::{SplashError, SplashResult};

/// Looping gradient-offset sweep for the "tunnel wave" highlight.
///
/// The offset runs past both ends of the visible line (default −0.3 to 1.5)
/// so the highlight enters and leaves the frame cleanly; the letter hit
/// times are tuned against this sweep.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveTrack {
    /// Gradient offset at the start of each cycle.
    pub start_offset: f64,
    /// Gradient offset at the end of each cycle.
    pub end_offset: f64,
    /// Repeat period in seconds; same as the letter cycle.
    pub cycle: f64,
}

impl WaveTrack {
    /// Sample the gradient offset at `t` seconds since the track began.
    pub fn sample(&self, t: f64) -> f64 {
        let u = t.rem_euclid(self.cycle) / self.cycle;
        self.start_offset + (self.end_offset - self.start_offset) * u
    }
}

/// Build the wave-gradient track for one cycle of the splash.
pub fn build_wave_track(cfg: &SplashConfig) -> SplashResult<WaveTrack> {
    if !(cfg.total_cycle_duration > 0.0) {
        return Err(SplashError::configuration("wave cycle must be > 0"));
    }
    Ok(WaveTrack {
        start_offset: cfg.wave_start_offset,
        end_offset: cfg.wave_end_offset,
        cycle: cfg.total_cycle_duration,
    })
}
