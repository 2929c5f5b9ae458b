use crate::foundation::error::{SplashError, SplashResult};

/// Immutable configuration for one splash animation.
///
/// Every timing, opacity and geometry constant lives here; components take a
/// reference at construction instead of reaching for globals, so tests can
/// override any value per case. The `Default` impl carries the tuned values
/// the stock splash ships with, and the whole struct round-trips through
/// serde, so a host can load overrides from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Loading message displayed letter by letter.
    pub loading_text: String,
    /// Upper bound on the number of letters a session accepts.
    pub max_letter_count: usize,

    /// Duration of one complete letter/wave cycle, in seconds.
    pub total_cycle_duration: f64,
    /// Duration of each letter fade, in seconds. Kept for hosts that render
    /// their own fades; the built-in 2-keyframe letter tracks ramp from the
    /// cycle start to the hit time and do not consume it.
    pub letter_fade_duration: f64,
    /// Delay between consecutive letter hit times, in seconds.
    pub letter_interval: f64,
    /// When the wave reaches the first letter, in seconds into the cycle.
    pub letter_start_time: f64,
    /// Opacity of a letter the wave has not reached (or has restored).
    pub letter_inactive_opacity: f64,
    /// Opacity of a letter while the wave holds it dimmed.
    pub letter_active_opacity: f64,
    /// Seconds after the hit before a letter begins to restore.
    pub letter_restore_delay: f64,
    /// Extra per-letter restore delay, cascading the relight left to right.
    pub letter_restore_stagger: f64,

    /// Wave gradient offset at the start of the cycle (off-screen left).
    pub wave_start_offset: f64,
    /// Wave gradient offset at the end of the cycle (off-screen right).
    pub wave_end_offset: f64,

    /// Line length used for text at the reference length.
    pub base_line_length: f64,
    /// Text length that maps exactly to `base_line_length`.
    pub reference_text_length: i32,
    /// Lower clamp for the computed line length.
    pub min_line_length: f64,
    /// Upper clamp for the computed line length.
    pub max_line_length: f64,
    /// Extra line length per character beyond the reference length.
    pub length_per_character: f64,

    /// Flat lead-in before the first hump.
    pub wave_start_straight: f64,
    /// Number of Bezier humps in the waveform.
    pub wave_cycle_count: u32,
    /// Nominal width of one hump; compressed when the line runs short.
    pub wave_cycle_width: f64,
    /// Amplitude of the final (largest) hump.
    pub wave_max_amplitude: f64,

    /// Repeat period of the loading-dot cycle, independent of the letter cycle.
    pub dot_cycle_duration: f64,
    /// Per-dot fade-in start times within the dot cycle.
    pub dot_start_times: [f64; 3],
    /// Per-dot fade-out start times within the dot cycle.
    pub dot_fade_out_times: [f64; 3],
    /// Duration of each dot fade, in and out.
    pub dot_fade_duration: f64,

    /// Status text before the first start.
    pub status_ready: String,
    /// Status text while the session is running.
    pub status_running: String,
    /// Status text after a stop.
    pub status_stopped: String,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            loading_text: "Loading Panel".to_string(),
            max_letter_count: 13,

            total_cycle_duration: 6.0,
            letter_fade_duration: 0.4,
            letter_interval: 0.15,
            letter_start_time: 2.9,
            letter_inactive_opacity: 1.0,
            letter_active_opacity: 0.2,
            letter_restore_delay: 1.5,
            letter_restore_stagger: 0.2,

            wave_start_offset: -0.3,
            wave_end_offset: 1.5,

            base_line_length: 400.0,
            reference_text_length: 8,
            min_line_length: 300.0,
            max_line_length: 800.0,
            length_per_character: 15.0,

            wave_start_straight: 50.0,
            wave_cycle_count: 4,
            wave_cycle_width: 80.0,
            wave_max_amplitude: 30.0,

            dot_cycle_duration: 2.0,
            dot_start_times: [0.0, 0.2, 0.4],
            dot_fade_out_times: [1.0, 1.2, 1.4],
            dot_fade_duration: 0.3,

            status_ready: "Ready - perfect fade + blue line + tunnel wave effect!".to_string(),
            status_running: "Perfect animation: tunnel wave + synchronized letters + loading dots!"
                .to_string(),
            status_stopped: "Animations stopped - Press SPACE to restart".to_string(),
        }
    }
}

impl SplashConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults, so a host only overrides
    /// what it cares about.
    pub fn from_json_str(json: &str) -> SplashResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| SplashError::configuration(format!("invalid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate internal consistency of the constants.
    pub fn validate(&self) -> SplashResult<()> {
        if self.max_letter_count == 0 {
            return Err(SplashError::configuration("max_letter_count must be >= 1"));
        }
        if !(self.total_cycle_duration > 0.0) {
            return Err(SplashError::configuration(
                "total_cycle_duration must be > 0",
            ));
        }
        if !(self.dot_cycle_duration > 0.0) {
            return Err(SplashError::configuration("dot_cycle_duration must be > 0"));
        }
        for (name, v) in [
            ("letter_inactive_opacity", self.letter_inactive_opacity),
            ("letter_active_opacity", self.letter_active_opacity),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(SplashError::configuration(format!(
                    "{name} must be in [0, 1], got {v}"
                )));
            }
        }
        if self.letter_interval < 0.0
            || self.letter_start_time < 0.0
            || self.letter_restore_delay < 0.0
            || self.letter_restore_stagger < 0.0
            || self.letter_fade_duration < 0.0
        {
            return Err(SplashError::configuration(
                "letter timing constants must be >= 0",
            ));
        }
        if self.min_line_length > self.max_line_length {
            return Err(SplashError::configuration(
                "min_line_length must be <= max_line_length",
            ));
        }
        if self.wave_cycle_count == 0 {
            return Err(SplashError::configuration("wave_cycle_count must be >= 1"));
        }
        if self.dot_fade_duration < 0.0 {
            return Err(SplashError::configuration("dot_fade_duration must be >= 0"));
        }
        for k in 0..3 {
            if self.dot_start_times[k] < 0.0 || self.dot_fade_out_times[k] < 0.0 {
                return Err(SplashError::configuration("dot times must be >= 0"));
            }
            if self.dot_fade_out_times[k] < self.dot_start_times[k] + self.dot_fade_duration {
                return Err(SplashError::configuration(format!(
                    "dot {k} fades out before its fade-in completes"
                )));
            }
        }
        Ok(())
    }

    /// Validate a loading text against this configuration.
    ///
    /// The bound is a hard configuration limit, not a truncation point: text
    /// longer than `max_letter_count` is rejected outright.
    pub fn validate_text(&self, text: &str) -> SplashResult<()> {
        let n = text.chars().count();
        if n == 0 {
            return Err(SplashError::configuration("loading text must be non-empty"));
        }
        if n > self.max_letter_count {
            return Err(SplashError::configuration(format!(
                "loading text has {n} letters, max is {}",
                self.max_letter_count
            )));
        }
        Ok(())
    }
}
