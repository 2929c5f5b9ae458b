use crate::animation::dots::{DOT_COUNT, DotTrack, build_dot_tracks};
use crate::animation::letters::{LetterTrack, build_letter_tracks};
use crate::animation::wave::{WaveTrack, build_wave_track};
use crate::foundation::config::SplashConfig;
use crate::foundation::error::SplashResult;
use crate::geometry::line::line_length_for;
use crate::geometry::waveform::{Waveform, generate_waveform};

/// Whether a session's tracks are currently bound and advancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SessionState {
    /// No tracks are running. Initial state.
    #[default]
    Stopped,
    /// All present tracks are running on the shared frame driver.
    Running,
}

/// Live opacity of one letter, keyed by its index in the text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LetterOpacity {
    /// 0-based letter index; display order.
    pub index: usize,
    /// Character to display.
    pub character: char,
    /// Current opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Everything a renderer needs for one frame of the splash.
///
/// Built fresh per sample; the renderer consumes it as data and never
/// resolves elements by name.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameSnapshot {
    /// Seconds since the session started.
    pub elapsed: f64,
    /// Per-letter character and opacity, in display order.
    pub letters: Vec<LetterOpacity>,
    /// Opacity of the three loading dots.
    pub dots: [f64; DOT_COUNT],
    /// Gradient offset of the tunnel-wave highlight.
    pub wave_offset: f64,
    /// Whether tracks are advancing.
    pub is_animating: bool,
    /// Human-readable status line for the host UI.
    pub status: String,
}

/// One logical splash animation: letter, dot and wave tracks plus the
/// waveform geometry, built for a single loading text.
///
/// Only one session is meaningful at a time; tracks are exclusively owned and
/// rebuilt wholesale whenever the text changes.
#[derive(Clone, Debug)]
pub struct AnimationSession {
    /// Configuration the session was built against.
    pub config: SplashConfig,
    /// Loading text currently displayed.
    pub text: String,
    /// Per-letter opacity tracks; `None` until built, skipped when absent.
    pub letters: Option<Vec<LetterTrack>>,
    /// Loading-dot tracks on their own cycle; skipped when absent.
    pub dots: Option<[DotTrack; DOT_COUNT]>,
    /// Wave-gradient sweep; skipped when absent.
    pub wave: Option<WaveTrack>,
    /// Waveform line geometry sized for the current text.
    pub waveform: Waveform,
    /// Current coordinator state.
    pub state: SessionState,
    /// Last status message.
    pub status: String,
}

impl AnimationSession {
    /// Build a session for the configured default loading text.
    pub fn new(config: SplashConfig) -> SplashResult<Self> {
        let text = config.loading_text.clone();
        Self::with_text(config, &text)
    }

    /// Build a session for a caller-supplied text.
    #[tracing::instrument(skip(config))]
    pub fn with_text(config: SplashConfig, text: &str) -> SplashResult<Self> {
        config.validate()?;
        let letters = build_letter_tracks(&config, text)?;
        let dots = build_dot_tracks(&config)?;
        let wave = build_wave_track(&config)?;
        let length = line_length_for(&config, text.chars().count() as i32);
        let waveform = generate_waveform(&config, length);
        let status = config.status_ready.clone();
        Ok(Self {
            config,
            text: text.to_string(),
            letters: Some(letters),
            dots: Some(dots),
            wave: Some(wave),
            waveform,
            state: SessionState::Stopped,
            status,
        })
    }

    /// Replace the loading text, rebuilding letter tracks and waveform.
    ///
    /// On error the session keeps its previous tracks unchanged.
    pub fn set_text(&mut self, text: &str) -> SplashResult<()> {
        let letters = build_letter_tracks(&self.config, text)?;
        let length = line_length_for(&self.config, text.chars().count() as i32);
        self.waveform = generate_waveform(&self.config, length);
        self.letters = Some(letters);
        self.text = text.to_string();
        Ok(())
    }

    /// Whether tracks are currently advancing.
    pub fn is_animating(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Sample every track at `elapsed` seconds since start.
    ///
    /// The letter/wave cycle and the dot cycle wrap on their own periods; a
    /// stopped session samples at its rest pose (time zero). Missing track
    /// groups contribute their rest values and never abort the others.
    pub fn sample(&self, elapsed: f64) -> FrameSnapshot {
        let t = if self.is_animating() { elapsed } else { 0.0 };

        let letters = self
            .letters
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|l| LetterOpacity {
                index: l.index,
                character: l.character,
                opacity: l.track.sample(t),
            })
            .collect();

        let mut dots = [0.0; DOT_COUNT];
        if let Some(dot_tracks) = &self.dots {
            for d in dot_tracks {
                dots[d.index] = d.track.sample(t);
            }
        }

        let wave_offset = self
            .wave
            .as_ref()
            .map_or(self.config.wave_start_offset, |w| w.sample(t));

        FrameSnapshot {
            elapsed,
            letters,
            dots,
            wave_offset,
            is_animating: self.is_animating(),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/model.rs"]
mod tests;
