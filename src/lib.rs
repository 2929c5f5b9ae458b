//! Splashwave is a splash-screen animation engine.
//!
//! It computes, for an arbitrary loading text, a deterministic per-letter
//! opacity timeline driven by a traveling "tunnel wave", synchronizes it with
//! independent pulsing-dot and wave-gradient cycles, and procedurally
//! generates the multi-segment cubic-Bezier waveform line the splash draws
//! underneath the text. Rendering is delegated to a host surface behind the
//! [`RenderTarget`] trait; the crate itself owns no windows and draws no
//! pixels.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: text length -> clamped line length ([`line_length_for`])
//! 2. **Generate**: line length -> open Bezier figure ([`generate_waveform`])
//! 3. **Schedule**: text -> letter tracks, plus dot and wave tracks
//!    ([`build_letter_tracks`], [`build_dot_tracks`], [`build_wave_track`])
//! 4. **Coordinate**: start/stop/restart all tracks as one session and hand
//!    the host a [`FrameSnapshot`] per frame ([`Coordinator`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: geometry and scheduling are pure and stable for a
//!   given [`SplashConfig`]; repeated calls share no state.
//! - **Single frame driver**: "concurrency" is multiple time-parameterized
//!   tracks advancing together; the letter/wave cycle and the dot cycle wrap
//!   on independent periods but under one clock.
//! - **Explicit results**: coordinator operations return
//!   [`SplashResult`] values instead of raising events, and leave the
//!   session in its last well-defined state on failure.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod geometry;
mod session;

pub use animation::dots::{DOT_COUNT, DotTrack, build_dot_tracks};
pub use animation::ease::Ease;
pub use animation::letters::{LetterTrack, build_letter_tracks};
pub use animation::track::{Keyframe, OpacityTrack};
pub use animation::wave::{WaveTrack, build_wave_track};
pub use foundation::config::SplashConfig;
pub use foundation::error::{SplashError, SplashResult};
pub use geometry::line::line_length_for;
pub use geometry::waveform::{Waveform, generate_waveform};
pub use session::coordinator::{Coordinator, RenderTarget};
pub use session::model::{AnimationSession, FrameSnapshot, LetterOpacity, SessionState};

pub use kurbo::{BezPath, PathEl, Point};
