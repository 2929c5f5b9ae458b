use crate::foundation::error::{SplashError, SplashResult};
use crate::geometry::waveform::Waveform;
use crate::session::model::{AnimationSession, FrameSnapshot, SessionState};

/// Rendering surface the coordinator drives.
///
/// The crate never composites; it hands the target the waveform geometry once
/// per session and a [`FrameSnapshot`] per frame, and the target decides how
/// to paint them.
pub trait RenderTarget {
    /// Install the waveform path geometry for the current text.
    fn set_waveform(&mut self, waveform: &Waveform) -> SplashResult<()>;

    /// Present one frame's worth of animated values.
    fn present(&mut self, frame: &FrameSnapshot) -> SplashResult<()>;
}

/// Starts, stops and restarts a session's tracks as one unit.
///
/// Stateless; all state lives on the session. Operations return explicit
/// results instead of raising events, and always leave the session in its
/// last well-defined state.
pub struct Coordinator;

impl Coordinator {
    /// Begin all present tracks together against `target`.
    ///
    /// Fails with [`SplashError::MissingResource`] when no target is supplied
    /// and with [`SplashError::AnimationState`] when the session is already
    /// running (tracks are never started twice without an intervening stop).
    /// If the target rejects the initial geometry or frame, the session
    /// reverts to `Stopped`.
    #[tracing::instrument(skip(session, target))]
    pub fn start<T: RenderTarget + ?Sized>(
        session: &mut AnimationSession,
        target: Option<&mut T>,
    ) -> SplashResult<()> {
        let Some(target) = target else {
            session.status = "Animation error: render target is missing".to_string();
            return Err(SplashError::missing_resource(
                "render target required to start animations",
            ));
        };
        if session.state == SessionState::Running {
            return Err(SplashError::animation_state(
                "session is already running; stop it before starting again",
            ));
        }

        session.state = SessionState::Running;
        session.status = session.config.status_running.clone();
        match Self::bind(session, target) {
            Ok(groups) => {
                tracing::debug!(groups, "animations started");
                Ok(())
            }
            Err(e) => {
                session.state = SessionState::Stopped;
                session.status = format!("Animation error: {e}");
                Err(e)
            }
        }
    }

    /// Halt all tracks.
    ///
    /// Stopping an already-stopped session is a no-op. A running session
    /// needs its target back to clear the surface; a missing target while
    /// running is a [`SplashError::MissingResource`] failure and the session
    /// stays `Running`.
    #[tracing::instrument(skip(session, target))]
    pub fn stop<T: RenderTarget + ?Sized>(
        session: &mut AnimationSession,
        target: Option<&mut T>,
    ) -> SplashResult<()> {
        if session.state == SessionState::Stopped {
            return Ok(());
        }
        let Some(target) = target else {
            session.status = "Stop animation error: render target is missing".to_string();
            return Err(SplashError::missing_resource(
                "render target required to stop animations",
            ));
        };

        session.state = SessionState::Stopped;
        session.status = session.config.status_stopped.clone();
        // Rest pose: full letters, no dots, wave at origin.
        target.present(&session.sample(0.0))?;
        tracing::debug!("animations stopped");
        Ok(())
    }

    /// Stop, then start. If the stop fails, the error is returned and the
    /// start is never attempted.
    #[tracing::instrument(skip(session, target))]
    pub fn restart<T: RenderTarget + ?Sized>(
        session: &mut AnimationSession,
        mut target: Option<&mut T>,
    ) -> SplashResult<()> {
        // Reborrow so the stop's borrow of the target ends before the start.
        Self::stop(session, target.as_deref_mut())?;
        Self::start(session, target)
    }

    /// Sample the session at `elapsed` seconds and forward the frame.
    ///
    /// The host's frame driver calls this once per frame; both cycles wrap
    /// independently inside the sample.
    pub fn tick<T: RenderTarget + ?Sized>(
        session: &AnimationSession,
        target: &mut T,
        elapsed: f64,
    ) -> SplashResult<()> {
        target.present(&session.sample(elapsed))
    }

    /// Push geometry plus the initial frame; returns how many track groups
    /// are present. A missing group is skipped silently, never aborting the
    /// others.
    fn bind<T: RenderTarget + ?Sized>(
        session: &AnimationSession,
        target: &mut T,
    ) -> SplashResult<u32> {
        target.set_waveform(&session.waveform)?;
        target.present(&session.sample(0.0))?;

        let mut groups = 0;
        if session.letters.is_some() {
            groups += 1;
        } else {
            tracing::warn!("letter tracks absent; skipping");
        }
        if session.dots.is_some() {
            groups += 1;
        } else {
            tracing::warn!("dot tracks absent; skipping");
        }
        if session.wave.is_some() {
            groups += 1;
        } else {
            tracing::warn!("wave track absent; skipping");
        }
        Ok(groups)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/coordinator.rs"]
mod tests;
