use crate::animation::ease::Ease;
use crate::animation::track::{Keyframe, OpacityTrack};
use crate::foundation::config::SplashConfig;
use crate::foundation::error::SplashResult;

/// One displayable letter and its opacity timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LetterTrack {
    /// 0-based position in the loading text; insertion order is display order.
    pub index: usize,
    /// Character shown at this position.
    pub character: char,
    /// Looping opacity timeline on the letter/wave cycle.
    pub track: OpacityTrack,
}

impl LetterTrack {
    /// Seconds into the cycle at which the traveling wave reaches this letter.
    pub fn hit_time(&self) -> f64 {
        self.track.keys.first().map_or(0.0, |k| k.time)
    }
}

/// Build one opacity track per character of `text`.
///
/// Each letter starts the cycle at full opacity, dims to
/// `letter_active_opacity` when the wave hits it, then restores after a
/// staggered delay so letters relight one by one behind the wave. Keyframe
/// times saturate at the cycle end rather than spilling into the next cycle.
///
/// The previous set of tracks for a session is simply dropped when the text
/// changes; tracks are never shared between sessions.
#[tracing::instrument(skip(cfg))]
pub fn build_letter_tracks(cfg: &SplashConfig, text: &str) -> SplashResult<Vec<LetterTrack>> {
    cfg.validate_text(text)?;

    let cycle = cfg.total_cycle_duration;
    let mut tracks = Vec::with_capacity(text.chars().count());
    for (i, ch) in text.chars().enumerate() {
        let hit = (cfg.letter_start_time + i as f64 * cfg.letter_interval).min(cycle);
        let restore =
            (hit + cfg.letter_restore_delay + i as f64 * cfg.letter_restore_stagger).min(cycle);

        let keys = vec![
            Keyframe {
                time: hit,
                value: cfg.letter_active_opacity,
                ease: Ease::InQuad,
            },
            Keyframe {
                time: restore,
                value: cfg.letter_inactive_opacity,
                ease: Ease::OutQuad,
            },
        ];
        tracks.push(LetterTrack {
            index: i,
            character: ch,
            track: OpacityTrack::new(cfg.letter_inactive_opacity, keys, cycle)?,
        });
    }

    tracing::debug!(letters = tracks.len(), "built letter tracks");
    Ok(tracks)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/letters.rs"]
mod tests;
