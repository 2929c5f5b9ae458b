use crate::animation::ease::Ease;
use crate::animation::track::{Keyframe, OpacityTrack};
use crate::foundation::config::SplashConfig;
use crate::foundation::error::SplashResult;

/// Number of loading dots in the splash.
pub const DOT_COUNT: usize = 3;

/// One pulsing loading dot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DotTrack {
    /// 0-based dot position, left to right.
    pub index: usize,
    /// Looping opacity timeline on the dot cycle.
    pub track: OpacityTrack,
}

/// Build the three loading-dot tracks.
///
/// The dots repeat on `dot_cycle_duration`, which is shorter than and shares
/// no phase origin with the letter/wave cycle. Each dot holds invisible until
/// its start time, fades in, holds, and fades back out; times saturate at the
/// dot cycle end.
#[tracing::instrument(skip(cfg))]
pub fn build_dot_tracks(cfg: &SplashConfig) -> SplashResult<[DotTrack; DOT_COUNT]> {
    let cycle = cfg.dot_cycle_duration;
    let mut built = Vec::with_capacity(DOT_COUNT);
    for k in 0..DOT_COUNT {
        let start = cfg.dot_start_times[k].min(cycle);
        let lit = (start + cfg.dot_fade_duration).min(cycle);
        let fade_out = cfg.dot_fade_out_times[k].min(cycle).max(lit);
        let gone = (fade_out + cfg.dot_fade_duration).min(cycle);

        let keys = vec![
            Keyframe {
                time: start,
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                time: lit,
                value: 1.0,
                ease: Ease::OutQuad,
            },
            Keyframe {
                time: fade_out,
                value: 1.0,
                ease: Ease::Linear,
            },
            Keyframe {
                time: gone,
                value: 0.0,
                ease: Ease::InQuad,
            },
        ];
        built.push(DotTrack {
            index: k,
            track: OpacityTrack::new(0.0, keys, cycle)?,
        });
    }

    let arr: [DotTrack; DOT_COUNT] = built
        .try_into()
        .map_err(|_| crate::SplashError::configuration("dot track count mismatch"))?;
    Ok(arr)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/dots.rs"]
mod tests;
