use crate::animation::ease::Ease;
use crate::foundation::error::{SplashError, SplashResult};

/// One point on an opacity timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Seconds into the cycle, `0 <= time <= cycle`.
    pub time: f64,
    /// Opacity in `[0, 1]` reached at `time`.
    pub value: f64,
    /// Easing over the segment ending at this keyframe.
    pub ease: Ease,
}

/// A looping opacity timeline for one animated entity.
///
/// The starting opacity is stored explicitly rather than inherited from
/// whatever the property happened to be when a previous run stopped, so a
/// track samples identically on every cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpacityTrack {
    /// Opacity at the start of each cycle, before the first keyframe.
    pub start_value: f64,
    /// Keyframes ordered by non-decreasing time.
    pub keys: Vec<Keyframe>,
    /// Repeat period in seconds.
    pub cycle: f64,
}

impl OpacityTrack {
    /// Build and validate a track.
    pub fn new(start_value: f64, keys: Vec<Keyframe>, cycle: f64) -> SplashResult<Self> {
        let track = Self {
            start_value,
            keys,
            cycle,
        };
        track.validate()?;
        Ok(track)
    }

    /// Check ordering, range and cycle bounds.
    pub fn validate(&self) -> SplashResult<()> {
        if !(self.cycle > 0.0) {
            return Err(SplashError::configuration("track cycle must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.start_value) {
            return Err(SplashError::configuration(format!(
                "track start value {} outside [0, 1]",
                self.start_value
            )));
        }
        let mut prev = 0.0_f64;
        for (i, k) in self.keys.iter().enumerate() {
            if k.time < prev {
                return Err(SplashError::configuration(format!(
                    "keyframe {i} at {}s is before its predecessor at {prev}s",
                    k.time
                )));
            }
            if k.time > self.cycle {
                return Err(SplashError::configuration(format!(
                    "keyframe {i} at {}s exceeds the {}s cycle",
                    k.time, self.cycle
                )));
            }
            if !(0.0..=1.0).contains(&k.value) {
                return Err(SplashError::configuration(format!(
                    "keyframe {i} value {} outside [0, 1]",
                    k.value
                )));
            }
            prev = k.time;
        }
        Ok(())
    }

    /// Sample the track at `t` seconds since the track began.
    ///
    /// Time wraps modulo the cycle; within a cycle the value eases from the
    /// previous keyframe (or the start value at time 0) toward the next, and
    /// holds after the last keyframe until the cycle wraps.
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.rem_euclid(self.cycle);

        let mut prev_time = 0.0;
        let mut prev_value = self.start_value;
        for k in &self.keys {
            if t <= k.time {
                let span = k.time - prev_time;
                if span <= f64::EPSILON {
                    return k.value;
                }
                let u = k.ease.apply((t - prev_time) / span);
                // Lerp form that is exact at both endpoints, so the track
                // lands on the keyframe value at the keyframe time.
                return prev_value * (1.0 - u) + k.value * u;
            }
            prev_time = k.time;
            prev_value = k.value;
        }
        prev_value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
