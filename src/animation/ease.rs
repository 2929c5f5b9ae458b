/// Easing applied over the segment that ends at a keyframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic ease-in: slow start, fast finish.
    InQuad,
    /// Quadratic ease-out: fast start, slow finish.
    OutQuad,
}

impl Ease {
    /// Map normalized progress `t` through the easing curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
