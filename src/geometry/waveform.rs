use kurbo::{BezPath, Point};

use crate::foundation::config::SplashConfig;

/// Width of the smoothing segment that returns the line to the baseline.
const SMOOTHING_WIDTH: f64 = 20.0;

/// Minimum flat run kept after the humps; wave cycles compress to preserve it.
const MIN_FINAL_STRAIGHT: f64 = 50.0;

/// End-Y of the last hump. Manual visual tuning inherited from the original
/// splash; preserved exactly, not a formula to generalize.
const LAST_HUMP_END_Y: f64 = -5.0;

/// A generated waveform line: one continuous open figure from `(0, 0)` to
/// `(total_length, 0)`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Waveform {
    /// Lead-in line, `wave_cycle_count` cubic humps, one smoothing cubic and
    /// a trailing line, in order. Never closed.
    pub path: BezPath,
    /// Requested horizontal extent of the whole figure.
    pub total_length: f64,
    /// Number of hump segments emitted.
    pub cycle_count: u32,
    /// Effective width of one hump after any compression.
    pub cycle_width: f64,
    /// Amplitude of the largest hump.
    pub max_amplitude: f64,
}

/// Procedurally generate the waveform geometry for a line of `total_length`.
///
/// The humps grow linearly from `max_amplitude / cycle_count` up to
/// `max_amplitude`, each a cubic Bezier with control points at 0.375 and
/// 0.625 of the hump width pulled to `+amplitude` and `-amplitude`. When the
/// line is too short for the nominal wave span, the humps compress so that a
/// flat run of at least 50 units always remains before the endpoint.
///
/// Pure and reentrant; negative or undersized lengths degrade to a flattened
/// figure instead of failing.
pub fn generate_waveform(cfg: &SplashConfig, total_length: f64) -> Waveform {
    let cycle_count = cfg.wave_cycle_count.max(1);
    let remaining = (total_length - cfg.wave_start_straight).max(0.0);

    let mut final_straight = remaining - f64::from(cycle_count) * cfg.wave_cycle_width;
    if final_straight < MIN_FINAL_STRAIGHT {
        final_straight = MIN_FINAL_STRAIGHT;
    }
    let wave_length = (remaining - final_straight).max(0.0);
    let cycle_width = wave_length / f64::from(cycle_count);

    let mut path = BezPath::new();
    path.move_to(Point::new(0.0, 0.0));
    path.line_to(Point::new(cfg.wave_start_straight, 0.0));

    let mut x = cfg.wave_start_straight;
    for i in 0..cycle_count {
        let amplitude = cfg.wave_max_amplitude * f64::from(i + 1) / f64::from(cycle_count);
        let end_y = if i + 1 == cycle_count {
            LAST_HUMP_END_Y
        } else {
            0.0
        };
        path.curve_to(
            Point::new(x + cycle_width * 0.375, amplitude),
            Point::new(x + cycle_width * 0.625, -amplitude),
            Point::new(x + cycle_width, end_y),
        );
        x += cycle_width;
    }

    // Smoothing run back to the baseline, absorbing the -5 offset.
    path.curve_to(
        Point::new(x + SMOOTHING_WIDTH * 0.375, 0.0),
        Point::new(x + SMOOTHING_WIDTH * 0.625, 0.0),
        Point::new(x + SMOOTHING_WIDTH, 0.0),
    );
    x += SMOOTHING_WIDTH;

    if total_length > x {
        path.line_to(Point::new(total_length, 0.0));
    }

    Waveform {
        path,
        total_length,
        cycle_count,
        cycle_width,
        max_amplitude: cfg.wave_max_amplitude,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/waveform.rs"]
mod tests;
