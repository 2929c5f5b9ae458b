use crate::foundation::config::SplashConfig;

/// Compute the waveform line length for a text of `text_len` characters.
///
/// Non-positive lengths fall back to the base length; otherwise the length
/// grows by `length_per_character` per character past the reference length
/// and is clamped to `[min_line_length, max_line_length]`. Total and pure:
/// absurd inputs clamp rather than fail, so the splash stays renderable.
pub fn line_length_for(cfg: &SplashConfig, text_len: i32) -> f64 {
    if text_len <= 0 {
        return cfg.base_line_length;
    }
    let raw = cfg.base_line_length
        + f64::from(text_len - cfg.reference_text_length) * cfg.length_per_character;
    raw.clamp(cfg.min_line_length, cfg.max_line_length)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/line.rs"]
mod tests;
