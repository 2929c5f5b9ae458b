use super::*;
use kurbo::PathEl;

fn segment_counts(wf: &Waveform) -> (usize, usize, usize, usize) {
    let mut moves = 0;
    let mut lines = 0;
    let mut curves = 0;
    let mut closes = 0;
    for el in wf.path.elements() {
        match el {
            PathEl::MoveTo(_) => moves += 1,
            PathEl::LineTo(_) => lines += 1,
            PathEl::CurveTo(..) => curves += 1,
            PathEl::ClosePath => closes += 1,
            PathEl::QuadTo(..) => panic!("unexpected quad segment"),
        }
    }
    (moves, lines, curves, closes)
}

fn end_point(wf: &Waveform) -> Point {
    match wf.path.elements().last().unwrap() {
        PathEl::LineTo(p) => *p,
        PathEl::CurveTo(_, _, p) => *p,
        other => panic!("unexpected trailing element {other:?}"),
    }
}

#[test]
fn default_config_emits_seven_segments_open() {
    let cfg = SplashConfig::default();
    let wf = generate_waveform(&cfg, 580.0);
    let (moves, lines, curves, closes) = segment_counts(&wf);
    assert_eq!(moves, 1);
    assert_eq!(lines, 2);
    assert_eq!(curves, cfg.wave_cycle_count as usize + 1);
    assert_eq!(closes, 0, "waveform must stay an open figure");
}

#[test]
fn endpoint_matches_requested_length() {
    let cfg = SplashConfig::default();
    for total in [
        cfg.wave_start_straight + 50.0,
        300.0,
        400.0,
        580.0,
        800.0,
        2000.0,
    ] {
        let wf = generate_waveform(&cfg, total);
        let end = end_point(&wf);
        assert!(
            (end.x - total).abs() < 1e-9,
            "endpoint {} for requested {total}",
            end.x
        );
        assert!(end.y.abs() < 1e-9);
    }
}

#[test]
fn humps_grow_to_max_amplitude_and_last_dips() {
    let cfg = SplashConfig::default();
    let wf = generate_waveform(&cfg, 580.0);
    let curves: Vec<_> = wf
        .path
        .elements()
        .iter()
        .filter_map(|el| match el {
            PathEl::CurveTo(p1, p2, p3) => Some((*p1, *p2, *p3)),
            _ => None,
        })
        .collect();

    let humps = &curves[..cfg.wave_cycle_count as usize];
    let mut prev_amp = 0.0;
    for (i, (p1, p2, p3)) in humps.iter().enumerate() {
        assert!((p1.y + p2.y).abs() < 1e-9, "control points are symmetric");
        assert!(p1.y > prev_amp, "amplitudes grow");
        prev_amp = p1.y;
        let expected_end_y = if i + 1 == humps.len() { -5.0 } else { 0.0 };
        assert_eq!(p3.y, expected_end_y);
    }
    assert!((prev_amp - cfg.wave_max_amplitude).abs() < 1e-9);

    // Smoothing segment is flat and fixed-width 20.
    let (s1, s2, s3) = curves[curves.len() - 1];
    assert_eq!(s1.y, 0.0);
    assert_eq!(s2.y, 0.0);
    assert_eq!(s3.y, 0.0);
    let last_hump_end = humps.last().unwrap().2;
    assert!((s3.x - last_hump_end.x - 20.0).abs() < 1e-9);
}

#[test]
fn hump_widths_use_nominal_cycle_width_when_room_allows() {
    let cfg = SplashConfig::default();
    // remaining = 580 - 50 = 530, nominal wave span = 4 * 80 = 320,
    // final straight = 210 >= 50, so no compression.
    let wf = generate_waveform(&cfg, 580.0);
    assert!((wf.cycle_width - cfg.wave_cycle_width).abs() < 1e-9);
}

#[test]
fn short_lines_compress_the_wave_to_keep_the_tail() {
    let cfg = SplashConfig::default();
    // remaining = 300 - 50 = 250 < 320 + 50, so the tail wins.
    let wf = generate_waveform(&cfg, 300.0);
    assert!(wf.cycle_width < cfg.wave_cycle_width);
    assert!((wf.cycle_width * 4.0 - 200.0).abs() < 1e-9);
    assert!((end_point(&wf).x - 300.0).abs() < 1e-9);
}

#[test]
fn absurd_lengths_degrade_without_panicking() {
    let cfg = SplashConfig::default();
    for total in [-100.0, 0.0, 10.0, 60.0] {
        let wf = generate_waveform(&cfg, total);
        let (_, _, curves, closes) = segment_counts(&wf);
        assert_eq!(curves, cfg.wave_cycle_count as usize + 1);
        assert_eq!(closes, 0);
    }
}
