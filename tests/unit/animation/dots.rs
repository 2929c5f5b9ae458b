use super::*;

#[test]
fn three_dots_on_the_dot_cycle() {
    let cfg = SplashConfig::default();
    let dots = build_dot_tracks(&cfg).unwrap();
    assert_eq!(dots.len(), DOT_COUNT);
    for (k, dot) in dots.iter().enumerate() {
        assert_eq!(dot.index, k);
        assert_eq!(dot.track.cycle, cfg.dot_cycle_duration);
        assert_eq!(dot.track.keys.len(), 4);
    }
}

#[test]
fn dots_stagger_in_and_fade_back_out() {
    let cfg = SplashConfig::default();
    let dots = build_dot_tracks(&cfg).unwrap();
    for (k, dot) in dots.iter().enumerate() {
        let start = cfg.dot_start_times[k];
        // Invisible until the staggered start.
        assert_eq!(dot.track.sample(0.0), 0.0);
        assert_eq!(dot.track.sample(start), 0.0);
        // Fully lit after the fade-in, still lit at fade-out start.
        assert_eq!(dot.track.sample(start + cfg.dot_fade_duration), 1.0);
        assert_eq!(dot.track.sample(cfg.dot_fade_out_times[k]), 1.0);
        // Gone again by the end of the fade-out.
        assert_eq!(
            dot.track
                .sample(cfg.dot_fade_out_times[k] + cfg.dot_fade_duration),
            0.0
        );
    }
}

#[test]
fn dot_cycle_is_independent_of_the_letter_cycle() {
    let cfg = SplashConfig::default();
    assert!(cfg.dot_cycle_duration < cfg.total_cycle_duration);
    let dots = build_dot_tracks(&cfg).unwrap();
    // Sampling past one dot cycle wraps while the letter cycle is mid-flight.
    let t = cfg.dot_cycle_duration + 0.1;
    assert!((dots[0].track.sample(t) - dots[0].track.sample(0.1)).abs() < 1e-12);
}
