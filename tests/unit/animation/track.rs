use super::*;

fn dim_and_restore() -> OpacityTrack {
    OpacityTrack::new(
        1.0,
        vec![
            Keyframe {
                time: 2.0,
                value: 0.2,
                ease: Ease::Linear,
            },
            Keyframe {
                time: 4.0,
                value: 1.0,
                ease: Ease::Linear,
            },
        ],
        6.0,
    )
    .unwrap()
}

#[test]
fn samples_start_value_then_keys_then_holds() {
    let track = dim_and_restore();
    assert_eq!(track.sample(0.0), 1.0);
    // Halfway into the dim segment.
    assert!((track.sample(1.0) - 0.6).abs() < 1e-12);
    assert_eq!(track.sample(2.0), 0.2);
    assert!((track.sample(3.0) - 0.6).abs() < 1e-12);
    assert_eq!(track.sample(4.0), 1.0);
    // Holds the last value until the cycle wraps.
    assert_eq!(track.sample(5.9), 1.0);
}

#[test]
fn keyframe_times_land_exactly_on_keyframe_values() {
    let track = dim_and_restore();
    for k in &track.keys {
        assert_eq!(track.sample(k.time), k.value);
    }
}

#[test]
fn time_wraps_modulo_the_cycle() {
    let track = dim_and_restore();
    // Wrapped times differ by an ulp or two after rem_euclid, so compare
    // with a tolerance rather than bitwise.
    for t in [0.5, 2.0, 3.7, 5.2] {
        assert!((track.sample(t) - track.sample(t + 6.0)).abs() < 1e-12);
        assert!((track.sample(t) - track.sample(t + 60.0)).abs() < 1e-12);
    }
}

#[test]
fn easing_shapes_the_segment() {
    let track = OpacityTrack::new(
        0.0,
        vec![Keyframe {
            time: 2.0,
            value: 1.0,
            ease: Ease::InQuad,
        }],
        4.0,
    )
    .unwrap();
    assert!((track.sample(1.0) - 0.25).abs() < 1e-12);
}

#[test]
fn coincident_keyframes_step_cleanly() {
    let track = OpacityTrack::new(
        1.0,
        vec![
            Keyframe {
                time: 3.0,
                value: 0.2,
                ease: Ease::Linear,
            },
            Keyframe {
                time: 3.0,
                value: 0.8,
                ease: Ease::Linear,
            },
        ],
        6.0,
    )
    .unwrap();
    // At the shared time the first matching key wins; past it the later holds.
    assert_eq!(track.sample(3.0), 0.2);
    assert_eq!(track.sample(3.5), 0.8);
}

#[test]
fn validation_rejects_bad_tracks() {
    let key = |time, value| Keyframe {
        time,
        value,
        ease: Ease::Linear,
    };
    assert!(OpacityTrack::new(1.0, vec![], 0.0).is_err());
    assert!(OpacityTrack::new(1.5, vec![], 6.0).is_err());
    assert!(OpacityTrack::new(1.0, vec![key(2.0, 1.0), key(1.0, 0.5)], 6.0).is_err());
    assert!(OpacityTrack::new(1.0, vec![key(7.0, 1.0)], 6.0).is_err());
    assert!(OpacityTrack::new(1.0, vec![key(1.0, 1.2)], 6.0).is_err());
}
