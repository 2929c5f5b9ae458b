use super::*;

#[test]
fn endpoints_are_fixed_for_all_curves() {
    for ease in [Ease::Linear, Ease::InQuad, Ease::OutQuad] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn out_of_range_progress_clamps() {
    assert_eq!(Ease::Linear.apply(-0.5), 0.0);
    assert_eq!(Ease::InQuad.apply(1.5), 1.0);
}

#[test]
fn in_quad_lags_and_out_quad_leads_linear() {
    let t = 0.25;
    assert!(Ease::InQuad.apply(t) < Ease::Linear.apply(t));
    assert!(Ease::OutQuad.apply(t) > Ease::Linear.apply(t));
}
