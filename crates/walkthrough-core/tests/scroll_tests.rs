use walkthrough_core::{ScrollController, ScrollState, WalkthroughError};

fn controller() -> ScrollController {
    // 5 slides on an 800px viewport => 4000px page
    ScrollController::new(ScrollState::new(5, 800.0).unwrap())
}

#[test]
fn scroll_state_page_height_is_slides_times_viewport() {
    let s = ScrollState::new(5, 800.0).unwrap();
    assert_eq!(s.slides_amt, 5);
    assert_eq!(s.slide_height, 800.0);
    assert_eq!(s.page_height, 4000.0);
}

#[test]
fn scroll_state_rejects_empty_geometry() {
    assert!(matches!(
        ScrollState::new(0, 800.0),
        Err(WalkthroughError::Configuration(_))
    ));
    assert!(ScrollState::new(5, 0.0).is_err());
    assert!(ScrollState::new(5, f64::NAN).is_err());
}

#[test]
fn current_slide_matches_reference_points() {
    let c = controller();
    assert_eq!(c.current_slide(0.0), 1);
    assert_eq!(c.current_slide(799.0), 1);
    assert_eq!(c.current_slide(800.0), 2);
    assert_eq!(c.current_slide(3300.0), 5);
}

#[test]
fn current_slide_is_monotonic_over_the_page() {
    let c = controller();
    let mut prev = c.current_slide(0.0);
    let mut y = 0.0;
    while y <= 4000.0 {
        let s = c.current_slide(y);
        assert!(s >= prev, "slide went backwards at scrollY={y}: {prev} -> {s}");
        prev = s;
        y += 7.5;
    }
}

#[test]
fn overscroll_goes_past_last_slide() {
    let c = controller();
    assert_eq!(c.current_slide(4000.0), 6);
    assert!(c.current_slide(10_000.0) > 5);
}

#[test]
fn go_to_slide_applies_overshoot() {
    let c = controller();
    assert_eq!(c.go_to_slide_target(3), 1680.0);
    assert_eq!(c.go_to_slide_target(1), 0.0);
    assert_eq!(c.go_to_slide_target(2), 840.0);
}

#[test]
fn go_to_slide_lands_on_requested_slide() {
    let c = controller();
    let max_scroll = 4000.0 - 800.0;
    for s in 1..=5 {
        let y = c.go_to_slide_target(s).min(max_scroll);
        let landed = c.current_slide(y);
        assert!((landed - s).abs() <= 1, "slide {s} landed on {landed}");
        assert_eq!(landed, s);
    }
}

#[test]
fn overshoot_is_tunable() {
    let c = controller().with_overshoot(1.0);
    assert_eq!(c.go_to_slide_target(3), 1600.0);
}

#[test]
fn observe_reports_only_changes() {
    let mut c = controller();
    assert_eq!(c.register(0.0), 1);
    assert_eq!(c.observe(10.0), None);
    assert_eq!(c.observe(400.0), None);
    assert_eq!(c.observe(820.0), Some(2));
    assert_eq!(c.observe(830.0), None);
    assert_eq!(c.previous_slide(), Some(2));
    assert_eq!(c.observe(700.0), Some(1));
}

#[test]
fn observe_jumps_without_replaying_intermediate_slides() {
    let mut c = controller();
    c.register(0.0);
    assert_eq!(c.observe(3300.0), Some(5));
    assert_eq!(c.observe(3310.0), None);
}

#[test]
fn observe_before_register_fires_once() {
    let mut c = controller();
    assert_eq!(c.previous_slide(), None);
    assert_eq!(c.observe(0.0), Some(1));
    assert_eq!(c.observe(0.0), None);
}
