// Host-side tests for navigation button targets.

#![allow(dead_code)]
mod nav {
    include!("../src/nav.rs");
}

use nav::NavDirection;
use walkthrough_core::{OverlayId, ScrollController, ScrollState};

#[test]
fn buttons_target_neighbouring_slides() {
    assert_eq!(NavDirection::Next.target(1), 2);
    assert_eq!(NavDirection::Prev.target(3), 2);
    assert_eq!(NavDirection::Prev.target(1), 0);
}

#[test]
fn buttons_map_to_overlay_ids() {
    assert_eq!(NavDirection::Next.overlay(), OverlayId::NextSlide);
    assert_eq!(NavDirection::Prev.overlay().dom_id(), "prev-slide-bt");
}

#[test]
fn next_from_each_slide_scrolls_onto_that_slide() {
    let controller = ScrollController::new(ScrollState::new(5, 800.0).unwrap());
    for current in 1..5 {
        let target = NavDirection::Next.target(current);
        let y = controller.go_to_slide_target(target);
        assert_eq!(controller.current_slide(y), target, "from slide {current}");
    }
}
