// Host-side tests for the browser constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn fade_classes_come_in_pairs() {
    for (a, b) in [
        (RADIAL_FADE_IN_CLASS, RADIAL_FADE_OUT_CLASS),
        (IMG_FADE_IN_CLASS, IMG_FADE_OUT_CLASS),
        (GRADIENT_FADE_IN_CLASS, GRADIENT_FADE_OUT_CLASS),
        (TITLE_ON_TOP_CLASS, TITLE_ON_BOTTOM_CLASS),
    ] {
        assert_ne!(a, b);
        assert_eq!(a.replace("-in", "-out").replace("top", "bottom"), b);
    }
}

#[test]
fn labels_sit_above_canvas() {
    let canvas: i32 = CANVAS_Z_INDEX.parse().unwrap();
    let labels: i32 = CSS_LAYER_Z_INDEX.parse().unwrap();
    assert!(labels > canvas);
}

#[test]
fn clear_colours_are_normalized() {
    for c in SKY_CLEAR.iter().chain(VOID_CLEAR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    assert_eq!(LINE_COLOR[3], 1.0);
}

#[test]
fn warning_links_to_help_page() {
    assert!(NO_WEBGL_MESSAGE.contains("get.webgl.org"));
    assert_eq!(NAV_EVENT, "mouseup");
}
