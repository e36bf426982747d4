use crate::constants::SLIDE_SCROLL_OVERSHOOT;
use crate::error::{Result, WalkthroughError};

/// Page geometry: one viewport-tall slide per step.
///
/// `page_height == slide_height * slides_amt` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub slides_amt: u32,
    pub slide_height: f64,
    pub page_height: f64,
}

impl ScrollState {
    pub fn new(slides_amt: u32, viewport_height: f64) -> Result<Self> {
        if slides_amt == 0 || !(viewport_height > 0.0) {
            return Err(WalkthroughError::Configuration(format!(
                "invalid scroll geometry: {slides_amt} slides of {viewport_height}px"
            )));
        }
        Ok(Self {
            slides_amt,
            slide_height: viewport_height,
            page_height: viewport_height * slides_amt as f64,
        })
    }
}

/// Maps scroll offsets to slide indices and reports slide changes.
#[derive(Debug, Clone)]
pub struct ScrollController {
    state: ScrollState,
    overshoot: f64,
    previous_slide: Option<i32>,
}

impl ScrollController {
    pub fn new(state: ScrollState) -> Self {
        Self {
            state,
            overshoot: SLIDE_SCROLL_OVERSHOOT,
            previous_slide: None,
        }
    }

    pub fn with_overshoot(mut self, overshoot: f64) -> Self {
        self.overshoot = overshoot;
        self
    }

    #[inline]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Slide under `scroll_y`.
    ///
    /// The offset of one slide height means slide 1 is current at the top of
    /// the page, and indices past `slides_amt` appear once the page is
    /// overscrolled.
    #[inline]
    pub fn current_slide(&self, scroll_y: f64) -> i32 {
        let s = &self.state;
        (((scroll_y + s.slide_height) / s.page_height) * s.slides_amt as f64).floor() as i32
    }

    /// Scroll offset that lands on `slide`, including the overshoot factor.
    #[inline]
    pub fn go_to_slide_target(&self, slide: i32) -> f64 {
        ((slide - 1) as f64 * self.state.slide_height).ceil() * self.overshoot
    }

    /// Record the slide at subscription time; returns it.
    pub fn register(&mut self, scroll_y: f64) -> i32 {
        let slide = self.current_slide(scroll_y);
        self.previous_slide = Some(slide);
        slide
    }

    /// Feed one scroll event. Returns the new slide when it differs from the
    /// last observed one; intermediate slides of a large jump are not replayed.
    pub fn observe(&mut self, scroll_y: f64) -> Option<i32> {
        let current = self.current_slide(scroll_y);
        let changed = (self.previous_slide != Some(current)).then_some(current);
        self.previous_slide = Some(current);
        changed
    }

    #[inline]
    pub fn previous_slide(&self) -> Option<i32> {
        self.previous_slide
    }
}
