use crate::constants::{NARROW_SCREEN_MAX_WIDTH, SLIDES_AMT, SLIDE_SCROLL_OVERSHOOT};
use crate::error::{Result, WalkthroughError};
use crate::scroll::ScrollState;

/// Available screen size, used to pick the narrow-screen framings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMeasures {
    pub width: f64,
    pub height: f64,
}

impl ScreenMeasures {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_SCREEN_MAX_WIDTH
    }
}

impl Default for ScreenMeasures {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

/// Run-time settings gathered once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkthroughConfig {
    pub slides_amt: u32,
    /// Viewport height in CSS pixels; one slide is one viewport tall.
    pub viewport_height: f64,
    pub screen: ScreenMeasures,
    /// Prefix prepended to every asset path.
    pub assets_base: String,
    pub scroll_overshoot: f64,
}

impl WalkthroughConfig {
    pub fn new(viewport_height: f64, screen: ScreenMeasures) -> Self {
        Self {
            slides_amt: SLIDES_AMT,
            viewport_height,
            screen,
            assets_base: String::new(),
            scroll_overshoot: SLIDE_SCROLL_OVERSHOOT,
        }
    }

    pub fn with_assets_base(mut self, base: impl Into<String>) -> Self {
        self.assets_base = base.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.slides_amt == 0 {
            return Err(WalkthroughError::Configuration(
                "slide count must be at least 1".into(),
            ));
        }
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            return Err(WalkthroughError::Configuration(format!(
                "viewport height must be positive, got {}",
                self.viewport_height
            )));
        }
        if !(self.scroll_overshoot.is_finite() && self.scroll_overshoot > 0.0) {
            return Err(WalkthroughError::Configuration(format!(
                "scroll overshoot must be positive, got {}",
                self.scroll_overshoot
            )));
        }
        Ok(())
    }

    pub fn scroll_state(&self) -> Result<ScrollState> {
        self.validate()?;
        ScrollState::new(self.slides_amt, self.viewport_height)
    }

    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.assets_base, path)
    }
}
