use walkthrough_core::OverlayId;

/// Which way a navigation button moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Prev,
}

impl NavDirection {
    pub const ALL: [NavDirection; 2] = [NavDirection::Next, NavDirection::Prev];

    /// Slide the button leads to from `current`.
    #[inline]
    pub fn target(self, current: i32) -> i32 {
        match self {
            NavDirection::Next => current + 1,
            NavDirection::Prev => current - 1,
        }
    }

    pub fn overlay(self) -> OverlayId {
        match self {
            NavDirection::Next => OverlayId::NextSlide,
            NavDirection::Prev => OverlayId::PrevSlide,
        }
    }
}
