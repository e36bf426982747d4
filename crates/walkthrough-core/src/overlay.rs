/// DOM overlay elements toggled by the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OverlayId {
    Info1,
    Info2,
    Info3,
    NextSlide,
    PrevSlide,
}

impl OverlayId {
    pub const ALL: [OverlayId; 5] = [
        OverlayId::Info1,
        OverlayId::Info2,
        OverlayId::Info3,
        OverlayId::NextSlide,
        OverlayId::PrevSlide,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            OverlayId::Info1 => "info-1",
            OverlayId::Info2 => "info-2",
            OverlayId::Info3 => "info-3",
            OverlayId::NextSlide => "next-slide-bt",
            OverlayId::PrevSlide => "prev-slide-bt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePosition {
    Top,
    Bottom,
}

/// Presentation surface the choreographer drives.
///
/// Implementations set state unconditionally so repeated calls are harmless.
pub trait Overlay {
    fn show_overlay(&mut self, id: OverlayId);
    fn hide_overlay(&mut self, id: OverlayId);
    fn set_title(&mut self, text: &str, position: TitlePosition);
    fn hide_title(&mut self);
}
