//! Per-slide transition table.
//!
//! Each slide is one [`SlideRecipe`] row; the choreographer interprets rows
//! generically instead of branching per slide.

use crate::annotation::AnnotationId;
use crate::config::ScreenMeasures;
use crate::constants::{ENDING_TITLE, FIRST_SLIDE, OPENING_TITLE, TERMINAL_SLIDE};
use crate::overlay::{OverlayId, TitlePosition};
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::PI;

const DEG: f32 = PI / 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Opening,
    Height,
    Length,
    Width,
    Ending,
}

impl Stage {
    /// Stage for a slide index. Everything at or past the terminal slide is
    /// the ending; slide 0 and below have no stage.
    pub fn from_slide(slide: i32) -> Option<Stage> {
        match slide {
            1 => Some(Stage::Opening),
            2 => Some(Stage::Height),
            3 => Some(Stage::Length),
            4 => Some(Stage::Width),
            s if s >= TERMINAL_SLIDE => Some(Stage::Ending),
            _ => None,
        }
    }

    /// Canonical slide index of the stage.
    pub fn slide(self) -> i32 {
        match self {
            Stage::Opening => FIRST_SLIDE,
            Stage::Height => 2,
            Stage::Length => 3,
            Stage::Width => 4,
            Stage::Ending => TERMINAL_SLIDE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleCard {
    pub text: &'static str,
    pub position: TitlePosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleChange {
    Show(TitleCard),
    Hide,
    /// Shown once the camera rotation settles.
    AfterCamera(TitleCard),
}

/// Camera destination, with an alternate for narrow screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub wide: Vec3,
    pub narrow: Vec3,
}

impl CameraTarget {
    pub const fn fixed(position: Vec3) -> Self {
        Self {
            wide: position,
            narrow: position,
        }
    }

    #[inline]
    pub fn resolve(&self, screen: &ScreenMeasures) -> Vec3 {
        if screen.is_narrow() {
            self.narrow
        } else {
            self.wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRecipe {
    pub stage: Stage,
    pub camera_position: CameraTarget,
    /// XYZ Euler angles in radians.
    pub camera_rotation: [f32; 3],
    pub overlay_hide: &'static [OverlayId],
    pub overlay_show: &'static [OverlayId],
    pub title: TitleChange,
    /// Annotation revealed after the camera settles.
    pub reveal: Option<AnnotationId>,
}

impl SlideRecipe {
    pub fn annotations_to_show(&self) -> SmallVec<[AnnotationId; 3]> {
        self.reveal.into_iter().collect()
    }

    /// Every annotation not revealed by this slide.
    pub fn annotations_to_hide(&self) -> SmallVec<[AnnotationId; 3]> {
        AnnotationId::ALL
            .into_iter()
            .filter(|id| self.reveal != Some(*id))
            .collect()
    }
}

pub static RECIPES: [SlideRecipe; 5] = [
    SlideRecipe {
        stage: Stage::Opening,
        camera_position: CameraTarget::fixed(Vec3::new(13.169_796, 15.5, -10.0)),
        camera_rotation: [-0.786_485_76, -0.188_669_32, -0.169_821_74],
        overlay_hide: &[
            OverlayId::Info1,
            OverlayId::Info2,
            OverlayId::Info3,
            OverlayId::PrevSlide,
        ],
        overlay_show: &[OverlayId::NextSlide],
        title: TitleChange::Show(TitleCard {
            text: OPENING_TITLE,
            position: TitlePosition::Top,
        }),
        reveal: None,
    },
    SlideRecipe {
        stage: Stage::Height,
        camera_position: CameraTarget::fixed(Vec3::new(11.511_699, 11.310_896, -14.152_922)),
        camera_rotation: [-55.0 * DEG, -50.0 * DEG, -50.0 * DEG],
        overlay_hide: &[OverlayId::Info2, OverlayId::Info3],
        overlay_show: &[OverlayId::Info1, OverlayId::NextSlide, OverlayId::PrevSlide],
        title: TitleChange::Hide,
        reveal: Some(AnnotationId::BridgeHeight),
    },
    SlideRecipe {
        stage: Stage::Length,
        camera_position: CameraTarget::fixed(Vec3::new(20.0, 25.0, -20.0)),
        camera_rotation: [-90.0 * DEG, 0.0, 0.0],
        overlay_hide: &[OverlayId::Info1, OverlayId::Info3],
        overlay_show: &[OverlayId::Info2, OverlayId::NextSlide, OverlayId::PrevSlide],
        title: TitleChange::Hide,
        reveal: Some(AnnotationId::BridgeLength),
    },
    SlideRecipe {
        stage: Stage::Width,
        camera_position: CameraTarget {
            wide: Vec3::new(20.0, 15.0, -20.0),
            narrow: Vec3::new(21.0, 16.0, -20.0),
        },
        camera_rotation: [-90.0 * DEG, 0.0, 102.0 * DEG],
        overlay_hide: &[OverlayId::Info1, OverlayId::Info2],
        overlay_show: &[OverlayId::Info3, OverlayId::NextSlide, OverlayId::PrevSlide],
        title: TitleChange::Hide,
        reveal: Some(AnnotationId::BridgeWidth),
    },
    SlideRecipe {
        stage: Stage::Ending,
        camera_position: CameraTarget::fixed(Vec3::new(20.0, 25.0, -35.0)),
        camera_rotation: [-120.0 * DEG, 0.0, 180.0 * DEG],
        overlay_hide: &[
            OverlayId::Info1,
            OverlayId::Info2,
            OverlayId::Info3,
            OverlayId::NextSlide,
        ],
        overlay_show: &[OverlayId::PrevSlide],
        title: TitleChange::AfterCamera(TitleCard {
            text: ENDING_TITLE,
            position: TitlePosition::Bottom,
        }),
        reveal: None,
    },
];

/// Recipe row for a slide index, if the slide has one.
pub fn recipe_for(slide: i32) -> Option<&'static SlideRecipe> {
    let stage = Stage::from_slide(slide)?;
    RECIPES.iter().find(|r| r.stage == stage)
}
