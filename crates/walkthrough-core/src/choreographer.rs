//! Slide transitions: camera moves, overlay changes and annotation reveals.

use crate::camera::euler_xyz;
use crate::config::ScreenMeasures;
use crate::constants::CAMERA_TWEEN;
use crate::easing::Easing;
use crate::overlay::Overlay;
use crate::recipe::{recipe_for, SlideRecipe, Stage, TitleChange};
use crate::state::SceneState;
use crate::tween::{Cue, Property, Tween, TweenScheduler, TweenValue};
use std::time::Duration;

pub struct Choreographer {
    scene: SceneState,
    scheduler: TweenScheduler,
    screen: ScreenMeasures,
    stage: Option<Stage>,
    cues: Vec<Cue>,
}

impl Choreographer {
    pub fn new(scene: SceneState, screen: ScreenMeasures) -> Self {
        Self {
            scene,
            scheduler: TweenScheduler::new(),
            screen,
            stage: None,
            cues: Vec::new(),
        }
    }

    #[inline]
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut SceneState {
        &mut self.scene
    }

    #[inline]
    pub fn scheduler(&self) -> &TweenScheduler {
        &self.scheduler
    }

    /// Stage of the last applied transition.
    #[inline]
    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Run the transition for `slide`. Slides without a recipe are ignored.
    pub fn apply_slide<O: Overlay>(&mut self, slide: i32, overlay: &mut O) -> Option<Stage> {
        match recipe_for(slide) {
            Some(recipe) => {
                log::info!("[slide] {} -> {:?}", slide, recipe.stage);
                self.apply(recipe, overlay);
                Some(recipe.stage)
            }
            None => {
                log::debug!("[slide] {} has no transition", slide);
                None
            }
        }
    }

    /// Apply one recipe row.
    ///
    /// Every step sets state rather than toggling it, and camera tweens replace
    /// whatever is in flight, so applying the same row twice settles to the
    /// same place as applying it once.
    pub fn apply<O: Overlay>(&mut self, recipe: &SlideRecipe, overlay: &mut O) {
        for id in recipe.overlay_hide {
            overlay.hide_overlay(*id);
        }
        match recipe.title {
            TitleChange::Show(card) => overlay.set_title(card.text, card.position),
            TitleChange::Hide => overlay.hide_title(),
            TitleChange::AfterCamera(_) => {}
        }
        for id in recipe.overlay_show {
            overlay.show_overlay(*id);
        }

        let settle_cue = match (recipe.reveal, recipe.title) {
            (Some(id), _) => Some(Cue::RevealAnnotation(id)),
            (None, TitleChange::AfterCamera(card)) => Some(Cue::ShowTitle {
                text: card.text,
                position: card.position,
            }),
            _ => None,
        };
        self.scheduler.start(
            Tween::new(
                Property::CameraPosition,
                TweenValue::Vector(recipe.camera_position.resolve(&self.screen)),
                CAMERA_TWEEN,
            )
            .easing(Easing::CubicInOut),
            TweenValue::Vector(self.scene.camera.position),
        );
        self.scheduler.start(
            Tween::new(
                Property::CameraRotation,
                TweenValue::Rotation(euler_xyz(recipe.camera_rotation)),
                CAMERA_TWEEN,
            )
            .easing(Easing::CubicInOut)
            .on_complete(settle_cue),
            TweenValue::Rotation(self.scene.camera.rotation),
        );

        for id in recipe.annotations_to_hide() {
            if let Some(annotation) = self.scene.annotation_mut(id) {
                annotation.hide(&mut self.scheduler);
            }
        }
        self.stage = Some(recipe.stage);
    }

    /// Advance tweens by `dt` and run the cues of those that finished.
    pub fn advance<O: Overlay>(&mut self, dt: Duration, overlay: &mut O) {
        let mut cues = std::mem::take(&mut self.cues);
        self.scheduler.update(dt, &mut self.scene, &mut cues);
        for cue in cues.drain(..) {
            self.handle_cue(cue, overlay);
        }
        self.cues = cues;
    }

    fn handle_cue<O: Overlay>(&mut self, cue: Cue, overlay: &mut O) {
        match cue {
            Cue::RevealAnnotation(id) => {
                let camera_position = self.scene.camera.position;
                if let Some(annotation) = self.scene.annotation_mut(id) {
                    log::debug!("[annotation] show {}", id.name());
                    annotation.show(camera_position, &mut self.scheduler);
                }
            }
            Cue::RevealLabel(id) => {
                if let Some(annotation) = self.scene.annotation_mut(id) {
                    annotation.reveal_label(&mut self.scheduler);
                }
            }
            Cue::ShowTitle { text, position } => overlay.set_title(text, position),
        }
    }
}
