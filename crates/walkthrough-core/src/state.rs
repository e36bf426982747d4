use crate::annotation::{bridge_annotations, Annotation, AnnotationId};
use crate::camera::CameraRig;
use crate::config::ScreenMeasures;
use crate::scene::ContentRegistry;
use crate::tween::{Animated, Property, TweenValue};

/// Everything a frame renders: the shared camera, the annotations and the
/// scene content that finished loading.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub camera: CameraRig,
    pub annotations: Vec<Annotation>,
    pub content: ContentRegistry,
}

impl SceneState {
    pub fn new(camera: CameraRig, annotations: Vec<Annotation>) -> Self {
        Self {
            camera,
            annotations,
            content: ContentRegistry::new(),
        }
    }

    /// Initial camera pose plus the three bridge dimension annotations.
    pub fn bridge(screen: &ScreenMeasures) -> Self {
        let annotations = bridge_annotations(screen)
            .into_iter()
            .map(Annotation::new)
            .collect();
        Self::new(CameraRig::default(), annotations)
    }

    pub fn annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id() == id)
    }

    pub fn annotation_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.annotations.iter_mut().find(|a| a.id() == id)
    }
}

impl Animated for SceneState {
    fn sample(&self, property: Property) -> Option<TweenValue> {
        match property {
            Property::CameraPosition => Some(TweenValue::Vector(self.camera.position)),
            Property::CameraRotation => Some(TweenValue::Rotation(self.camera.rotation)),
            Property::LineScale(id) => self
                .annotation(id)
                .map(|a| TweenValue::Vector(a.line_scale)),
            Property::LabelScale(id) => self
                .annotation(id)
                .map(|a| TweenValue::Vector(a.label_scale)),
        }
    }

    fn apply(&mut self, property: Property, value: TweenValue) {
        match (property, value) {
            (Property::CameraPosition, TweenValue::Vector(v)) => self.camera.position = v,
            (Property::CameraRotation, TweenValue::Rotation(q)) => self.camera.rotation = q,
            (Property::LineScale(id), TweenValue::Vector(v)) => {
                if let Some(a) = self.annotation_mut(id) {
                    a.line_scale = v;
                }
            }
            (Property::LabelScale(id), TweenValue::Vector(v)) => {
                if let Some(a) = self.annotation_mut(id) {
                    a.label_scale = v;
                }
            }
            (property, value) => {
                log::warn!("[state] {:?} cannot take {:?}", property, value);
            }
        }
    }
}
