use crate::camera::{euler_xyz_deg, look_at_rotation};
use crate::config::ScreenMeasures;
use crate::constants::ANNOTATION_TWEEN;
use crate::easing::Easing;
use crate::tween::{Cue, Property, Tween, TweenScheduler, TweenValue};
use glam::{Quat, Vec3};

/// The dimension annotations placed on the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationId {
    BridgeHeight,
    BridgeLength,
    BridgeWidth,
}

impl AnnotationId {
    pub const ALL: [AnnotationId; 3] = [
        AnnotationId::BridgeHeight,
        AnnotationId::BridgeLength,
        AnnotationId::BridgeWidth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnnotationId::BridgeHeight => "BridgeHeight",
            AnnotationId::BridgeLength => "BridgeLength",
            AnnotationId::BridgeWidth => "BridgeWidth",
        }
    }

    pub fn label_name(self) -> String {
        format!("{}Label", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub font_size: &'static str,
    pub color: &'static str,
    pub font_weight: u16,
}

impl LabelStyle {
    /// Inline CSS for the label paragraph.
    pub fn css(&self) -> String {
        format!(
            "font-size: {}; color: {}; font-weight: {};",
            self.font_size, self.color, self.font_weight
        )
    }
}

/// How a label is oriented when its annotation is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelFacing {
    /// Turn the label towards the camera position at reveal time.
    FaceCamera,
    /// Snap to a fixed XYZ Euler orientation (degrees) as the reveal starts.
    Fixed([f32; 3]),
}

/// Static description of one annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSpec {
    pub id: AnnotationId,
    pub points: Vec<Vec3>,
    pub label: &'static str,
    pub label_anchor: Vec3,
    pub style: LabelStyle,
    /// Scale both primitives collapse to when hidden. Axis-constrained
    /// vectors flatten instead of vanishing.
    pub hidden_scale: Vec3,
    pub facing: LabelFacing,
}

/// A line plus its co-located label, shown and hidden through scale tweens.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub spec: AnnotationSpec,
    pub line_scale: Vec3,
    pub label_scale: Vec3,
    pub label_rotation: Quat,
    pending_look_at: Option<Vec3>,
}

impl Annotation {
    pub fn new(spec: AnnotationSpec) -> Self {
        let hidden = spec.hidden_scale;
        Self {
            spec,
            line_scale: hidden,
            label_scale: hidden,
            label_rotation: Quat::IDENTITY,
            pending_look_at: None,
        }
    }

    #[inline]
    pub fn id(&self) -> AnnotationId {
        self.spec.id
    }

    /// Line points with the current line scale applied about the origin.
    pub fn scaled_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.spec.points.iter().map(move |p| *p * self.line_scale)
    }

    /// Grow the line, then (via [`Cue::RevealLabel`]) the label.
    ///
    /// `camera_position` is only used by labels that face the camera.
    pub fn show(&mut self, camera_position: Vec3, scheduler: &mut TweenScheduler) {
        match self.spec.facing {
            LabelFacing::FaceCamera => self.pending_look_at = Some(camera_position),
            LabelFacing::Fixed(degrees) => self.label_rotation = euler_xyz_deg(degrees),
        }
        let id = self.id();
        scheduler.start(
            Tween::new(
                Property::LineScale(id),
                TweenValue::Vector(Vec3::ONE),
                ANNOTATION_TWEEN,
            )
            .easing(Easing::CubicInOut)
            .on_complete(Some(Cue::RevealLabel(id))),
            TweenValue::Vector(self.line_scale),
        );
    }

    /// Second half of [`Annotation::show`], run once the line is fully grown.
    pub fn reveal_label(&mut self, scheduler: &mut TweenScheduler) {
        if let Some(target) = self.pending_look_at.take() {
            if let Some(rotation) = look_at_rotation(self.spec.label_anchor, target, Vec3::Y) {
                self.label_rotation = rotation;
            }
        }
        scheduler.start(
            Tween::new(
                Property::LabelScale(self.id()),
                TweenValue::Vector(Vec3::ONE),
                ANNOTATION_TWEEN,
            )
            .easing(Easing::CubicInOut),
            TweenValue::Vector(self.label_scale),
        );
    }

    /// Collapse line and label together. Replaces any reveal in flight.
    pub fn hide(&mut self, scheduler: &mut TweenScheduler) {
        self.pending_look_at = None;
        let id = self.id();
        let hidden = self.spec.hidden_scale;
        for (property, current) in [
            (Property::LineScale(id), self.line_scale),
            (Property::LabelScale(id), self.label_scale),
        ] {
            if current == hidden && !scheduler.is_animating(property) {
                continue;
            }
            scheduler.start(
                Tween::new(property, TweenValue::Vector(hidden), ANNOTATION_TWEEN)
                    .easing(Easing::CubicInOut),
                TweenValue::Vector(current),
            );
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.line_scale == self.spec.hidden_scale && self.label_scale == self.spec.hidden_scale
    }

    pub fn is_shown(&self) -> bool {
        self.line_scale == Vec3::ONE && self.label_scale == Vec3::ONE
    }
}

/// Dimension annotations for the Ponte D. Luís model.
pub fn bridge_annotations(screen: &ScreenMeasures) -> Vec<AnnotationSpec> {
    let headline = LabelStyle {
        font_size: "12rem",
        color: "#ffffff",
        font_weight: 700,
    };
    let caption = LabelStyle {
        font_size: "4rem",
        ..headline
    };
    vec![
        AnnotationSpec {
            id: AnnotationId::BridgeHeight,
            points: vec![
                Vec3::new(23.212_28, 10.5, -19.919_732),
                Vec3::new(23.212_28, 0.5, -19.919_732),
            ],
            label: "52m",
            label_anchor: Vec3::new(28.0, 4.0, -20.0),
            style: headline,
            hidden_scale: Vec3::new(1.0, 0.0, 1.0),
            facing: LabelFacing::FaceCamera,
        },
        AnnotationSpec {
            id: AnnotationId::BridgeLength,
            points: vec![Vec3::new(8.0, 18.0, -17.5), Vec3::new(32.0, 18.0, -23.2)],
            label: "395m",
            label_anchor: Vec3::new(20.5, 18.0, -21.0),
            style: caption,
            hidden_scale: Vec3::new(0.0, 1.0, 0.0),
            facing: LabelFacing::Fixed([90.0, 180.0, 195.0]),
        },
        AnnotationSpec {
            id: AnnotationId::BridgeWidth,
            points: vec![Vec3::new(20.0, 12.0, -19.8), Vec3::new(19.7, 12.0, -21.1)],
            label: "8m",
            label_anchor: Vec3::new(if screen.is_narrow() { 20.5 } else { 20.0 }, 12.0, -20.5),
            style: caption,
            hidden_scale: Vec3::new(1.0, 1.0, 0.0),
            facing: LabelFacing::Fixed([90.0, 180.0, -77.0]),
        },
    ]
}
