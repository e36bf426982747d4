//! Property tweens advanced once per frame.
//!
//! Every tween targets one [`Property`]. Starting a tween on a property that is
//! already animating replaces the old one, so overlapping slide transitions
//! never fight over the camera.

use crate::annotation::AnnotationId;
use crate::easing::Easing;
use crate::overlay::TitlePosition;
use fnv::FnvHashMap;
use glam::{Quat, Vec3};
use smallvec::SmallVec;
use std::time::Duration;

/// Animatable slot in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    CameraPosition,
    CameraRotation,
    LineScale(AnnotationId),
    LabelScale(AnnotationId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    Vector(Vec3),
    Rotation(Quat),
}

impl TweenValue {
    /// Component-wise lerp for vectors, slerp for rotations.
    ///
    /// Mismatched kinds snap to `to`.
    #[inline]
    pub fn interpolate(self, to: TweenValue, t: f32) -> TweenValue {
        match (self, to) {
            (TweenValue::Vector(a), TweenValue::Vector(b)) => TweenValue::Vector(a.lerp(b, t)),
            (TweenValue::Rotation(a), TweenValue::Rotation(b)) => {
                TweenValue::Rotation(a.slerp(b, t).normalize())
            }
            (_, to) => to,
        }
    }
}

/// Side effect requested when a tween finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    /// Camera settled on a slide that reveals an annotation.
    RevealAnnotation(AnnotationId),
    /// Line finished growing; the label follows.
    RevealLabel(AnnotationId),
    /// Camera settled on a slide whose title appears afterwards.
    ShowTitle {
        text: &'static str,
        position: TitlePosition,
    },
}

/// Read/write access to the values tweens drive.
pub trait Animated {
    fn sample(&self, property: Property) -> Option<TweenValue>;
    fn apply(&mut self, property: Property, value: TweenValue);
}

/// Tween request; the start value is captured when it is scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub property: Property,
    pub to: TweenValue,
    pub duration: Duration,
    pub easing: Easing,
    pub cue: Option<Cue>,
}

impl Tween {
    pub fn new(property: Property, to: TweenValue, duration: Duration) -> Self {
        Self {
            property,
            to,
            duration,
            easing: Easing::default(),
            cue: None,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn on_complete(mut self, cue: Option<Cue>) -> Self {
        self.cue = cue;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveTween {
    from: TweenValue,
    tween: Tween,
    elapsed: Duration,
}

impl ActiveTween {
    fn progress(&self) -> f32 {
        if self.tween.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.tween.duration.as_secs_f64()).min(1.0) as f32
    }
}

#[derive(Debug, Default)]
pub struct TweenScheduler {
    active: FnvHashMap<Property, ActiveTween>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `tween` starting at `from`. Returns true when it replaced a
    /// tween in flight on the same property (whose cue is dropped).
    pub fn start(&mut self, tween: Tween, from: TweenValue) -> bool {
        let replaced = self
            .active
            .insert(
                tween.property,
                ActiveTween {
                    from,
                    tween,
                    elapsed: Duration::ZERO,
                },
            )
            .is_some();
        if replaced {
            log::debug!("[tween] replaced in-flight tween on {:?}", tween.property);
        }
        replaced
    }

    /// Schedule `tween` starting from the target's current value.
    pub fn animate<T: Animated>(&mut self, tween: Tween, target: &T) -> bool {
        match target.sample(tween.property) {
            Some(from) => self.start(tween, from),
            None => {
                log::warn!("[tween] no animatable value for {:?}", tween.property);
                false
            }
        }
    }

    pub fn is_animating(&self, property: Property) -> bool {
        self.active.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every tween by `dt` and write the sampled values into `target`.
    ///
    /// Finished tweens are dropped and their cues pushed onto `cues` in
    /// property order.
    pub fn update<T: Animated>(&mut self, dt: Duration, target: &mut T, cues: &mut Vec<Cue>) {
        let mut finished: SmallVec<[Property; 8]> = SmallVec::new();
        for (property, active) in self.active.iter_mut() {
            active.elapsed += dt;
            let t = active.progress();
            if t >= 1.0 {
                target.apply(*property, active.tween.to);
                finished.push(*property);
            } else {
                let eased = active.tween.easing.evaluate(t);
                target.apply(*property, active.from.interpolate(active.tween.to, eased));
            }
        }
        finished.sort_unstable();
        for property in finished {
            if let Some(done) = self.active.remove(&property) {
                if let Some(cue) = done.tween.cue {
                    cues.push(cue);
                }
            }
        }
    }
}
