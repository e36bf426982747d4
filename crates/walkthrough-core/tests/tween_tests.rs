mod common;

use common::{approx_quat, approx_vec3};
use glam::{Quat, Vec3};
use std::time::Duration;
use walkthrough_core::{
    Animated, AnnotationId, Cue, Easing, Property, SceneState, ScreenMeasures, Tween,
    TweenScheduler, TweenValue,
};

fn scene() -> SceneState {
    SceneState::bridge(&ScreenMeasures::default())
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn easing_endpoints_and_midpoint() {
    for e in [Easing::Linear, Easing::CubicInOut] {
        assert_eq!(e.evaluate(0.0), 0.0, "{e:?} at 0");
        assert!((e.evaluate(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
    }
    assert!((Easing::CubicInOut.evaluate(0.5) - 0.5).abs() < 1e-6);
    assert!((Easing::CubicInOut.evaluate(0.25) - 0.0625).abs() < 1e-6);
    assert!((Easing::CubicInOut.evaluate(0.75) - 0.9375).abs() < 1e-6);
}

#[test]
fn easing_clamps_input() {
    assert_eq!(Easing::CubicInOut.evaluate(-1.0), 0.0);
    assert_eq!(Easing::CubicInOut.evaluate(2.0), 1.0);
    assert_eq!(Easing::default(), Easing::CubicInOut);
}

#[test]
fn tween_reaches_target_and_fires_cue_once() {
    let mut s = scene();
    let mut sched = TweenScheduler::new();
    let target = Vec3::new(1.0, 2.0, 3.0);
    sched.animate(
        Tween::new(Property::CameraPosition, TweenValue::Vector(target), ms(1000))
            .on_complete(Some(Cue::RevealAnnotation(AnnotationId::BridgeHeight))),
        &s,
    );
    let mut cues = Vec::new();
    sched.update(ms(500), &mut s, &mut cues);
    assert!(cues.is_empty());
    assert!(sched.is_animating(Property::CameraPosition));
    assert!(!approx_vec3(s.camera.position, target));

    sched.update(ms(600), &mut s, &mut cues);
    assert_eq!(s.camera.position, target);
    assert_eq!(
        cues,
        vec![Cue::RevealAnnotation(AnnotationId::BridgeHeight)]
    );
    assert!(sched.is_empty());

    sched.update(ms(100), &mut s, &mut cues);
    assert_eq!(cues.len(), 1);
}

#[test]
fn midpoint_of_cubic_in_out_is_halfway() {
    let mut s = scene();
    s.camera.position = Vec3::ZERO;
    let mut sched = TweenScheduler::new();
    sched.animate(
        Tween::new(
            Property::CameraPosition,
            TweenValue::Vector(Vec3::new(10.0, 0.0, 0.0)),
            ms(1000),
        ),
        &s,
    );
    sched.update(ms(500), &mut s, &mut Vec::new());
    assert!(approx_vec3(s.camera.position, Vec3::new(5.0, 0.0, 0.0)));
}

#[test]
fn starting_on_same_property_replaces_and_drops_old_cue() {
    let mut s = scene();
    let mut sched = TweenScheduler::new();
    let first = Tween::new(
        Property::CameraPosition,
        TweenValue::Vector(Vec3::new(100.0, 0.0, 0.0)),
        ms(1000),
    )
    .on_complete(Some(Cue::RevealAnnotation(AnnotationId::BridgeLength)));
    assert!(!sched.animate(first, &s));
    let mut cues = Vec::new();
    sched.update(ms(400), &mut s, &mut cues);

    let second = Tween::new(
        Property::CameraPosition,
        TweenValue::Vector(Vec3::new(-5.0, 0.0, 0.0)),
        ms(1000),
    );
    assert!(sched.animate(second, &s));
    assert_eq!(sched.len(), 1);

    sched.update(ms(2000), &mut s, &mut cues);
    assert!(cues.is_empty(), "replaced tween must not fire its cue");
    assert_eq!(s.camera.position, Vec3::new(-5.0, 0.0, 0.0));
}

#[test]
fn independent_properties_run_in_parallel() {
    let mut s = scene();
    let mut sched = TweenScheduler::new();
    sched.animate(
        Tween::new(
            Property::LineScale(AnnotationId::BridgeWidth),
            TweenValue::Vector(Vec3::ONE),
            ms(300),
        ),
        &s,
    );
    sched.animate(
        Tween::new(
            Property::LabelScale(AnnotationId::BridgeWidth),
            TweenValue::Vector(Vec3::ONE),
            ms(300),
        ),
        &s,
    );
    assert_eq!(sched.len(), 2);
    sched.update(ms(300), &mut s, &mut Vec::new());
    let a = s.annotation(AnnotationId::BridgeWidth).unwrap();
    assert_eq!(a.line_scale, Vec3::ONE);
    assert_eq!(a.label_scale, Vec3::ONE);
}

#[test]
fn zero_duration_snaps_on_next_update() {
    let mut s = scene();
    let mut sched = TweenScheduler::new();
    let q = Quat::from_rotation_y(1.0);
    sched.animate(
        Tween::new(
            Property::CameraRotation,
            TweenValue::Rotation(q),
            Duration::ZERO,
        ),
        &s,
    );
    sched.update(Duration::ZERO, &mut s, &mut Vec::new());
    assert!(approx_quat(s.camera.rotation, q));
}

#[test]
fn rotation_tween_stays_normalized() {
    let mut s = scene();
    let mut sched = TweenScheduler::new();
    let target = Quat::from_rotation_x(-1.2) * Quat::from_rotation_z(2.0);
    sched.animate(
        Tween::new(
            Property::CameraRotation,
            TweenValue::Rotation(target),
            ms(1000),
        ),
        &s,
    );
    for _ in 0..10 {
        sched.update(ms(50), &mut s, &mut Vec::new());
        assert!((s.camera.rotation.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn mismatched_value_kind_snaps_to_target() {
    let from = TweenValue::Vector(Vec3::ZERO);
    let to = TweenValue::Rotation(Quat::IDENTITY);
    assert_eq!(from.interpolate(to, 0.1), to);
}

#[test]
fn scene_state_samples_every_property() {
    let s = scene();
    assert!(s.sample(Property::CameraPosition).is_some());
    assert!(s.sample(Property::CameraRotation).is_some());
    for id in AnnotationId::ALL {
        assert!(s.sample(Property::LineScale(id)).is_some());
        assert!(s.sample(Property::LabelScale(id)).is_some());
    }
}
