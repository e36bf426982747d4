mod common;

use common::{approx_vec3, CountingLayer, RecordingOverlay};
use std::time::Duration;
use walkthrough_core::{
    AnimationDriver, Choreographer, FrameHook, LayerPair, SceneState, ScreenMeasures, Viewport,
    WalkthroughError,
};

fn setup() -> (Choreographer, LayerPair<CountingLayer, CountingLayer>) {
    let screen = ScreenMeasures::default();
    (
        Choreographer::new(SceneState::bridge(&screen), screen),
        LayerPair::new(CountingLayer::default(), CountingLayer::default()),
    )
}

#[test]
fn tick_renders_both_layers_from_same_state() {
    let (mut c, mut layers) = setup();
    let mut overlay = RecordingOverlay::default();
    let mut driver: AnimationDriver = AnimationDriver::default();
    driver
        .tick(Duration::from_millis(16), &mut c, &mut layers, &mut overlay)
        .unwrap();
    assert_eq!(layers.webgl.renders, 1);
    assert_eq!(layers.css.renders, 1);
    assert_eq!(
        layers.webgl.last_camera_position,
        layers.css.last_camera_position
    );
}

#[test]
fn scheduler_advances_once_per_frame() {
    let (mut c, mut layers) = setup();
    let mut overlay = RecordingOverlay::default();
    let mut driver: AnimationDriver = AnimationDriver::default();
    let start = c.scene().camera.position;
    c.apply_slide(3, &mut overlay);
    let target = walkthrough_core::recipe_for(3).unwrap().camera_position.wide;

    let half = Duration::from_millis(500);
    driver.tick(half, &mut c, &mut layers, &mut overlay).unwrap();
    // two layers drew, but the camera only moved half a tween
    let midpoint = (start + target) * 0.5;
    assert!(approx_vec3(c.scene().camera.position, midpoint));
    assert_eq!(layers.webgl.last_camera_position, Some(start));

    driver.tick(half, &mut c, &mut layers, &mut overlay).unwrap();
    assert_eq!(c.scene().camera.position, target);
    assert_eq!(layers.css.renders, 2);
}

#[test]
fn failing_layer_does_not_stop_the_frame() {
    let (mut c, mut layers) = setup();
    layers.webgl.fail = true;
    let mut overlay = RecordingOverlay::default();
    let mut driver: AnimationDriver = AnimationDriver::default();
    c.apply_slide(2, &mut overlay);

    let dt = Duration::from_millis(1000);
    let err = driver.tick(dt, &mut c, &mut layers, &mut overlay).unwrap_err();
    assert!(matches!(err, WalkthroughError::RenderBackend(_)));
    assert!(err.is_fatal());
    assert_eq!(layers.css.renders, 1);
    assert!(c.scheduler().len() > 0, "annotation reveal should have started");
}

#[test]
fn resize_sizes_both_layers_together() {
    let (_, mut layers) = setup();
    assert!(layers.resize(1280, 720));
    assert!(!layers.resize(1280, 720));
    assert!(!layers.resize(0, 720));
    assert!(layers.resize(390, 844));
    assert_eq!(layers.webgl.sizes, vec![(1280, 720), (390, 844)]);
    assert_eq!(layers.webgl.sizes, layers.css.sizes);
    assert_eq!(
        layers.viewport(),
        Viewport {
            width: 390,
            height: 844
        }
    );
}

struct Spin(u32);

impl FrameHook for Spin {
    fn on_frame(&mut self, scene: &mut SceneState, _dt: Duration) {
        self.0 += 1;
        scene.camera.position.y += 1.0;
    }
}

#[test]
fn hook_runs_before_render() {
    let (mut c, mut layers) = setup();
    let mut overlay = RecordingOverlay::default();
    let mut driver = AnimationDriver::new(Spin(0));
    let y = c.scene().camera.position.y;
    driver
        .tick(Duration::ZERO, &mut c, &mut layers, &mut overlay)
        .unwrap();
    assert_eq!(layers.webgl.last_camera_position.unwrap().y, y + 1.0);
}
