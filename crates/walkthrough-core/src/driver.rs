use crate::choreographer::Choreographer;
use crate::error::Result;
use crate::overlay::Overlay;
use crate::render::{LayerPair, RenderLayer};
use crate::state::SceneState;
use std::time::Duration;

/// Caller-supplied work run at the top of every frame.
pub trait FrameHook {
    fn on_frame(&mut self, scene: &mut SceneState, dt: Duration);
}

impl FrameHook for () {
    fn on_frame(&mut self, _scene: &mut SceneState, _dt: Duration) {}
}

/// One frame = hook, render both layers, advance tweens once.
///
/// The scheduler is stepped exactly once per frame no matter how many layers
/// draw, so interpolation runs at wall-clock speed.
pub struct AnimationDriver<H = ()> {
    hook: H,
}

impl<H: FrameHook> AnimationDriver<H> {
    pub fn new(hook: H) -> Self {
        Self { hook }
    }

    pub fn tick<W, C, O>(
        &mut self,
        dt: Duration,
        choreographer: &mut Choreographer,
        layers: &mut LayerPair<W, C>,
        overlay: &mut O,
    ) -> Result<()>
    where
        W: RenderLayer,
        C: RenderLayer,
        O: Overlay,
    {
        self.hook.on_frame(choreographer.scene_mut(), dt);
        let rendered = layers.render(choreographer.scene());
        choreographer.advance(dt, overlay);
        rendered
    }
}

impl Default for AnimationDriver<()> {
    fn default() -> Self {
        Self::new(())
    }
}
