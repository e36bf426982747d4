use crate::error::Result;
use crate::state::SceneState;

/// One drawing surface fed by the shared scene and camera.
pub trait RenderLayer {
    fn render(&mut self, scene: &SceneState) -> Result<()>;
    fn set_size(&mut self, width: u32, height: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// WebGL layer plus CSS-3D layer, always sized and drawn together.
pub struct LayerPair<W, C> {
    pub webgl: W,
    pub css: C,
    viewport: Viewport,
}

impl<W: RenderLayer, C: RenderLayer> LayerPair<W, C> {
    pub fn new(webgl: W, css: C) -> Self {
        Self {
            webgl,
            css,
            viewport: Viewport::default(),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize both layers. Returns false for empty or unchanged sizes.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let next = Viewport { width, height };
        if width == 0 || height == 0 || next == self.viewport {
            return false;
        }
        self.webgl.set_size(width, height);
        self.css.set_size(width, height);
        self.viewport = next;
        true
    }

    /// Draw both layers from the same scene state. Both always run; the
    /// first error is returned.
    pub fn render(&mut self, scene: &SceneState) -> Result<()> {
        let webgl = self.webgl.render(scene);
        let css = self.css.render(scene);
        webgl.and(css)
    }
}
