// Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;
use walkthrough_core::{
    Overlay, OverlayId, RenderLayer, Result, SceneState, TitlePosition, WalkthroughError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCall {
    Show(OverlayId),
    Hide(OverlayId),
    Title(String, TitlePosition),
    HideTitle,
}

/// In-memory overlay that records every call and the resulting visibility.
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    pub visible: BTreeSet<OverlayId>,
    pub title: Option<(String, TitlePosition)>,
    pub calls: Vec<OverlayCall>,
}

impl RecordingOverlay {
    pub fn is_visible(&self, id: OverlayId) -> bool {
        self.visible.contains(&id)
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_ref().map(|(t, _)| t.as_str())
    }
}

impl Overlay for RecordingOverlay {
    fn show_overlay(&mut self, id: OverlayId) {
        self.visible.insert(id);
        self.calls.push(OverlayCall::Show(id));
    }

    fn hide_overlay(&mut self, id: OverlayId) {
        self.visible.remove(&id);
        self.calls.push(OverlayCall::Hide(id));
    }

    fn set_title(&mut self, text: &str, position: TitlePosition) {
        self.title = Some((text.to_string(), position));
        self.calls.push(OverlayCall::Title(text.to_string(), position));
    }

    fn hide_title(&mut self) {
        self.title = None;
        self.calls.push(OverlayCall::HideTitle);
    }
}

/// Render layer that counts calls and can be told to fail.
#[derive(Debug, Default)]
pub struct CountingLayer {
    pub renders: usize,
    pub sizes: Vec<(u32, u32)>,
    pub fail: bool,
    pub last_camera_position: Option<glam::Vec3>,
}

impl RenderLayer for CountingLayer {
    fn render(&mut self, scene: &SceneState) -> Result<()> {
        self.renders += 1;
        self.last_camera_position = Some(scene.camera.position);
        if self.fail {
            return Err(WalkthroughError::RenderBackend("surface lost".into()));
        }
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }
}

pub fn approx_vec3(a: glam::Vec3, b: glam::Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}

pub fn approx_quat(a: glam::Quat, b: glam::Quat) -> bool {
    // q and -q are the same rotation
    a.dot(b).abs() > 1.0 - 1e-5
}
