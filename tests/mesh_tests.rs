// Host-side tests for the WebGL layer's vertex building.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}
mod backends {
    include!("../src/render/backends.rs");
}

use glam::{Mat4, Vec3};
use mesh::*;
use walkthrough_core::{AnnotationId, SceneManifest, SceneRole, SceneState, ScreenMeasures};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[test]
fn ribbon_has_requested_width_and_faces_eye() {
    let mut out = Vec::new();
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(10.0, 0.0, 0.0);
    push_ribbon(&mut out, [a, b], Vec3::new(5.0, 0.0, 10.0), 0.1, WHITE);
    assert_eq!(out.len(), 6);
    let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
    let top = ys.iter().cloned().fold(f32::MIN, f32::max);
    let bottom = ys.iter().cloned().fold(f32::MAX, f32::min);
    let span = top - bottom;
    assert!((span - 0.1).abs() < 1e-5);
    assert!(out.iter().all(|v| v.position[2] == 0.0));
}

#[test]
fn degenerate_segments_are_skipped() {
    let mut out = Vec::new();
    let p = Vec3::new(1.0, 2.0, 3.0);
    push_ribbon(&mut out, [p, p], Vec3::ZERO, 0.1, WHITE);
    push_ribbon(&mut out, [p], Vec3::ZERO, 0.1, WHITE);
    push_ribbon(&mut out, std::iter::empty(), Vec3::ZERO, 0.1, WHITE);
    assert!(out.is_empty());
}

#[test]
fn loaded_billboards_add_no_geometry() {
    let mut scene = SceneState::bridge(&ScreenMeasures::default());
    let mut out = Vec::new();
    build_scene_vertices(&scene, 0.1, WHITE, &mut out);
    let before = out.len();

    for request in SceneManifest::ponte_d_luis().requests() {
        if request.object.role == SceneRole::Billboard {
            scene.content.insert(request.object);
        }
    }
    build_scene_vertices(&scene, 0.1, WHITE, &mut out);
    assert_eq!(out.len(), before);
}

#[test]
fn shown_line_adds_one_ribbon_per_segment() {
    let mut scene = SceneState::bridge(&ScreenMeasures::default());
    let mut out = Vec::new();
    build_scene_vertices(&scene, 0.1, WHITE, &mut out);
    let hidden_count = out.len();

    scene
        .annotation_mut(AnnotationId::BridgeHeight)
        .unwrap()
        .line_scale = Vec3::ONE;
    build_scene_vertices(&scene, 0.1, WHITE, &mut out);
    assert_eq!(out.len(), hidden_count + 6);
}

#[test]
fn instance_keeps_gl_next_to_webgpu() {
    let desc = backends::instance_descriptor();
    assert!(desc.backends.contains(wgpu::Backends::GL));
    assert!(desc.backends.contains(wgpu::Backends::BROWSER_WEBGPU));
}

#[test]
fn uniforms_pack_column_major() {
    let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let u = SceneUniforms::new(m);
    assert_eq!(u.view_proj[3], [1.0, 2.0, 3.0, 1.0]);
    assert_eq!(std::mem::size_of::<Vertex>(), 28);
}
