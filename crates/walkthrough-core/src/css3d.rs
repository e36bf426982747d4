//! CSS `matrix3d` strings that place DOM labels in the WebGL camera's space.
//!
//! The view element gets a `perspective` equal to the focal length in pixels,
//! the camera element the inverse camera transform, and each label its world
//! transform. CSS has y pointing down, hence the negated terms.

use crate::camera::CameraRig;
use crate::constants::CSS_EPSILON;
use glam::{Mat4, Quat, Vec3};
use std::fmt::Write;

#[inline]
pub fn epsilon(value: f64) -> f64 {
    if value.abs() < CSS_EPSILON {
        0.0
    } else {
        value
    }
}

/// Focal length in CSS pixels for a viewport `height` pixels tall.
#[inline]
pub fn focal_length_px(fov_deg: f32, height: u32) -> f64 {
    let half = height as f64 * 0.5;
    half / (fov_deg as f64 * 0.5).to_radians().tan()
}

fn matrix3d(values: [f64; 16]) -> String {
    let mut out = String::from("matrix3d(");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        _ = write!(out, "{}", epsilon(*v));
    }
    out.push(')');
    out
}

fn elements(m: &Mat4) -> [f64; 16] {
    m.to_cols_array().map(|v| v as f64)
}

/// Inverse camera transform with y flipped.
pub fn camera_css_matrix(view: &Mat4) -> String {
    let e = elements(view);
    matrix3d([
        e[0], -e[1], e[2], e[3], e[4], -e[5], e[6], e[7], e[8], -e[9], e[10], e[11], e[12], -e[13],
        e[14], e[15],
    ])
}

/// Object world transform, centred on its element.
pub fn object_css_matrix(world: &Mat4) -> String {
    let e = elements(world);
    format!(
        "translate(-50%,-50%){}",
        matrix3d([
            e[0], e[1], e[2], e[3], -e[4], -e[5], -e[6], -e[7], e[8], e[9], e[10], e[11], e[12],
            e[13], e[14], e[15],
        ])
    )
}

/// Transform for the camera element of a `width`×`height` viewport.
pub fn camera_transform(camera: &CameraRig, width: u32, height: u32) -> String {
    let fov = focal_length_px(camera.fov_deg, height);
    format!(
        "translateZ({}px){}translate({}px,{}px)",
        fov,
        camera_css_matrix(&camera.view_matrix()),
        width as f64 * 0.5,
        height as f64 * 0.5
    )
}

#[inline]
pub fn label_world_matrix(anchor: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, rotation, anchor)
}
