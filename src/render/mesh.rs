use glam::{Mat4, Vec3};
use walkthrough_core::SceneState;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl SceneUniforms {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

/// Two triangles over corners given in winding order.
fn push_quad(out: &mut Vec<Vertex>, corners: [Vec3; 4], color: [f32; 4]) {
    for i in [0, 1, 2, 0, 2, 3] {
        out.push(Vertex {
            position: corners[i].to_array(),
            color,
        });
    }
}

/// Camera-facing ribbon along `points`. Zero-length segments are skipped.
pub fn push_ribbon(
    out: &mut Vec<Vertex>,
    points: impl IntoIterator<Item = Vec3>,
    eye: Vec3,
    width: f32,
    color: [f32; 4],
) {
    let mut points = points.into_iter();
    let Some(mut a) = points.next() else {
        return;
    };
    for b in points {
        let dir = b - a;
        let mid = (a + b) * 0.5;
        if let Some(side) = dir.cross(eye - mid).try_normalize() {
            let offset = side * (width * 0.5);
            push_quad(out, [a - offset, b - offset, b + offset, a + offset], color);
        }
        a = b;
    }
}

/// Vertices for one frame. Only annotation lines are drawn; billboards stay
/// in the registry until the layer samples their textures.
pub fn build_scene_vertices(
    scene: &SceneState,
    line_width: f32,
    line_color: [f32; 4],
    out: &mut Vec<Vertex>,
) {
    out.clear();
    let eye = scene.camera.position;
    for annotation in &scene.annotations {
        push_ribbon(out, annotation.scaled_points(), eye, line_width, line_color);
    }
}
