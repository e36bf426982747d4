use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

// Pose the scene opens with, before any slide transition has run.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(13.169_796, 15.5, -10.0);
pub const INITIAL_CAMERA_ROTATION: [f32; 4] =
    [0.372_728_86, 0.119_044_64, 0.042_023_153, -0.919_312_6];

/// Perspective camera shared by the WebGL and CSS-3D layers.
///
/// Rotation is always held as a normalized quaternion; Euler triples only
/// appear at the edges (recipe data) and go through [`euler_xyz`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub rotation: Quat,
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        let [x, y, z, w] = INITIAL_CAMERA_ROTATION;
        Self {
            position: INITIAL_CAMERA_POSITION,
            rotation: Quat::from_xyzw(x, y, z, w).normalize(),
            fov_deg: CAMERA_FOV_DEG,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl CameraRig {
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    #[inline]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Projection with a `[0, 1]` depth range.
    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_deg.to_radians(),
            self.aspect.max(1e-6),
            self.near,
            self.far,
        )
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Quaternion for an intrinsic X-then-Y-then-Z Euler triple (radians).
#[inline]
pub fn euler_xyz(angles: [f32; 3]) -> Quat {
    Quat::from_euler(EulerRot::XYZ, angles[0], angles[1], angles[2])
}

/// Same as [`euler_xyz`] with the angles given in degrees.
#[inline]
pub fn euler_xyz_deg(degrees: [f32; 3]) -> Quat {
    euler_xyz([
        degrees[0].to_radians(),
        degrees[1].to_radians(),
        degrees[2].to_radians(),
    ])
}

/// Orientation that points an object's +Z axis from `eye` towards `target`.
///
/// Returns `None` when the two points coincide.
pub fn look_at_rotation(eye: Vec3, target: Vec3, up: Vec3) -> Option<Quat> {
    let z = (target - eye).try_normalize()?;
    let mut x = up.cross(z);
    if x.length_squared() < 1e-12 {
        // up is parallel to the view direction; nudge it
        let nudged = if up.z.abs() > 0.9999 {
            up + Vec3::new(0.0001, 0.0, 0.0)
        } else {
            up + Vec3::new(0.0, 0.0, 0.0001)
        };
        x = nudged.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize())
}
