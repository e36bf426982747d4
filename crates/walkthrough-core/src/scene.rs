//! Declarative scene content and the registry of what actually loaded.

use crate::camera::euler_xyz_deg;
use crate::error::WalkthroughError;
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneRole {
    Skybox,
    Model,
    Billboard,
}

/// Flat textured plane standing in the scenery.
#[derive(Debug, Clone, PartialEq)]
pub struct BillboardSpec {
    pub name: &'static str,
    pub texture: &'static str,
    pub size: [f32; 2],
    pub position: Vec3,
    /// XYZ Euler angles in degrees.
    pub rotation_deg: [f32; 3],
    /// Grey level multiplied into the texture.
    pub tint: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneManifest {
    pub skybox_size: f32,
    /// Faces in +x, -x, +y, -y, +z, -z order.
    pub skybox_faces: [&'static str; 6],
    pub model: &'static str,
    pub model_color_boost: f32,
    pub billboards: Vec<BillboardSpec>,
}

/// One load unit: every path must resolve for the object to appear.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRequest {
    pub object: SceneObject,
    pub paths: Vec<String>,
}

impl SceneManifest {
    pub fn ponte_d_luis() -> Self {
        Self {
            skybox_size: 10000.0,
            skybox_faces: [
                "textures/sky-box-ponte-d-luis/pontedluis_mid.jpg",
                "textures/sky-box-ponte-d-luis/pontedluis_mid.jpg",
                "textures/sky-box-ponte-d-luis/pontedluis_sky.jpg",
                "textures/sky-box-ponte-d-luis/pontedluis_dn.jpg",
                "textures/sky-box-ponte-d-luis/pontedluis_mid.jpg",
                "textures/sky-box-ponte-d-luis/pontedluis_mid.jpg",
            ],
            model: "models/ponte-d-luis/scene.gltf",
            model_color_boost: 1.5,
            billboards: vec![
                BillboardSpec {
                    name: "PlaneFacingDoro",
                    texture: "textures/scenarios/ponte-d-luis/pontedluis_facing_doro.png",
                    size: [140.0, 60.0],
                    position: Vec3::new(25.0, 0.0, -80.0),
                    rotation_deg: [0.0, 0.0, 0.0],
                    tint: 0.15,
                },
                BillboardSpec {
                    name: "PlaneFacingSea",
                    texture: "textures/scenarios/ponte-d-luis/pontedluis_facing_sea.png",
                    size: [140.0, 40.0],
                    position: Vec3::new(25.0, 0.0, 10.0),
                    rotation_deg: [0.0, 180.0, 0.0],
                    tint: 0.15,
                },
                BillboardSpec {
                    name: "Monastery",
                    texture: "textures/scenarios/ponte-d-luis/monastery.png",
                    size: [5.0, 5.0],
                    position: Vec3::new(54.569_22, 17.563_883, -39.822_51),
                    rotation_deg: [0.0, 300.0, 0.0],
                    tint: 0.15,
                },
                BillboardSpec {
                    name: "Sun",
                    texture: "textures/scenarios/ponte-d-luis/sun.png",
                    size: [20.0, 20.0],
                    position: Vec3::new(40.0, 200.0, -60.0),
                    rotation_deg: [25.0, 0.0, 0.0],
                    tint: 1.0,
                },
            ],
        }
    }

    /// Everything the content provider has to fetch, one request per object.
    pub fn requests(&self) -> Vec<AssetRequest> {
        let mut requests = Vec::with_capacity(self.billboards.len() + 2);
        requests.push(AssetRequest {
            object: SceneObject {
                name: "SkyBox".into(),
                role: SceneRole::Skybox,
                transform: Mat4::IDENTITY,
                size: [self.skybox_size, self.skybox_size],
                tint: 1.0,
            },
            paths: self.skybox_faces.iter().map(|p| p.to_string()).collect(),
        });
        requests.push(AssetRequest {
            object: SceneObject {
                name: "PonteDLuis".into(),
                role: SceneRole::Model,
                transform: Mat4::IDENTITY,
                size: [0.0, 0.0],
                tint: self.model_color_boost,
            },
            paths: vec![self.model.to_string()],
        });
        for b in &self.billboards {
            requests.push(AssetRequest {
                object: SceneObject {
                    name: b.name.into(),
                    role: SceneRole::Billboard,
                    transform: Mat4::from_rotation_translation(
                        euler_xyz_deg(b.rotation_deg),
                        b.position,
                    ),
                    size: b.size,
                    tint: b.tint,
                },
                paths: vec![b.texture.to_string()],
            });
        }
        requests
    }
}

/// A visual object that loaded and can be attached to the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub role: SceneRole,
    pub transform: Mat4,
    pub size: [f32; 2],
    pub tint: f32,
}

/// Lookup of loaded scene objects by name or role.
pub trait SceneContent {
    fn object(&self, name: &str) -> Option<&SceneObject>;
    fn objects_with_role(&self, role: SceneRole) -> Vec<&SceneObject>;
}

#[derive(Debug, Default, Clone)]
pub struct ContentRegistry {
    objects: FnvHashMap<String, SceneObject>,
    failures: Vec<WalkthroughError>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: SceneObject) {
        log::info!("[content] loaded {} ({:?})", object.name, object.role);
        self.objects.insert(object.name.clone(), object);
    }

    /// Log a failed load; the object stays absent and is not retried.
    pub fn record_failure(&mut self, error: WalkthroughError) {
        log::error!("[content] {}", error);
        self.failures.push(error);
    }

    pub fn failures(&self) -> &[WalkthroughError] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SceneContent for ContentRegistry {
    fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }

    fn objects_with_role(&self, role: SceneRole) -> Vec<&SceneObject> {
        let mut found: Vec<&SceneObject> =
            self.objects.values().filter(|o| o.role == role).collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }
}
