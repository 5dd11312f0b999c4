//! TOML scene description.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use raypick_math::{Point3, Transform, Vec3};
use raypick_raycast::{ObjectId, RayCaster, RaycastSettings};
use raypick_scene::{shapes, Mesh, NodeId, Scene};
use serde::{Deserialize, Serialize};

/// Top level of a scene file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    /// Query settings.
    pub settings: RaycastSettings,
    /// Objects in declaration order.
    #[serde(rename = "object")]
    pub objects: Vec<ObjectSpec>,
}

/// One `[[object]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Name of an object declared earlier in the file.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub translate: [f64; 3],
    /// Euler XYZ rotation in degrees.
    #[serde(default)]
    pub rotate: [f64; 3],
    #[serde(default = "default_scale")]
    pub scale: [f64; 3],
    pub mesh: MeshSpec,
}

fn default_active() -> bool {
    true
}

fn default_scale() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

/// Geometry source for an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MeshSpec {
    /// Axis-aligned cube centered at the origin.
    Cube { half_extent: f64 },
    /// Rectangle in the XY plane facing +Z.
    Quad { width: f64, height: f64 },
    /// Explicit triangles, flat or indexed.
    Triangles {
        positions: Vec<[f64; 3]>,
        #[serde(default)]
        indices: Option<Vec<u32>>,
    },
}

impl MeshSpec {
    fn build(&self) -> raypick_scene::Result<Mesh> {
        match self {
            MeshSpec::Cube { half_extent } => Ok(shapes::cube(*half_extent)),
            MeshSpec::Quad { width, height } => Ok(shapes::quad(*width, *height)),
            MeshSpec::Triangles { positions, indices } => {
                let positions = positions
                    .iter()
                    .map(|&[x, y, z]| Point3::new(x, y, z))
                    .collect();
                match indices {
                    Some(indices) => Mesh::indexed(positions, indices.clone()),
                    None => Mesh::flat(positions),
                }
            }
        }
    }
}

impl ObjectSpec {
    fn local_transform(&self) -> Transform {
        let [tx, ty, tz] = self.translate;
        let [rx, ry, rz] = self.rotate;
        let [sx, sy, sz] = self.scale;
        Transform::from_trs(
            Vec3::new(tx, ty, tz),
            Vec3::new(rx.to_radians(), ry.to_radians(), rz.to_radians()),
            Vec3::new(sx, sy, sz),
        )
    }
}

impl SceneFile {
    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse a scene description from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let file: SceneFile = toml::from_str(text)?;
        file.settings.validate()?;
        Ok(file)
    }

    /// Build the node graph and meshes.
    pub fn build(&self) -> Result<LoadedScene> {
        let mut scene = Scene::new();
        let mut by_name: HashMap<&str, NodeId> = HashMap::new();
        let mut objects = Vec::with_capacity(self.objects.len());

        for spec in &self.objects {
            if by_name.contains_key(spec.name.as_str()) {
                bail!("duplicate object name '{}'", spec.name);
            }
            let local = spec.local_transform();
            let node = match &spec.parent {
                Some(parent) => {
                    let Some(&parent_id) = by_name.get(parent.as_str()) else {
                        bail!(
                            "object '{}': parent '{}' is not declared before it",
                            spec.name,
                            parent
                        );
                    };
                    scene.add_child(parent_id, spec.name.as_str(), local)?
                }
                None => scene.add_node(spec.name.as_str(), local),
            };
            scene.set_active(node, spec.active)?;

            let mesh = spec
                .mesh
                .build()
                .with_context(|| format!("object '{}': invalid mesh", spec.name))?;
            by_name.insert(spec.name.as_str(), node);
            objects.push(LoadedObject { node, mesh });
        }

        Ok(LoadedScene {
            scene,
            objects,
            settings: self.settings.clone(),
        })
    }
}

/// A node paired with the mesh it carries.
#[derive(Debug)]
pub struct LoadedObject {
    pub node: NodeId,
    pub mesh: Mesh,
}

/// A scene file turned into a node graph and meshes.
#[derive(Debug)]
pub struct LoadedScene {
    pub scene: Scene,
    pub objects: Vec<LoadedObject>,
    pub settings: RaycastSettings,
}

impl LoadedScene {
    /// Register every object, in file order, with a new ray caster.
    ///
    /// Ids handed out by the caster index into [`objects`](Self::objects).
    pub fn caster(&self) -> Result<RayCaster<'_>> {
        let mut caster = RayCaster::with_settings(self.settings.clone())?;
        for object in &self.objects {
            let Some(node) = self.scene.get(object.node) else {
                bail!("scene lost node {:?}", object.node);
            };
            caster.add_object(node, &object.mesh);
        }
        Ok(caster)
    }

    /// Name of the object registered under `id`.
    pub fn name(&self, id: ObjectId) -> &str {
        self.objects
            .get(id.index())
            .and_then(|object| self.scene.get(object.node))
            .map_or("?", |node| node.name())
    }
}
