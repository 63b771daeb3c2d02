//! JSON scene description
//!
//! ```json
//! {
//!   "camera":     { "fov": 30, "position": {"x":0,"y":0,"z":0}, "rotation": {...} },
//!   "pointlight": { "position": {...}, "emission": {"x":200,"y":200,"z":200} },
//!   "objects": [
//!     { "kind": "sphere", "position": {...}, "rotation": {...},
//!       "reflection": 0.5, "shininess": 15, "color": {...},
//!       "params": { "radius": 1.5 } }
//!   ]
//! }
//! ```
//!
//! Every field is optional; missing numbers read as 0. Shape `params` differ
//! per kind (`cone` takes an array `[r1, r2, h]`), so they are kept as raw
//! JSON until the kind is known.
//!
//! # Optimizations
//! - **Streaming I/O**: `serde_json::from_reader` / `to_writer_pretty` over
//!   `BufReader` / `BufWriter`.

use crate::primitives::ShapeType;
use crate::scene::SceneError;
use crate::shapes::{
    Box3d, Cone, Material, Octahedron, Plane, Pose, Shape, ShapeError, Sphere, Torus,
};
use crate::types::Color;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// `{x, y, z}` object
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorDescription {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl VectorDescription {
    /// Create from components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        VectorDescription { x, y, z }
    }
}

impl From<VectorDescription> for DVec3 {
    fn from(v: VectorDescription) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for VectorDescription {
    fn from(v: DVec3) -> Self {
        VectorDescription::new(v.x, v.y, v.z)
    }
}

/// Camera block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    /// Vertical field of view in degrees
    pub fov: f64,
    /// Camera position
    pub position: VectorDescription,
    /// Camera Euler angles in degrees
    pub rotation: VectorDescription,
}

/// Point light block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightDescription {
    /// Light position
    pub position: VectorDescription,
    /// RGB emission, typically 0..=255
    pub emission: VectorDescription,
}

/// One entry of `objects`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectDescription {
    /// `plane`, `box`, `sphere`, `torus`, `octahedron` or `cone`
    pub kind: String,
    /// Shape position
    pub position: VectorDescription,
    /// Euler angles in degrees
    pub rotation: VectorDescription,
    /// Mirror reflection in [0, 1]
    pub reflection: f64,
    /// Specular exponent
    pub shininess: f64,
    /// Base color
    pub color: VectorDescription,
    /// Kind-specific parameters
    pub params: Value,
}

fn param(params: &Value, key: &str) -> f64 {
    params.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn param_at(params: &Value, index: usize) -> f64 {
    params.get(index).and_then(Value::as_f64).unwrap_or(0.0)
}

fn vector_param(params: &Value, key: &str) -> DVec3 {
    let v = params.get(key);
    let component = |c: &str| v.and_then(|v| v.get(c)).and_then(Value::as_f64).unwrap_or(0.0);
    DVec3::new(component("x"), component("y"), component("z"))
}

impl ObjectDescription {
    /// Parsed `kind`, `None` if unsupported
    pub fn shape_type(&self) -> Option<ShapeType> {
        ShapeType::from_name(&self.kind)
    }

    /// Build the validated shape for `kind`
    pub fn to_shape(&self, kind: ShapeType) -> Result<Shape, ShapeError> {
        let pose = Pose::new(self.position.into(), self.rotation.into())?;
        let c = self.color;
        let material = Material::new(Color::new(c.x, c.y, c.z), self.reflection, self.shininess)?;
        let p = &self.params;

        let shape = match kind {
            ShapeType::Plane => Shape::new(
                pose,
                material,
                Plane::new(vector_param(p, "normal"), param(p, "displacement"))?,
            ),
            ShapeType::Box => Shape::new(pose, material, Box3d::new(vector_param(p, "extents"))?),
            ShapeType::Sphere => Shape::new(pose, material, Sphere::new(param(p, "radius"))?),
            ShapeType::Torus => {
                Shape::new(pose, material, Torus::new(param(p, "r1"), param(p, "r2"))?)
            }
            ShapeType::Octahedron => Shape::new(pose, material, Octahedron::new(param(p, "s"))?),
            ShapeType::Cone => Shape::new(
                pose,
                material,
                Cone::new(param_at(p, 0), param_at(p, 1), param_at(p, 2))?,
            ),
        };
        Ok(shape)
    }
}

/// Complete scene file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Camera
    pub camera: CameraDescription,
    /// The single point light
    pub pointlight: LightDescription,
    /// Shapes
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    /// Read a description from a JSON file (streaming)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SceneError::SceneFileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let description = serde_json::from_reader(BufReader::new(file))?;
        Ok(description)
    }

    /// Parse a description from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the description as pretty JSON (streaming)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Serialize to a JSON string
    pub fn to_json_string(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
