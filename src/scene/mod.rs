//! Scene: camera, point light and shapes
//!
//! The flat shape list owns every [`Shape`]; the per-kind [`Batches`] hold a
//! numeric copy in struct-of-arrays form for the SIMD resolver. Both are
//! filled together by [`Scene::add_shape`] and never mutated afterwards, so
//! a scene can be shared read-only across rendering threads.

mod description;
pub mod generator;

pub use description::{
    CameraDescription, LightDescription, ObjectDescription, SceneDescription, VectorDescription,
};

use crate::batch::{BatchFull, Batches};
use crate::primitives::ShapeType;
use crate::shapes::{Shape, ShapeError, ShapeId};
use crate::types::Color;
use glam::DVec3;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Scene construction errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// Scene file could not be opened
    #[error("scene file not found: {}", path.display())]
    SceneFileNotFound {
        /// Requested path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON
    #[error("JSON syntax error: {0}")]
    JsonSyntax(#[from] serde_json::Error),

    /// A shape entry has invalid parameters
    #[error("invalid {kind} at objects[{index}]: {source}")]
    InvalidShape {
        /// Position in the `objects` array
        index: usize,
        /// Shape kind
        kind: ShapeType,
        /// Validation failure
        #[source]
        source: ShapeError,
    },

    /// Camera parameters are unusable
    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    /// Too many shapes of one kind
    #[error("too many {kind} shapes (capacity {capacity})")]
    BatchFull {
        /// Shape kind
        kind: ShapeType,
        /// Batch capacity
        capacity: usize,
    },
}

impl From<BatchFull> for SceneError {
    fn from(e: BatchFull) -> Self {
        SceneError::BatchFull {
            kind: e.kind,
            capacity: e.capacity,
        }
    }
}

/// Pinhole camera
///
/// `rotation` is kept for completeness; rays are always cast along +z from
/// `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    fov: f64,
    /// Camera position
    pub position: DVec3,
    /// Euler angles in degrees (not applied to rays)
    pub rotation: DVec3,
}

impl Camera {
    /// Create a camera; `fov` is in degrees and must lie in (0, 180)
    pub fn new(fov: f64, position: DVec3, rotation: DVec3) -> Result<Self, SceneError> {
        if !(fov > 0.0 && fov < 180.0) {
            return Err(SceneError::InvalidCamera(format!(
                "fov must be in (0, 180) degrees, got {}",
                fov
            )));
        }
        if !position.is_finite() || !rotation.is_finite() {
            return Err(SceneError::InvalidCamera(
                "position and rotation must be finite".into(),
            ));
        }
        Ok(Camera {
            fov,
            position,
            rotation,
        })
    }

    /// Field of view in degrees
    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// `tan(fov / 2)`
    #[inline]
    pub fn half_fov_tan(&self) -> f64 {
        (self.fov.to_radians() * 0.5).tan()
    }
}

/// Single point light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Light position
    pub position: DVec3,
    /// RGB emission, typically in 0..=255
    pub emission: Color,
}

impl PointLight {
    /// Create a point light
    pub fn new(position: DVec3, emission: Color) -> Self {
        PointLight { position, emission }
    }
}

/// Renderable scene
#[derive(Debug, Clone)]
pub struct Scene {
    camera: Camera,
    light: PointLight,
    shapes: Vec<Shape>,
    batches: Box<Batches>,
}

impl Scene {
    /// Empty scene
    pub fn new(camera: Camera, light: PointLight) -> Self {
        Scene {
            camera,
            light,
            shapes: Vec::new(),
            batches: Box::new(Batches::new()),
        }
    }

    /// Add a shape to the flat list and to its kind's batch
    pub fn add_shape(&mut self, shape: Shape) -> Result<ShapeId, SceneError> {
        // bounded by the batch capacities, far below u32::MAX
        let id = ShapeId(self.shapes.len() as u32);
        self.batches.push(id, &shape)?;
        self.shapes.push(shape);
        Ok(id)
    }

    /// Build a scene from a parsed description
    ///
    /// Objects of unsupported kinds are skipped with a warning.
    pub fn from_description(description: &SceneDescription) -> Result<Self, SceneError> {
        let cam = &description.camera;
        let camera = Camera::new(cam.fov, cam.position.into(), cam.rotation.into())?;
        let e = description.pointlight.emission;
        let light = PointLight::new(
            description.pointlight.position.into(),
            Color::new(e.x, e.y, e.z),
        );

        let mut scene = Scene::new(camera, light);
        for (index, object) in description.objects.iter().enumerate() {
            let Some(kind) = object.shape_type() else {
                warn!("Skipping objects[{}]: unsupported kind {:?}", index, object.kind);
                continue;
            };
            let shape = object
                .to_shape(kind)
                .map_err(|source| SceneError::InvalidShape {
                    index,
                    kind,
                    source,
                })?;
            let id = scene.add_shape(shape)?;
            debug!("objects[{}] -> {} {}", index, kind, id);
        }

        info!(
            "Scene: {} shapes, camera fov {} at {:?}, light at {:?}",
            scene.len(),
            scene.camera.fov,
            scene.camera.position,
            scene.light.position
        );
        Ok(scene)
    }

    /// Load a scene from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        info!("Loading scene {}", path.display());
        Self::from_description(&SceneDescription::load(path)?)
    }

    /// Load a scene from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Self::from_description(&SceneDescription::from_json_str(json)?)
    }

    /// Camera
    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Point light
    #[inline]
    pub fn light(&self) -> &PointLight {
        &self.light
    }

    /// All shapes in insertion order
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shape behind a handle
    #[inline]
    pub fn shape(&self, id: ShapeId) -> &Shape {
        &self.shapes[id.index()]
    }

    /// SIMD batches
    #[inline]
    pub fn batches(&self) -> &Batches {
        &self.batches
    }

    /// Number of shapes
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True if the scene has no shapes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
