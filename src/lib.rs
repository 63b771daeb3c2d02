//! # sphere-sdf
//!
//! A SIMD-accelerated sphere tracer for scenes of implicit surfaces.
//!
//! A scene holds a camera, one point light and up to 64 shapes per kind
//! (plane, box, sphere, torus, octahedron, capped cone). Shapes of the same
//! kind are packed into struct-of-arrays batches and evaluated four at a
//! time with `wide::f64x4`; the marcher caches the nearest shape between
//! full scans and shades hits with ambient, diffuse and specular light,
//! shadows and recursive mirror reflections.
//!
//! ## Features
//!
//! - **Primitives**: closed-form SDFs in double precision
//! - **Batches**: 4-lane SIMD kernels with sentinel padding
//! - **Raymarching**: nearest / second-nearest caching heuristic
//! - **Shading**: Phong-like lighting, ring-sampled shadows, reflections
//! - **Scenes**: JSON descriptions and a procedural generator
//! - **Output**: binary PPM
//!
//! ## Example
//!
//! ```rust
//! use sphere_sdf::prelude::*;
//!
//! let description = generate(&ShapeCounts::from_array([1, 1, 1, 1, 1, 1]));
//! let scene = Scene::from_description(&description).unwrap();
//!
//! let image = render(&scene, &RenderConfig::fast(), 8, 6);
//! assert_eq!(image.pixels().len(), 48);
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod io;
pub mod primitives;
pub mod raycast;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod stats;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::batch::{Batches, DistanceBuffer, ShapeBatch, BATCH_CAPACITY};
    pub use crate::io::{save_ppm, write_ppm, IoError};
    pub use crate::primitives::ShapeType;
    pub use crate::raycast::{nearest_shapes, Hit, NearestShapes, Tracer};
    pub use crate::render::{render, render_with_stats, Image, PixelGrid, RenderConfig};
    pub use crate::scene::generator::{generate, ShapeCounts};
    pub use crate::scene::{Camera, PointLight, Scene, SceneDescription, SceneError};
    pub use crate::shapes::{
        Box3d, Cone, Material, Octahedron, Plane, Pose, Shape, ShapeError, ShapeId, ShapeKind,
        Sphere, Torus,
    };
    pub use crate::stats::MarchStats;
    pub use crate::types::{Color, Ray, VectorExt};
}
