//! Render configuration
//!
//! Every numeric constant of the marcher and shader lives here so that it
//! can be tuned per run (the CLI reads it from an optional JSON file).

use serde::{Deserialize, Serialize};

/// Render configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Rays stop once they travel this far
    pub max_distance: f64,
    /// Hit when the distance drops below `trace_threshold * t`
    pub trace_threshold: f64,
    /// Finite difference step for normals
    pub normal_delta: f64,
    /// Offset along the normal for reflected and shadow rays
    pub reflection_bias: f64,
    /// Shadow rays are blocked below this absolute distance
    pub shadow_threshold: f64,
    /// Rings of jittered shadow rays (0 = one hard shadow ray)
    pub shadow_circles: u32,
    /// Jitter spacing between shadow rings
    pub shadow_delta: f64,
    /// Weight of the narrow highlight against the broad one
    pub specular_bias: f64,
    /// Darkening of a fully shadowed point
    pub shadow_max: f64,
    /// Ambient factor
    pub ambient: f64,
    /// Diffuse factor
    pub diffuse: f64,
    /// Step limit per ray
    pub max_steps: u32,
    /// Reflection recursion limit
    pub max_reflection_depth: u32,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_distance: 100.0,
            trace_threshold: 1e-12,
            normal_delta: 1e-5,
            reflection_bias: 1e-4,
            shadow_threshold: 1e-5,
            shadow_circles: 0,
            shadow_delta: 1e-2,
            specular_bias: 0.5,
            shadow_max: 0.9,
            ambient: 0.1,
            diffuse: 0.5,
            max_steps: 4096,
            max_reflection_depth: 16,
            parallel: true,
        }
    }
}

impl RenderConfig {
    /// Preview configuration
    ///
    /// Looser hit threshold, fewer steps and shallow reflections.
    pub fn fast() -> Self {
        RenderConfig {
            trace_threshold: 1e-6,
            max_steps: 512,
            max_reflection_depth: 2,
            ..Default::default()
        }
    }

    /// Soft shadows from two rings of jittered shadow rays
    pub fn soft_shadows() -> Self {
        RenderConfig {
            shadow_circles: 2,
            ..Default::default()
        }
    }

    /// Per-ray darkening of one blocked shadow sample
    #[inline]
    pub fn shadow_step(&self) -> f64 {
        self.shadow_max / (1 + 4 * self.shadow_circles) as f64
    }
}
