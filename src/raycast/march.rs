//! Cached sphere tracing
//!
//! A full resolve over all batches is expensive, so the marcher trusts the
//! last resolve's owner shape and only evaluates its scalar SDF per step.
//! Any other shape is at least `second_min - traveled` away, so the cached
//! owner stays a safe step while the distance accumulated since the resolve
//! (current step included) is below `second_min`. Once it reaches
//! `second_min`, the marcher resolves again at the current point.
//!
//! # Optimizations
//! - **Owner Cache**: one scalar SDF per step instead of a scan over all shapes.
//! - **Per-Worker Scratch**: each [`Tracer`] owns its [`DistanceBuffer`].
//! - **Iteration Limits**: `max_steps` bounds rays that approach a surface
//!   without reaching the hit threshold.

use super::resolve::{nearest_shapes, NearestShapes};
use crate::batch::DistanceBuffer;
use crate::render::{shade, RenderConfig};
use crate::scene::Scene;
use crate::shapes::ShapeId;
use crate::stats::MarchStats;
use crate::types::{Color, Ray};
use glam::DVec3;

/// Surface hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Shape that was hit
    pub shape: ShapeId,
    /// Hit point
    pub point: DVec3,
    /// Ray parameter at the hit, including any distance traveled before
    /// this ray started
    pub distance: f64,
}

/// Per-worker ray marcher
///
/// Holds the read-only scene and configuration plus the mutable scratch
/// buffer and counters of one rendering thread.
pub struct Tracer<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
    buffer: DistanceBuffer,
    stats: MarchStats,
}

impl<'a> Tracer<'a> {
    /// Create a tracer with its own scratch buffer
    pub fn new(scene: &'a Scene, config: &'a RenderConfig) -> Self {
        Tracer {
            scene,
            config,
            buffer: DistanceBuffer::new(),
            stats: MarchStats::default(),
        }
    }

    /// Scene being rendered
    #[inline]
    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &'a RenderConfig {
        self.config
    }

    /// Counters so far
    #[inline]
    pub fn stats(&self) -> &MarchStats {
        &self.stats
    }

    #[inline]
    pub(crate) fn stats_mut(&mut self) -> &mut MarchStats {
        &mut self.stats
    }

    /// Full resolve at `point`
    #[inline]
    pub fn nearest(&mut self, point: DVec3) -> NearestShapes {
        self.stats.full_resolves += 1;
        nearest_shapes(self.scene, point, &mut self.buffer)
    }

    /// Color seen along a primary ray
    pub fn trace(&mut self, ray: &Ray) -> Color {
        self.trace_from(ray, 0.0, 0)
    }

    /// Color seen along `ray`, which starts `traveled` units into its path
    ///
    /// Misses are black.
    pub fn trace_from(&mut self, ray: &Ray, traveled: f64, depth: u32) -> Color {
        match self.march(ray, traveled) {
            Some(hit) => shade::shade(self, ray, &hit, depth),
            None => Color::BLACK,
        }
    }

    /// March `ray` until it hits a surface or leaves `max_distance`
    ///
    /// The ray parameter starts at `traveled`; the hit threshold scales with it.
    pub fn march(&mut self, ray: &Ray, traveled: f64) -> Option<Hit> {
        self.stats.rays += 1;
        if self.scene.is_empty() {
            return None;
        }

        let mut near = self.nearest(ray.origin);
        let mut owner = near.owner?;
        let mut total = 0.0;
        let mut t = traveled;
        let mut steps = 0;

        while t < self.config.max_distance && steps < self.config.max_steps {
            steps += 1;
            let point = ray.at(t - traveled);
            let mut d = self.scene.shape(owner).distance(point);
            total += d;

            if total >= near.second_min {
                near = self.nearest(point);
                owner = near.owner?;
                d = near.min;
                total = d;
            }

            if d <= self.config.trace_threshold * t {
                self.stats.steps += u64::from(steps);
                return Some(Hit {
                    shape: owner,
                    point,
                    distance: t,
                });
            }
            t += d;
        }

        self.stats.steps += u64::from(steps);
        None
    }

    /// True if a surface lies within `max_t` of `origin` along `direction`
    ///
    /// Same cached march as [`Tracer::march`], but with the absolute
    /// `shadow_threshold` and no shading.
    pub fn object_in_between(&mut self, origin: DVec3, direction: DVec3, max_t: f64) -> bool {
        self.stats.shadow_rays += 1;
        if self.scene.is_empty() {
            return false;
        }

        let mut near = self.nearest(origin);
        let Some(mut owner) = near.owner else {
            return false;
        };
        let mut total = 0.0;
        let mut t = 0.0;
        let mut steps = 0;
        let mut blocked = false;

        while t < max_t && steps < self.config.max_steps {
            steps += 1;
            let point = origin + direction * t;
            let mut d = self.scene.shape(owner).distance(point);
            total += d;

            if total >= near.second_min {
                near = self.nearest(point);
                let Some(o) = near.owner else {
                    break;
                };
                owner = o;
                d = near.min;
                total = d;
            }

            if d < self.config.shadow_threshold {
                blocked = true;
                break;
            }
            t += d;
        }

        self.stats.steps += u64::from(steps);
        if blocked {
            self.stats.blocked_shadow_rays += 1;
        }
        blocked
    }
}
