//! March statistics
//!
//! Plain counters owned by each [`crate::raycast::Tracer`]. Workers keep
//! their own copy and the totals are merged with `+=` afterwards.

use std::ops::{Add, AddAssign};

/// Work counters for one or more rendered rays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarchStats {
    /// Rays marched (primary and reflected)
    pub rays: u64,
    /// Marching steps, shadow rays included
    pub steps: u64,
    /// Full nearest-distance resolves over all batches
    pub full_resolves: u64,
    /// Shadow rays cast
    pub shadow_rays: u64,
    /// Shadow rays that hit an occluder
    pub blocked_shadow_rays: u64,
    /// Reflected rays spawned
    pub reflections: u64,
}

impl MarchStats {
    /// Average steps per marched ray, shadow rays included
    pub fn steps_per_ray(&self) -> f64 {
        let marched = self.rays + self.shadow_rays;
        if marched == 0 {
            0.0
        } else {
            self.steps as f64 / marched as f64
        }
    }
}

impl AddAssign for MarchStats {
    fn add_assign(&mut self, o: MarchStats) {
        self.rays += o.rays;
        self.steps += o.steps;
        self.full_resolves += o.full_resolves;
        self.shadow_rays += o.shadow_rays;
        self.blocked_shadow_rays += o.blocked_shadow_rays;
        self.reflections += o.reflections;
    }
}

impl Add for MarchStats {
    type Output = MarchStats;
    fn add(mut self, o: MarchStats) -> MarchStats {
        self += o;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let a = MarchStats {
            rays: 1,
            steps: 10,
            full_resolves: 2,
            ..Default::default()
        };
        let mut total = MarchStats::default();
        total += a;
        total += a;
        assert_eq!(total.rays, 2);
        assert_eq!(total.steps, 20);
        assert_eq!(total, a + a);
        assert_eq!(total.steps_per_ray(), 10.0);
    }

    #[test]
    fn test_steps_per_ray_counts_shadow_rays() {
        let shadow_only = MarchStats {
            steps: 12,
            shadow_rays: 3,
            ..Default::default()
        };
        assert_eq!(shadow_only.steps_per_ray(), 4.0);
        assert_eq!(MarchStats::default().steps_per_ray(), 0.0);
    }
}
