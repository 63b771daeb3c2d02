//! Surface shading
//!
//! Local illumination (ambient, diffuse, specular) from the single point
//! light, hard or ring-sampled shadows, and recursive mirror reflection.
//!
//! ```text
//! color = min((local * (1 - w) + reflected * w), 1) * shadow
//! w     = reflection, or reflection / 4 if the reflected ray missed
//! ```

use crate::raycast::{Hit, Tracer};
use crate::shapes::Shape;
use crate::types::{Color, Ray, VectorExt};
use glam::DVec3;

/// Emission values are given on a 0..=255 scale
const EMISSION_SCALE: f64 = 1.0 / 255.0;

/// Reflected rays that miss keep this fraction of the reflection weight
const MISSED_REFLECTION_FACTOR: f64 = 0.25;

/// Outward normal at `point`, facing against `view`
///
/// Central differences of the shape's own SDF. Where they cancel (the crease
/// of an unsigned distance such as the plane's) a forward difference is used
/// instead.
pub fn estimate_normal(shape: &Shape, point: DVec3, delta: f64, view: DVec3) -> DVec3 {
    let dx = DVec3::X * delta;
    let dy = DVec3::Y * delta;
    let dz = DVec3::Z * delta;

    let mut gradient = DVec3::new(
        shape.distance(point + dx) - shape.distance(point - dx),
        shape.distance(point + dy) - shape.distance(point - dy),
        shape.distance(point + dz) - shape.distance(point - dz),
    );
    if gradient == DVec3::ZERO {
        let d = shape.distance(point);
        gradient = DVec3::new(
            shape.distance(point + dx) - d,
            shape.distance(point + dy) - d,
            shape.distance(point + dz) - d,
        );
    }

    let n = gradient.try_normalize().unwrap_or(-view);
    if n.dot(view) > 0.0 {
        -n
    } else {
        n
    }
}

/// Blend of a narrow `r^(100 / shininess)` and a broad `(r + r^2) / 4` lobe
#[inline]
pub fn specular_strength(r: f64, shininess: f64, bias: f64) -> f64 {
    if shininess <= 0.0 || r <= 0.0 {
        return 0.0;
    }
    bias * r.powf(100.0 / shininess) + (1.0 - bias) * 0.25 * (r + r * r)
}

/// Fraction of light reaching `point`, in `[1 - shadow_max, 1]`
///
/// One ray goes straight to the light. With `shadow_circles > 0`, each ring
/// `c` adds four rays aimed at the light shifted by `±c * shadow_delta`
/// along the two axes not dominant in the light direction.
pub fn shadow(tracer: &mut Tracer<'_>, point: DVec3, normal: DVec3, light: DVec3) -> f64 {
    let config = *tracer.config();
    let origin = point + normal * config.reflection_bias;
    let step = config.shadow_step();
    let mut weight = 1.0;

    let mut sample = |tracer: &mut Tracer<'_>, target: DVec3| {
        let to_light = target - origin;
        let dist = to_light.length();
        if dist > 0.0 && tracer.object_in_between(origin, to_light / dist, dist) {
            weight -= step;
        }
    };

    sample(tracer, light);
    if config.shadow_circles > 0 {
        let (a, b) = (light - origin).shadow_axes().orthogonal_axes();
        for c in 1..=config.shadow_circles {
            let offset = config.shadow_delta * f64::from(c);
            for jitter in [a * offset, -a * offset, b * offset, -b * offset] {
                sample(tracer, light + jitter);
            }
        }
    }

    weight
}

/// Color of a hit seen along `ray`
pub fn shade(tracer: &mut Tracer<'_>, ray: &Ray, hit: &Hit, depth: u32) -> Color {
    let scene = tracer.scene();
    let config = *tracer.config();
    let shape = scene.shape(hit.shape);
    let material = shape.material;
    let light = scene.light();

    let n = estimate_normal(shape, hit.point, config.normal_delta, ray.direction);
    let emission = light.emission * EMISSION_SCALE;
    let lit = material.color * emission;

    let mut local = lit * config.ambient;
    let mut shadow_weight = 1.0;

    let to_light = light.position - hit.point;
    let light_dist = to_light.length();
    if light_dist > 0.0 {
        let l = to_light / light_dist;
        let n_dot_l = n.dot(l);
        if n_dot_l > 0.0 {
            local += lit * (config.diffuse * n_dot_l);

            let reflected_light = n * (2.0 * n_dot_l) - l;
            let r = reflected_light.dot(-ray.direction);
            local += emission * specular_strength(r, material.shininess, config.specular_bias);
        }
        shadow_weight = shadow(tracer, hit.point, n, light.position);
    }

    let mut reflected = Color::BLACK;
    let mut weight = 0.0;
    if material.reflection > 0.0 && depth < config.max_reflection_depth {
        tracer.stats_mut().reflections += 1;
        let direction = ray.direction - n * (2.0 * ray.direction.dot(n));
        let origin = hit.point + n * config.reflection_bias;
        reflected = tracer.trace_from(&Ray::new(origin, direction), hit.distance, depth + 1);
        weight = if reflected.is_black() {
            material.reflection * MISSED_REFLECTION_FACTOR
        } else {
            material.reflection
        };
    }

    (local * (1.0 - weight) + reflected * weight).min(1.0) * shadow_weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Material, Plane, Pose, Sphere};

    #[test]
    fn test_sphere_normal() {
        let s = Shape::new(
            Pose::at(DVec3::ZERO).unwrap(),
            Material::default(),
            Sphere::new(1.0).unwrap(),
        );
        let n = estimate_normal(&s, DVec3::new(0.0, 0.0, -1.0), 1e-5, DVec3::Z);
        assert!((n - DVec3::NEG_Z).length() < 1e-6, "{:?}", n);
    }

    #[test]
    fn test_plane_normal_on_crease() {
        let p = Shape::new(
            Pose::at(DVec3::ZERO).unwrap(),
            Material::default(),
            Plane::new(DVec3::Y, 0.0).unwrap(),
        );
        // exactly on the plane the central difference vanishes
        let down = estimate_normal(&p, DVec3::ZERO, 1e-5, DVec3::NEG_Y);
        assert!((down - DVec3::Y).length() < 1e-12, "{:?}", down);
        let up = estimate_normal(&p, DVec3::ZERO, 1e-5, DVec3::Y);
        assert!((up - DVec3::NEG_Y).length() < 1e-12, "{:?}", up);
    }

    #[test]
    fn test_specular_strength() {
        // a full reflection peaks at bias + (1 - bias) * 0.5
        assert_eq!(specular_strength(1.0, 15.0, 0.5), 0.75);
        assert_eq!(specular_strength(1.0, 15.0, 1.0), 1.0);
        assert_eq!(specular_strength(0.5, 0.0, 0.5), 0.0);
        assert_eq!(specular_strength(-0.5, 15.0, 0.5), 0.0);
        // shininess 100 makes the narrow lobe linear
        let s = specular_strength(0.5, 100.0, 0.5);
        assert!((s - (0.25 + 0.5 * 0.25 * 0.75)).abs() < 1e-15);
    }
}
