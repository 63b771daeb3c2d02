//! Octahedron SDF
//!
//! Exact SDF for a regular octahedron centered at origin with vertices at
//! (±s, 0, 0), (0, ±s, 0), (0, 0, ±s).
//!
//! The three fold branches are mutually exclusive and checked in the order
//! x, y, z; if none fires the point projects onto a face and the distance is
//! `m / sqrt(3)`.

use glam::DVec3;

/// 1 / sqrt(3)
pub const INV_SQRT_3: f64 = 0.577_350_269_189_625_8;

/// Exact signed distance to a regular octahedron
#[inline(always)]
pub fn sdf_octahedron(point: DVec3, s: f64) -> f64 {
    let p = point.abs();
    let m = p.x + p.y + p.z - s;

    let q = if 3.0 * p.x < m {
        p
    } else if 3.0 * p.y < m {
        DVec3::new(p.y, p.z, p.x)
    } else if 3.0 * p.z < m {
        DVec3::new(p.z, p.x, p.y)
    } else {
        return m * INV_SQRT_3;
    };

    let k = (0.5 * (q.z - q.y + s)).clamp(0.0, s);
    DVec3::new(q.x, q.y - s + k, q.z - k).length()
}
