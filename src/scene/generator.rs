//! Procedural benchmark scenes
//!
//! Lays out copies of one template per shape kind: planes stack downwards,
//! every other kind forms a row receding along +z in steps of 3 units.
//! Rotated kinds spin about z with an angle that doubles per copy and wraps
//! back to 2.5 degrees once it reaches 360.

use super::description::{
    CameraDescription, LightDescription, ObjectDescription, SceneDescription, VectorDescription,
};
use serde_json::json;

/// Number of copies per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    /// Planes
    pub planes: usize,
    /// Boxes
    pub boxes: usize,
    /// Spheres
    pub spheres: usize,
    /// Cones
    pub cones: usize,
    /// Tori
    pub tori: usize,
    /// Octahedra
    pub octahedra: usize,
}

impl ShapeCounts {
    /// Counts in the order `[plane, box, sphere, cone, torus, octahedron]`
    pub fn from_array(c: [usize; 6]) -> Self {
        ShapeCounts {
            planes: c[0],
            boxes: c[1],
            spheres: c[2],
            cones: c[3],
            tori: c[4],
            octahedra: c[5],
        }
    }

    /// Total number of shapes
    pub fn total(&self) -> usize {
        self.planes + self.boxes + self.spheres + self.cones + self.tori + self.octahedra
    }
}

const Z_START: f64 = 10.0;
const Z_STEP: f64 = 3.0;
const ROT_START: f64 = 1.5;
const ROT_WRAP: f64 = 2.5;

fn object(
    kind: &str,
    reflection: f64,
    color: [f64; 3],
    params: serde_json::Value,
) -> ObjectDescription {
    ObjectDescription {
        kind: kind.to_string(),
        position: VectorDescription::default(),
        rotation: VectorDescription::default(),
        reflection,
        shininess: 15.0,
        color: VectorDescription::new(color[0], color[1], color[2]),
        params,
    }
}

/// Append `count` copies of `template` in a row starting at `(x, y, 10)`
fn push_row(
    objects: &mut Vec<ObjectDescription>,
    template: &ObjectDescription,
    count: usize,
    x: f64,
    y: f64,
    spin: bool,
) {
    let mut z = Z_START;
    let mut rot_z = ROT_START;
    for _ in 0..count {
        let mut o = template.clone();
        o.position = VectorDescription::new(x, y, z);
        if spin {
            o.rotation.z = rot_z;
            rot_z += rot_z;
            if rot_z >= 360.0 {
                rot_z = ROT_WRAP;
            }
        }
        objects.push(o);
        z += Z_STEP;
    }
}

/// Generate a scene description with the given shape counts
pub fn generate(counts: &ShapeCounts) -> SceneDescription {
    let mut objects = Vec::with_capacity(counts.total());

    let plane = object(
        "plane",
        0.0,
        [1.0, 1.0, 1.0],
        json!({"normal": {"x": 0, "y": 1, "z": 0}, "displacement": -4}),
    );
    let mut displacement = -4.0;
    for _ in 0..counts.planes {
        let mut p = plane.clone();
        p.params["displacement"] = json!(displacement);
        objects.push(p);
        displacement -= 1.0;
    }

    let mut cube = object(
        "box",
        0.0,
        [0.0, 0.1, 0.6],
        json!({"extents": {"x": 0.25, "y": 0.5, "z": 1}}),
    );
    cube.rotation = VectorDescription::new(-1.5, -1.5, 0.0);
    push_row(&mut objects, &cube, counts.boxes, 3.0, 2.0, true);

    let sphere = object("sphere", 0.5, [0.3, 0.0, 0.0], json!({"radius": 1.5}));
    push_row(&mut objects, &sphere, counts.spheres, -3.0, 2.0, false);

    let cone = object("cone", 0.0, [0.0, 0.1, 0.6], json!([1, 0.5, 1]));
    push_row(&mut objects, &cone, counts.cones, 3.0, -2.0, true);

    let torus = object("torus", 0.0, [0.5, 0.5, 0.0], json!({"r1": 1, "r2": 0.5}));
    push_row(&mut objects, &torus, counts.tori, -3.0, -2.0, true);

    let octa = object("octahedron", 0.0, [0.0, 0.6, 0.1], json!({"s": 1}));
    push_row(&mut objects, &octa, counts.octahedra, 0.0, -3.0, true);

    SceneDescription {
        camera: CameraDescription {
            fov: 30.0,
            position: VectorDescription::default(),
            rotation: VectorDescription::default(),
        },
        pointlight: LightDescription {
            position: VectorDescription::new(0.0, 100.0, 0.0),
            emission: VectorDescription::new(200.0, 200.0, 200.0),
        },
        objects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ShapeType;
    use crate::scene::Scene;

    #[test]
    fn test_counts_and_order() {
        let d = generate(&ShapeCounts::from_array([2, 1, 1, 1, 1, 1]));
        let kinds: Vec<&str> = d.objects.iter().map(|o| o.kind.as_str()).collect();
        assert_eq!(
            kinds,
            ["plane", "plane", "box", "sphere", "cone", "torus", "octahedron"]
        );
        assert_eq!(d.objects[1].params["displacement"], json!(-5.0));
    }

    #[test]
    fn test_rotation_doubles_and_wraps() {
        let d = generate(&ShapeCounts::from_array([0, 10, 0, 0, 0, 0]));
        let rot: Vec<f64> = d.objects.iter().map(|o| o.rotation.z).collect();
        // 1.5 * 2^8 = 384 >= 360 wraps
        assert_eq!(&rot[..3], &[1.5, 3.0, 6.0]);
        assert_eq!(rot[7], 192.0);
        assert_eq!(rot[8], 2.5);
        assert_eq!(rot[9], 5.0);
        assert_eq!(d.objects[9].position, VectorDescription::new(3.0, 2.0, 37.0));
        assert_eq!(d.objects[0].rotation.x, -1.5);
    }

    #[test]
    fn test_generated_scene_builds() {
        let counts = ShapeCounts::from_array([1, 3, 3, 3, 3, 3]);
        let scene = Scene::from_description(&generate(&counts)).unwrap();
        assert_eq!(scene.len(), counts.total());
        assert_eq!(scene.batches().count(ShapeType::Cone), 3);
        assert_eq!(scene.camera().fov(), 30.0);
    }
}
