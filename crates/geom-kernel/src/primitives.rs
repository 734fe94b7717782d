//! Primitive solid builders on top of truck's sweep API.
//!
//! truck has no built-in box/cylinder — everything is successive sweeps.

use std::f64::consts::PI;
use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

use crate::types::KernelError;

/// Create a box solid via successive translational sweeps.
/// Origin at (0,0,0), extends to (w,h,d).
pub fn make_box(w: f64, h: f64, d: f64) -> Solid {
    let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
    let edge = builder::tsweep(&v, Vector3::new(w, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, h, 0.0));
    builder::tsweep(&face, Vector3::new(0.0, 0.0, d))
}

/// Box centered on the origin with the given extents.
pub fn make_box_centered(size: [f64; 3]) -> Solid {
    let solid = make_box(size[0], size[1], size[2]);
    builder::translated(
        &solid,
        Vector3::new(-size[0] / 2.0, -size[1] / 2.0, -size[2] / 2.0),
    )
}

/// Create a cylinder solid: circle wire → face → translational sweep.
/// Centered on the origin, swept along Z over `height`.
pub fn make_cylinder(radius: f64, height: f64) -> Result<Solid, KernelError> {
    let v = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let wire = builder::rsweep(&v, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI));
    let face =
        builder::try_attach_plane(&[wire]).map_err(|e| KernelError::FaceConstructionFailed {
            reason: format!("circular face: {e}"),
        })?;
    let solid = builder::tsweep(&face, Vector3::new(0.0, 0.0, height));
    Ok(builder::translated(
        &solid,
        Vector3::new(0.0, 0.0, -height / 2.0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_topology() {
        let solid = make_box(1.0, 2.0, 3.0);

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "box should have 1 shell");

        let shell = &boundaries[0];
        let faces: Vec<_> = shell.face_iter().collect();

        let mut edge_ids = std::collections::HashSet::new();
        for edge in shell.edge_iter() {
            edge_ids.insert(edge.id());
        }
        let mut vert_ids = std::collections::HashSet::new();
        for v in shell.vertex_iter() {
            vert_ids.insert(v.id());
        }

        assert_eq!(faces.len(), 6, "box should have 6 faces");
        assert_eq!(edge_ids.len(), 12, "box should have 12 edges");
        assert_eq!(vert_ids.len(), 8, "box should have 8 vertices");

        // Euler's formula: V - E + F = 2
        let v = vert_ids.len() as i64;
        let e = edge_ids.len() as i64;
        let f = faces.len() as i64;
        assert_eq!(v - e + f, 2, "Euler formula must hold");
    }

    #[test]
    fn centered_box_bounds() {
        let solid = make_box_centered([2.0, 4.0, 6.0]);
        let boundaries = solid.boundaries();
        let shell = &boundaries[0];

        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for v in shell.vertex_iter() {
            let p = v.point();
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        assert!((min[0] + 1.0).abs() < 1e-9 && (max[0] - 1.0).abs() < 1e-9);
        assert!((min[1] + 2.0).abs() < 1e-9 && (max[1] - 2.0).abs() < 1e-9);
        assert!((min[2] + 3.0).abs() < 1e-9 && (max[2] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn cylinder_topology() {
        let solid = make_cylinder(1.0, 2.0).unwrap();

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "cylinder should have 1 shell");

        let shell = &boundaries[0];
        let faces: Vec<_> = shell.face_iter().collect();

        // truck may split the lateral surface depending on sweep division.
        assert!(faces.len() >= 3, "cylinder should have at least 3 faces");
    }
}
