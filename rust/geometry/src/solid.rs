// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned boxes with an optional turn about the vertical axis

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use nalgebra::{Matrix4, Point3, Vector3};

/// Unit cube faces: outward normal and four corners, counter-clockwise seen
/// from outside
const UNIT_CUBE_FACES: [([f64; 3], [[f64; 3]; 4]); 6] = [
    ([1.0, 0.0, 0.0], [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]]),
    ([-1.0, 0.0, 0.0], [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]]),
    ([0.0, 1.0, 0.0], [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]]),
    ([0.0, -1.0, 0.0], [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]]),
    ([0.0, 0.0, 1.0], [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]]),
    ([0.0, 0.0, -1.0], [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]]),
];

/// Build a box whose unrotated minimum corner is `min_corner`
///
/// The box is turned by `rotation_y` radians about the vertical axis through
/// its own centre. Every extent must be positive and finite.
pub fn box_mesh(min_corner: Point3<f64>, size: Vector3<f64>, rotation_y: f64) -> Result<Mesh> {
    if !size.iter().all(|s| s.is_finite() && *s > 0.0) {
        return Err(Error::InvalidBox(format!(
            "extents must be positive, got {:.3} x {:.3} x {:.3}",
            size.x, size.y, size.z
        )));
    }
    if !min_corner.coords.iter().all(|c| c.is_finite()) || !rotation_y.is_finite() {
        return Err(Error::InvalidBox("non-finite placement".to_string()));
    }

    let mut mesh = Mesh::with_capacity(24, 36);
    for (normal, corners) in UNIT_CUBE_FACES.iter() {
        let base = mesh.vertex_count() as u32;
        let normal = Vector3::new(normal[0], normal[1], normal[2]);
        for corner in corners {
            mesh.add_vertex(Point3::new(corner[0], corner[1], corner[2]), normal);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    let center = min_corner.coords + size / 2.0;
    let transform = Matrix4::new_translation(&center)
        * Matrix4::from_axis_angle(&Vector3::y_axis(), rotation_y)
        * Matrix4::new_nonuniform_scaling(&size)
        * Matrix4::new_translation(&Vector3::new(-0.5, -0.5, -0.5));
    mesh.transform(&transform);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_box_topology() {
        let mesh = box_mesh(Point3::origin(), Vector3::new(1.0, 1.0, 1.0), 0.0).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_bounds() {
        let mesh = box_mesh(Point3::new(1.0, 0.0, 2.0), Vector3::new(2.0, 3.0, 4.0), 0.0).unwrap();
        let (min, max) = mesh.bounds();

        assert_relative_eq!(min.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(min.z, 2.0, epsilon = 1e-5);
        assert_relative_eq!(max.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(max.y, 3.0, epsilon = 1e-5);
        assert_relative_eq!(max.z, 6.0, epsilon = 1e-5);
    }

    #[test]
    fn test_quarter_turn_swaps_footprint() {
        let mesh = box_mesh(Point3::origin(), Vector3::new(2.0, 1.0, 4.0), FRAC_PI_2).unwrap();
        let (min, max) = mesh.bounds();

        // Centre stays at (1, 0.5, 2); extents become 4 along x and 2 along z
        assert_relative_eq!(max.x - min.x, 4.0, epsilon = 1e-5);
        assert_relative_eq!(max.z - min.z, 2.0, epsilon = 1e-5);
        assert_relative_eq!((max.x + min.x) / 2.0, 1.0, epsilon = 1e-5);
        assert_relative_eq!((max.z + min.z) / 2.0, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_normals_point_outward() {
        let mesh = box_mesh(Point3::origin(), Vector3::new(2.0, 2.0, 2.0), 0.0).unwrap();
        for (p, n) in mesh.positions.chunks_exact(3).zip(mesh.normals.chunks_exact(3)) {
            let from_center = Vector3::new(p[0] - 1.0, p[1] - 1.0, p[2] - 1.0);
            let normal = Vector3::new(n[0], n[1], n[2]);
            assert!(from_center.dot(&normal) > 0.0);
        }
    }

    #[test]
    fn test_rejects_flat_box() {
        let result = box_mesh(Point3::origin(), Vector3::new(1.0, 0.0, 1.0), 0.0);
        assert!(matches!(result, Err(Error::InvalidBox(_))));
    }
}
