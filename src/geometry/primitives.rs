//! Procedural cube and sphere

use glam::Vec3;

use super::Mesh;

/// Unit cube centred on the origin, flat-shaded (36 vertices)
pub fn cube() -> Mesh {
    let h = 0.5;
    let corners = [
        Vec3::new(-h, -h, h),
        Vec3::new(-h, h, h),
        Vec3::new(h, h, h),
        Vec3::new(h, -h, h),
        Vec3::new(-h, -h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(h, -h, -h),
    ];
    // Each face as a counter-clockwise quad seen from outside
    let faces: [[usize; 4]; 6] = [
        [1, 0, 3, 2],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
        [6, 5, 1, 2],
        [4, 5, 6, 7],
        [5, 4, 0, 1],
    ];

    let mut mesh = Mesh::default();
    for [a, b, c, d] in faces {
        let (a, b, c, d) = (corners[a], corners[b], corners[c], corners[d]);
        let normal = (b - a).cross(c - b).normalize();
        mesh.push_triangle(a, b, c, [normal; 3]);
        mesh.push_triangle(a, c, d, [normal; 3]);
    }
    mesh
}

/// Unit-diameter sphere from a recursively subdivided tetrahedron
///
/// Produces `12 * 4^subdivisions` vertices; normals are radial.
pub fn sphere(subdivisions: u32) -> Mesh {
    let tetra = [
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.942809, -0.333333),
        Vec3::new(-0.816497, -0.471405, -0.333333),
        Vec3::new(0.816497, -0.471405, -0.333333),
    ]
    .map(Vec3::normalize);

    let mut mesh = Mesh::default();
    for [a, b, c] in [[0, 1, 2], [3, 2, 1], [0, 3, 1], [0, 2, 3]] {
        divide_triangle(&mut mesh, tetra[a], tetra[b], tetra[c], subdivisions);
    }
    mesh
}

fn divide_triangle(mesh: &mut Mesh, a: Vec3, b: Vec3, c: Vec3, depth: u32) {
    if depth == 0 {
        mesh.push_triangle(a * 0.5, b * 0.5, c * 0.5, [a, b, c]);
        return;
    }
    let ab = (a + b).normalize();
    let ac = (a + c).normalize();
    let bc = (b + c).normalize();
    divide_triangle(mesh, a, ab, ac, depth - 1);
    divide_triangle(mesh, ab, b, bc, depth - 1);
    divide_triangle(mesh, bc, c, ac, depth - 1);
    divide_triangle(mesh, ab, bc, ac, depth - 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts_and_normals() {
        let mesh = cube();
        assert_eq!(mesh.len(), 36);
        assert_eq!(mesh.normals.len(), 36);
        for (v, n) in mesh.vertices.iter().zip(&mesh.normals) {
            assert!((n.length() - 1.0).abs() < 1e-5);
            // Flat normals point away from the centre
            assert!(v.truncate().dot(*n) > 0.0);
        }
    }

    #[test]
    fn test_sphere_counts() {
        assert_eq!(sphere(0).len(), 12);
        assert_eq!(sphere(2).len(), 12 * 16);
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let mesh = sphere(3);
        for (v, n) in mesh.vertices.iter().zip(&mesh.normals) {
            assert!((v.truncate().length() - 0.5).abs() < 1e-4);
            assert!((v.truncate().normalize() - *n).length() < 1e-4);
        }
    }
}
