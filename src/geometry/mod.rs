//! Mesh producers for the three object shapes
//!
//! Meshes are triangle soups (three vertices per triangle) in object space,
//! sized to a unit extent. The renderer scales them by the object size.

mod off;
mod primitives;

use std::path::Path;

use glam::{Vec3, Vec4};

use crate::sim::ObjectType;

pub use off::{load_off, parse_off};
pub use primitives::{cube, sphere};

/// Triangle soup with one normal per vertex
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Homogeneous positions (w = 1)
    pub vertices: Vec<Vec4>,
    pub normals: Vec<Vec3>,
}

impl Mesh {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Interleaved `[x, y, z, w, nx, ny, nz]` layout for a vertex buffer
    pub fn interleaved(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertices.len() * 7);
        for (v, n) in self.vertices.iter().zip(&self.normals) {
            data.extend_from_slice(&v.to_array());
            data.extend_from_slice(&n.to_array());
        }
        data
    }

    pub(crate) fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, normals: [Vec3; 3]) {
        for (p, n) in [a, b, c].into_iter().zip(normals) {
            self.vertices.push(p.extend(1.0));
            self.normals.push(n);
        }
    }
}

/// Meshes for every shape; the bunny is optional
#[derive(Debug, Clone)]
pub struct GeometrySet {
    pub cube: Mesh,
    pub sphere: Mesh,
    pub bunny: Option<Mesh>,
}

impl GeometrySet {
    /// Sphere refinement used by `load`
    pub const SPHERE_SUBDIVISIONS: u32 = 2;

    /// Build the primitives and try to load the bunny from `bunny_path`
    ///
    /// A missing or malformed bunny file is logged and leaves `bunny` empty.
    pub fn load(bunny_path: &Path) -> Self {
        let bunny = match load_off(bunny_path) {
            Ok(mesh) => {
                log::info!(
                    "Loaded bunny from {} ({} triangles)",
                    bunny_path.display(),
                    mesh.triangle_count()
                );
                Some(mesh)
            }
            Err(e) => {
                log::warn!("Bunny unavailable ({}): {}", bunny_path.display(), e);
                None
            }
        };

        Self {
            cube: cube(),
            sphere: sphere(Self::SPHERE_SUBDIVISIONS),
            bunny,
        }
    }

    pub fn bunny_loaded(&self) -> bool {
        self.bunny.is_some()
    }

    /// Mesh the renderer should bind for `kind`
    pub fn mesh_for(&self, kind: ObjectType) -> Option<&Mesh> {
        match kind {
            ObjectType::Cube => Some(&self.cube),
            ObjectType::Sphere => Some(&self.sphere),
            ObjectType::Bunny => self.bunny.as_ref(),
        }
    }
}
