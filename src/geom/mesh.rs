//! Triangle mesh representation.

use crate::Point;
use crate::TriangleIndex;
use serde::{Deserialize, Serialize};

/// A triangle mesh defined by vertices and face indices.
///
/// Every face index refers to a position in `vertices`. Merged parts keep
/// their own copies of shared vertices (no welding).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point>,
    pub faces: Vec<TriangleIndex>,
}

impl Mesh {
    /// Creates a new mesh with the given vertices and faces.
    pub fn new(vertices: Vec<Point>, faces: Vec<TriangleIndex>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces (triangles).
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Largest vertex index referenced by any face.
    ///
    /// A valid mesh satisfies `max_index() < vertex_count()`.
    pub fn max_index(&self) -> Option<usize> {
        self.faces.iter().map(|t| t.max_index()).max()
    }

    /// Appends another mesh, shifting its face indices past this mesh's
    /// vertices.
    pub fn merge(&mut self, other: Mesh) {
        let offset = self.vertices.len();
        self.vertices.extend(other.vertices);
        self.faces
            .extend(other.faces.into_iter().map(|t| t.shifted(offset)));
    }
}

/// Trait for types that can produce a triangulated [`Mesh`].
///
/// Implemented by every table part so that drawing code can work
/// polymorphically.
pub trait HasMesh {
    /// Returns a deep copy of the mesh for this entity.
    fn get_mesh(&self) -> Mesh;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_at(x: f64) -> Mesh {
        let pts = vec![
            Point::new(x, 0., 0.),
            Point::new(x + 1., 0., 0.),
            Point::new(x, 1., 0.),
        ];
        Mesh::new(pts, vec![TriangleIndex(0, 1, 2)])
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut mesh = triangle_at(0.);
        mesh.merge(triangle_at(10.));
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.faces[1], TriangleIndex(3, 4, 5));
    }

    #[test]
    fn test_merge_keeps_indices_valid() {
        let mut mesh = triangle_at(0.);
        for i in 1..10 {
            mesh.merge(triangle_at(i as f64));
        }
        assert!(mesh.max_index().unwrap() < mesh.vertex_count());
    }

    #[test]
    fn test_max_index_empty_faces() {
        let mesh = Mesh::new(vec![Point::origin()], vec![]);
        assert!(mesh.max_index().is_none());
    }
}
