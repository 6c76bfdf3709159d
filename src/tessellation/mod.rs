mod tessellate_polygon;
mod tessellate_room;

pub use tessellate_polygon::TessellatePolygon;
pub use tessellate_room::TessellateRoom;

use crate::math::{Point3, Vector3, TOLERANCE};

/// Parameters controlling polygon mesh compilation.
#[derive(Debug, Clone, Copy)]
pub struct MeshParams {
    /// Maximum distance of a vertex from the polygon plane, relative to the
    /// polygon extent.
    pub coplanar_tolerance: f64,
    /// Minimum normal length (twice the area, relative to the squared
    /// extent) below which a polygon is considered degenerate.
    pub degenerate_tolerance: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            coplanar_tolerance: 1e-9,
            degenerate_tolerance: TOLERANCE,
        }
    }
}

/// A flat-shaded triangle mesh of one planar polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals, all equal to the face normal.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl PolygonMesh {
    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Vertex positions as a flat `[x, y, z, x, y, z, ..]` buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn flat_positions(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Vertex normals as a flat `[x, y, z, ..]` buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn flat_normals(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Triangle indices as a flat buffer.
    #[must_use]
    pub fn flat_indices(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }
}

/// The compiled mesh of one named room face.
#[derive(Debug, Clone)]
pub struct FaceMesh {
    /// Face name, e.g. `"floor"` or `"wall-0-1"`.
    pub name: String,
    /// The compiled mesh.
    pub mesh: PolygonMesh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_buffers_follow_vertex_order() {
        let mesh = PolygonMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
            ],
            normals: vec![Vector3::z(); 3],
            indices: vec![[0, 1, 2]],
        };
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(
            mesh.flat_positions(),
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0]
        );
        assert_eq!(
            mesh.flat_normals(),
            vec![0.0_f32, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(mesh.flat_indices(), vec![0, 1, 2]);
    }
}
