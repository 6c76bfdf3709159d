use crate::error::{Result, TopologyError};
use crate::math::Point3;
use crate::topology::{PointId, RoomGraph, SurfaceId};

/// Name of the floor face.
pub const FLOOR: &str = "floor";

/// Name of the ceiling face.
pub const CEILING: &str = "ceiling";

/// Returns the face name of the wall between two footprint indices.
#[must_use]
pub fn wall_name(from: usize, to: usize) -> String {
    format!("wall-{from}-{to}")
}

/// A named boundary face of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomFace {
    /// Stable face name: `"floor"`, `"ceiling"` or `"wall-i-j"`.
    pub name: String,
    /// The surface in the room graph.
    pub surface: SurfaceId,
}

/// An extruded room: its boundary graph plus the named faces built on it.
///
/// Created by [`ExtrudeRoom`](crate::operations::shaping::ExtrudeRoom).
#[derive(Debug)]
pub struct Room {
    graph: RoomGraph,
    faces: Vec<RoomFace>,
    footprint_len: usize,
}

impl Room {
    pub(crate) fn new(graph: RoomGraph, faces: Vec<RoomFace>, footprint_len: usize) -> Self {
        Self {
            graph,
            faces,
            footprint_len,
        }
    }

    /// Returns the boundary graph.
    #[must_use]
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Returns the faces in build order: floor, ceiling, then the walls.
    #[must_use]
    pub fn faces(&self) -> &[RoomFace] {
        &self.faces
    }

    /// Looks up a face by name.
    #[must_use]
    pub fn face(&self, name: &str) -> Option<&RoomFace> {
        self.faces.iter().find(|f| f.name == name)
    }

    /// Returns the number of points of the footprint the room was built from.
    #[must_use]
    pub fn footprint_len(&self) -> usize {
        self.footprint_len
    }

    /// Returns the ordered vertex positions of a face, ready for mesh
    /// compilation.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::FaceNotFound`] for an unknown name, or the
    /// error of resolving the surface's line loop.
    pub fn face_points(&self, name: &str) -> Result<Vec<Point3>> {
        let face = self
            .face(name)
            .ok_or_else(|| TopologyError::FaceNotFound(name.to_owned()))?;
        self.graph.surface_points(face.surface)
    }

    /// Moves a room point. Faces pick up the new position on their next
    /// compilation; meshes compiled before stay as they were.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PointNotFound`] if the id is unknown.
    pub fn move_point(&mut self, id: PointId, position: Point3) -> Result<()> {
        self.graph.set_point_position(id, position)?;
        tracing::debug!(%id, ?position, "moved room point");
        Ok(())
    }
}
