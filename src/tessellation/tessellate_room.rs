use crate::error::Result;
use crate::room::Room;

use super::{FaceMesh, MeshParams, TessellatePolygon};

/// Compiles every face of a room into its own mesh.
pub struct TessellateRoom {
    params: MeshParams,
}

impl TessellateRoom {
    /// Creates a new `TessellateRoom` operation.
    #[must_use]
    pub fn new(params: MeshParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning one mesh per face in face order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first face that cannot be resolved or
    /// compiled; no partial result is returned.
    pub fn execute(&self, room: &Room) -> Result<Vec<FaceMesh>> {
        let mut meshes = Vec::with_capacity(room.faces().len());
        for face in room.faces() {
            let points = room.graph().surface_points(face.surface)?;
            let mesh = TessellatePolygon::new(points, self.params).execute()?;
            tracing::debug!(face = %face.name, triangles = mesh.triangle_count(), "compiled face");
            meshes.push(FaceMesh {
                name: face.name.clone(),
                mesh,
            });
        }
        Ok(meshes)
    }
}
