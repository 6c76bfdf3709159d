//! Boundary graph and mesh generation for extruded rooms.
//!
//! A room is built from a 2D floor footprint and a height by
//! [`ExtrudeRoom`]; its faces are compiled into flat-shaded triangle meshes
//! by [`TessellateRoom`] (or one polygon at a time by [`TessellatePolygon`]).

pub mod error;
pub mod math;
pub mod operations;
pub mod room;
pub mod tessellation;
pub mod topology;

pub use error::{Result, RoomGeoError};
pub use operations::shaping::ExtrudeRoom;
pub use room::{Room, RoomFace};
pub use tessellation::{FaceMesh, MeshParams, PolygonMesh, TessellatePolygon, TessellateRoom};
