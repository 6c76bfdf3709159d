use thiserror::Error;

use crate::math::Point3;
use crate::topology::{LineId, PointId, SurfaceId};

/// Top-level error type for room geometry.
#[derive(Debug, Error)]
pub enum RoomGeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors caused by the shape of the input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 points, got {count}")]
    DegenerateInput { count: usize },

    #[error("point {index} ({point}) of {count} is not in the plane of the polygon")]
    NonCoplanar {
        index: usize,
        point: Point3,
        count: usize,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by the room graph. These indicate a corrupted graph,
/// never bad caller input.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("no point with id {0}")]
    PointNotFound(PointId),

    #[error("no point ids left to assign")]
    PointIdsExhausted,

    #[error("line {0:?} not found")]
    LineNotFound(LineId),

    #[error("surface {0:?} not found")]
    SurfaceNotFound(SurfaceId),

    #[error("invalid reference between line ({p1}, {p2}) and point {point}: {reason}")]
    InvalidReference {
        p1: PointId,
        p2: PointId,
        point: PointId,
        reason: &'static str,
    },

    #[error("no face named {0:?}")]
    FaceNotFound(String),

    #[error("surface lines do not form a closed loop (broken after line {position})")]
    OpenSurface { position: usize },
}

/// Errors raised while triangulating a polygon.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`RoomGeoError`].
pub type Result<T> = std::result::Result<T, RoomGeoError>;
