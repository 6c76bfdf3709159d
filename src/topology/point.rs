use std::fmt;

use crate::math::Point3;

use super::line::LineId;

/// Identifier of a point in a [`RoomGraph`](super::RoomGraph).
///
/// Ids are handed out in creation order by the owning graph and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub(crate) u64);

impl PointId {
    /// Returns the raw integer value of this id.
    #[must_use]
    pub fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mutable point record owned by the graph.
///
/// Keeps the incident line handles so lines touching a point can be found
/// without scanning the whole graph.
#[derive(Debug, Clone)]
pub(crate) struct PointData {
    pub(crate) position: Point3,
    pub(crate) lines: Vec<LineId>,
}

impl PointData {
    pub(crate) fn new(position: Point3) -> Self {
        Self {
            position,
            lines: Vec::new(),
        }
    }
}

/// Read-only view of a graph point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Identifier of the point.
    pub id: PointId,
    /// Position at the time the view was taken.
    pub position: Point3,
}
