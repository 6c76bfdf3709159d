use std::hash::{Hash, Hasher};

use super::point::PointId;

slotmap::new_key_type! {
    /// Handle of a line stored in a [`RoomGraph`](super::RoomGraph).
    pub struct LineId;
}

/// A straight edge between two distinct points.
///
/// Lines are value objects: a line is fully described by its endpoints, and
/// two lines with the same endpoints (in either order) are the same line.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    /// First endpoint.
    pub p1: PointId,
    /// Second endpoint.
    pub p2: PointId,
}

impl Line {
    /// Creates a new line between two points.
    #[must_use]
    pub fn new(p1: PointId, p2: PointId) -> Self {
        Self { p1, p2 }
    }

    /// Returns `true` if `point` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, point: PointId) -> bool {
        self.p1 == point || self.p2 == point
    }

    /// Returns the endpoint opposite to `point`, or `None` if `point` is not
    /// an endpoint.
    #[must_use]
    pub fn other(&self, point: PointId) -> Option<PointId> {
        if self.p1 == point {
            Some(self.p2)
        } else if self.p2 == point {
            Some(self.p1)
        } else {
            None
        }
    }

    /// Returns the point shared with `other`, if any.
    #[must_use]
    pub fn shared_point(&self, other: &Line) -> Option<PointId> {
        if other.contains(self.p1) {
            Some(self.p1)
        } else if other.contains(self.p2) {
            Some(self.p2)
        } else {
            None
        }
    }

    fn key(&self) -> (PointId, PointId) {
        if self.p1 <= self.p2 {
            (self.p1, self.p2)
        } else {
            (self.p2, self.p1)
        }
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
