use super::line::LineId;

slotmap::new_key_type! {
    /// Handle of a surface stored in a [`RoomGraph`](super::RoomGraph).
    pub struct SurfaceId;
}

/// An ordered loop of lines bounding a planar polygon.
///
/// Surfaces are value objects: two surfaces with the same line sequence are
/// equal. Closure and planarity are checked when the surface is resolved and
/// compiled, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Surface {
    /// The boundary lines, in walking order.
    pub lines: Vec<LineId>,
}

impl Surface {
    /// Creates a new surface from an ordered line list.
    #[must_use]
    pub fn new(lines: Vec<LineId>) -> Self {
        Self { lines }
    }
}
