pub mod line;
pub mod point;
pub mod surface;

pub use line::{Line, LineId};
pub use point::{Point, PointId};
pub use surface::{Surface, SurfaceId};

use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::error::{self, GeometryError, TopologyError};
use crate::math::Point3;
use point::PointData;

/// Central arena that owns the points, lines and surfaces of a room.
///
/// Points are mutable records addressed by monotonically increasing ids;
/// lines and surfaces are value objects addressed by arena handles. Lines
/// refer to points by id and points list their incident lines by handle, so
/// there are no ownership cycles and dropping the graph tears everything down.
#[derive(Debug, Default)]
pub struct RoomGraph {
    next_point: u64,
    points: BTreeMap<PointId, PointData>,
    lines: SlotMap<LineId, Line>,
    surfaces: SlotMap<SurfaceId, Surface>,
}

impl RoomGraph {
    /// Creates a new, empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Point operations ---

    /// Inserts a point and returns its id.
    ///
    /// Points are never merged, even when positions coincide.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PointIdsExhausted`] once every id has been
    /// handed out.
    pub fn add_point(&mut self, position: Point3) -> Result<PointId, TopologyError> {
        let id = PointId(self.next_point);
        self.next_point = self
            .next_point
            .checked_add(1)
            .ok_or(TopologyError::PointIdsExhausted)?;
        self.points.insert(id, PointData::new(position));
        Ok(id)
    }

    /// Returns a read-only view of the point.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PointNotFound`] if the id is unknown.
    pub fn point(&self, id: PointId) -> Result<Point, TopologyError> {
        let data = self.point_data(id)?;
        Ok(Point {
            id,
            position: data.position,
        })
    }

    /// Moves a point. Lines and surfaces follow automatically since they
    /// refer to the point by id; meshes compiled earlier are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PointNotFound`] if the id is unknown.
    pub fn set_point_position(&mut self, id: PointId, position: Point3) -> Result<(), TopologyError> {
        self.points
            .get_mut(&id)
            .ok_or(TopologyError::PointNotFound(id))?
            .position = position;
        Ok(())
    }

    /// Iterates over all points in id order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|(&id, data)| Point {
            id,
            position: data.position,
        })
    }

    /// Returns the number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the handles of all lines incident on the point.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PointNotFound`] if the id is unknown.
    pub fn lines_at(&self, id: PointId) -> Result<&[LineId], TopologyError> {
        Ok(&self.point_data(id)?.lines)
    }

    fn point_data(&self, id: PointId) -> Result<&PointData, TopologyError> {
        self.points.get(&id).ok_or(TopologyError::PointNotFound(id))
    }

    // --- Line operations ---

    /// Adds the line between two existing points and registers it on both.
    ///
    /// If an equal line (same endpoints, either order) is already stored,
    /// its handle is returned instead of creating a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PointNotFound`] for unknown endpoints and
    /// [`TopologyError::InvalidReference`] if both endpoints are the same point.
    pub fn add_line(&mut self, p1: PointId, p2: PointId) -> Result<LineId, TopologyError> {
        if p1 == p2 {
            return Err(TopologyError::InvalidReference {
                p1,
                p2,
                point: p1,
                reason: "line endpoints must differ",
            });
        }
        self.point_data(p1)?;
        self.point_data(p2)?;

        if let Some(existing) = self.find_line(p1, p2) {
            return Ok(existing);
        }

        let id = self.lines.insert(Line::new(p1, p2));
        self.register_incident(p1, id)?;
        self.register_incident(p2, id)?;
        Ok(id)
    }

    /// Records `line` as incident on `point`.
    fn register_incident(&mut self, point: PointId, line: LineId) -> Result<(), TopologyError> {
        let data = *self.line(line)?;
        if !data.contains(point) {
            return Err(TopologyError::InvalidReference {
                p1: data.p1,
                p2: data.p2,
                point,
                reason: "point is not an endpoint of the line",
            });
        }
        self.points
            .get_mut(&point)
            .ok_or(TopologyError::PointNotFound(point))?
            .lines
            .push(line);
        Ok(())
    }

    /// Finds the stored line between two points, in either direction.
    #[must_use]
    pub fn find_line(&self, p1: PointId, p2: PointId) -> Option<LineId> {
        let wanted = Line::new(p1, p2);
        self.points
            .get(&p1)?
            .lines
            .iter()
            .copied()
            .find(|&id| self.lines.get(id).is_some_and(|l| *l == wanted))
    }

    /// Returns the line for a handle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::LineNotFound`] if the handle is unknown.
    pub fn line(&self, id: LineId) -> Result<&Line, TopologyError> {
        self.lines.get(id).ok_or(TopologyError::LineNotFound(id))
    }

    /// Iterates over all lines.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter()
    }

    /// Returns the number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns every line as its two endpoint positions, e.g. for drawing
    /// the room edges as a wireframe.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PointNotFound`] if a line refers to a
    /// missing point.
    pub fn line_segments(&self) -> Result<Vec<[Point3; 2]>, TopologyError> {
        self.lines
            .values()
            .map(|l| {
                Ok([
                    self.point_data(l.p1)?.position,
                    self.point_data(l.p2)?.position,
                ])
            })
            .collect()
    }

    // --- Surface operations ---

    /// Adds a surface made of the given lines, in walking order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateInput`] for an empty line list and
    /// [`TopologyError::LineNotFound`] for unknown handles.
    pub fn add_surface(&mut self, lines: Vec<LineId>) -> error::Result<SurfaceId> {
        if lines.is_empty() {
            return Err(GeometryError::DegenerateInput { count: 0 }.into());
        }
        for &id in &lines {
            self.line(id)?;
        }
        Ok(self.surfaces.insert(Surface::new(lines)))
    }

    /// Returns the surface for a handle.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::SurfaceNotFound`] if the handle is unknown.
    pub fn surface(&self, id: SurfaceId) -> Result<&Surface, TopologyError> {
        self.surfaces.get(id).ok_or(TopologyError::SurfaceNotFound(id))
    }

    /// Iterates over all surfaces.
    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces.iter()
    }

    /// Returns the number of surfaces.
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Walks the lines of a surface into its closed vertex cycle.
    ///
    /// The cycle starts at the endpoint of the first line that is not shared
    /// with the second line. Lines may be stored in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateInput`] for fewer than 3 lines and
    /// [`TopologyError::OpenSurface`] if the lines do not chain into a single
    /// closed loop.
    pub fn surface_point_ids(&self, id: SurfaceId) -> error::Result<Vec<PointId>> {
        let lines = self
            .surface(id)?
            .lines
            .iter()
            .map(|&l| self.line(l).copied())
            .collect::<Result<Vec<Line>, TopologyError>>()?;
        if lines.len() < 3 {
            return Err(GeometryError::DegenerateInput { count: lines.len() }.into());
        }

        let first = lines[0];
        let mut current = first
            .shared_point(&lines[1])
            .ok_or(TopologyError::OpenSurface { position: 0 })?;
        let start = first
            .other(current)
            .ok_or(TopologyError::OpenSurface { position: 0 })?;

        let mut ids = Vec::with_capacity(lines.len());
        ids.push(start);
        for (position, line) in lines.iter().enumerate().skip(1) {
            ids.push(current);
            current = line
                .other(current)
                .ok_or(TopologyError::OpenSurface { position: position - 1 })?;
        }
        if current != start {
            return Err(TopologyError::OpenSurface {
                position: lines.len() - 1,
            }
            .into());
        }
        Ok(ids)
    }

    /// Resolves a surface into the positions of its vertex cycle.
    ///
    /// # Errors
    ///
    /// See [`RoomGraph::surface_point_ids`].
    pub fn surface_points(&self, id: SurfaceId) -> error::Result<Vec<Point3>> {
        self.surface_point_ids(id)?
            .into_iter()
            .map(|p| Ok(self.point_data(p)?.position))
            .collect::<error::Result<Vec<Point3>>>()
    }
}
