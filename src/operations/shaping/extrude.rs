use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::counter_clockwise_order;
use crate::math::{Point2, Point3};
use crate::room::{wall_name, Room, RoomFace, CEILING, FLOOR};
use crate::topology::{LineId, PointId, RoomGraph};

/// Extrudes a 2D footprint into a room with floor, ceiling and walls.
///
/// The footprint is a simple polygon in the XY plane; the floor lies at
/// `z = 0` and the ceiling at `z = height`. For a positive height all face
/// normals point out of the room regardless of the footprint's winding.
pub struct ExtrudeRoom {
    footprint: Vec<Point2>,
    height: f64,
}

impl ExtrudeRoom {
    /// Creates a new `ExtrudeRoom` operation.
    #[must_use]
    pub fn new(footprint: Vec<Point2>, height: f64) -> Self {
        Self { footprint, height }
    }

    /// Executes the extrusion, building the room graph.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateInput`] if the footprint has fewer
    /// than 3 points. Nothing is built in that case.
    pub fn execute(&self) -> Result<Room> {
        let n = self.footprint.len();
        if n < 3 {
            return Err(GeometryError::DegenerateInput { count: n }.into());
        }

        // Footprint indices in counter-clockwise order (seen from above).
        let ccw = counter_clockwise_order(&self.footprint);

        let mut graph = RoomGraph::new();
        let mut faces = Vec::with_capacity(n + 2);

        // Floor: walked clockwise from above so its normal points down.
        let mut floor_order: Vec<usize> = ccw.into_iter().rev().collect();
        let mut floor_ids: Vec<PointId> = floor_order
            .iter()
            .map(|&i| {
                let v = self.footprint[i];
                Ok(graph.add_point(Point3::new(v.x, v.y, 0.0))?)
            })
            .collect::<Result<_>>()?;
        let floor_lines = connect_loop(&mut graph, &floor_ids)?;
        faces.push(RoomFace {
            name: FLOOR.to_owned(),
            surface: graph.add_surface(floor_lines)?,
        });

        // Ceiling and walls need the opposite rotational sense: the ceiling
        // normal points up, and walls run counter-clockwise seen from outside.
        floor_order.reverse();
        floor_ids.reverse();

        let mut ceiling_ids = Vec::with_capacity(n);
        for &floor_id in &floor_ids {
            let pos = graph.point(floor_id)?.position;
            ceiling_ids.push(graph.add_point(Point3::new(pos.x, pos.y, self.height))?);
        }
        let ceiling_lines = connect_loop(&mut graph, &ceiling_ids)?;
        for (&floor_id, &ceiling_id) in floor_ids.iter().zip(&ceiling_ids) {
            graph.add_line(floor_id, ceiling_id)?;
        }
        faces.push(RoomFace {
            name: CEILING.to_owned(),
            surface: graph.add_surface(ceiling_lines)?,
        });

        for i in 0..n {
            let j = (i + 1) % n;
            let quad = wall_quad(&floor_ids, &ceiling_ids, i, j);
            // All four lines exist already; connect_loop hands back their handles.
            let wall_lines = connect_loop(&mut graph, &quad)?;
            faces.push(RoomFace {
                name: wall_name(floor_order[i], floor_order[j]),
                surface: graph.add_surface(wall_lines)?,
            });
        }

        tracing::debug!(
            footprint = n,
            height = self.height,
            points = graph.point_count(),
            lines = graph.line_count(),
            surfaces = graph.surface_count(),
            "extruded room"
        );

        Ok(Room::new(graph, faces, n))
    }
}

/// Corner order of the wall between floor points `i` and `j`.
///
/// The ceiling side runs back from `j` to `i`, keeping the quad's winding
/// consistent with the floor edge it stands on.
fn wall_quad(floor: &[PointId], ceiling: &[PointId], i: usize, j: usize) -> [PointId; 4] {
    [floor[i], floor[j], ceiling[j], ceiling[i]]
}

/// Connects consecutive points with lines and closes the loop.
fn connect_loop(graph: &mut RoomGraph, points: &[PointId]) -> Result<Vec<LineId>> {
    let n = points.len();
    let mut lines = Vec::with_capacity(n);
    for i in 0..n {
        lines.push(graph.add_line(points[i], points[(i + 1) % n])?);
    }
    Ok(lines)
}
