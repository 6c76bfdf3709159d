use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{GeometryError, Result, TessellationError};
use crate::math::polygon_2d::is_clockwise;
use crate::math::polygon_3d::{check_coplanar, dominant_axis, newell_normal, project_dropping};
use crate::math::{Axis, Point2, Point3, Vector3};

use super::{MeshParams, PolygonMesh};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Compiles one planar polygon into a flat-shaded triangle mesh.
///
/// The points must form a simple polygon (no self-intersections, no holes).
/// Either winding is accepted; the normal follows the given vertex order by
/// the right-hand rule and the emitted triangles face along it.
pub struct TessellatePolygon {
    points: Vec<Point3>,
    params: MeshParams,
}

impl TessellatePolygon {
    /// Creates a new `TessellatePolygon` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, params: MeshParams) -> Self {
        Self { points, params }
    }

    /// Executes the compilation, returning the polygon mesh.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DegenerateInput`] for fewer than 3 points.
    /// - [`GeometryError::NonCoplanar`] if a point is off the polygon plane.
    /// - [`GeometryError::Degenerate`] if the polygon has no area.
    /// - [`TessellationError::Failed`] if the outline cannot be triangulated,
    ///   e.g. because it intersects itself.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<PolygonMesh> {
        let count = self.points.len();
        if count < 3 {
            return Err(GeometryError::DegenerateInput { count }.into());
        }
        check_coplanar(&self.points, self.params.coplanar_tolerance)?;
        let normal = newell_normal(&self.points, self.params.degenerate_tolerance)?;

        let axis = dominant_axis(&normal);
        let mut vertices = self.points.clone();
        let mut projected = project_dropping(&vertices, axis);
        // The triangulation below expects a counter-clockwise outline.
        if is_clockwise(&projected) {
            vertices.reverse();
            projected.reverse();
        }

        let flip = faces_against_normal(axis, &normal);
        let indices = triangulate(&projected)?
            .into_iter()
            .map(|[a, b, c]| {
                let (a, b, c) = (a as u32, b as u32, c as u32);
                if flip {
                    [a, c, b]
                } else {
                    [a, b, c]
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            points = count,
            triangles = indices.len(),
            ?normal,
            ?axis,
            "compiled polygon"
        );

        Ok(PolygonMesh {
            normals: vec![normal; vertices.len()],
            vertices,
            indices,
        })
    }
}

/// Returns `true` if triangles wound counter-clockwise in the projection
/// that drops `axis` face away from `normal`.
///
/// Dropping x keeps `(y, z)` and dropping z keeps `(x, y)`, both
/// right-handed; dropping y keeps `(x, z)`, which is left-handed.
fn faces_against_normal(axis: Axis, normal: &Vector3) -> bool {
    match axis {
        Axis::X => normal.x < 0.0,
        Axis::Y => normal.y > 0.0,
        Axis::Z => normal.z < 0.0,
    }
}

/// Triangulates a counter-clockwise simple polygon.
///
/// Returns counter-clockwise index triples into `points`.
fn triangulate(points: &[Point2]) -> Result<Vec<[usize; 3]>> {
    let mut cdt = Cdt::new();
    let mut handles = Vec::with_capacity(points.len());
    // CDT vertex index -> polygon index; coincident points share the first.
    let mut polygon_index: HashMap<usize, usize> = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let h = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        polygon_index.entry(h.index()).or_insert(i);
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed(format!(
                "polygon edge {i} crosses another edge"
            ))
            .into());
        }
        cdt.add_constraint(from, to);
    }

    let interior = classify_interior_faces(&cdt);
    let mut triangles = Vec::with_capacity(points.len().saturating_sub(2));
    for face in cdt.inner_faces() {
        if !interior.contains(&face.fix().index()) {
            continue;
        }
        let mut tri = [0usize; 3];
        for (slot, vh) in tri.iter_mut().zip(face.vertices()) {
            *slot = *polygon_index.get(&vh.fix().index()).ok_or_else(|| {
                TessellationError::Failed("triangulation produced an unknown vertex".into())
            })?;
        }
        triangles.push(tri);
    }

    if triangles.is_empty() {
        return Err(TessellationError::Failed("polygon produced no triangles".into()).into());
    }
    Ok(triangles)
}

/// Classifies which inner faces of the CDT are inside the polygon using flood-fill.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each time
/// a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let new_depth = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
