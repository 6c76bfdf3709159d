use crate::error::{GeometryError, Result};

use super::{Axis, Point2, Point3, Vector3};

/// Largest distance from the first point to any other point of the polygon.
///
/// Used to scale tolerances with the size of the input.
#[must_use]
pub fn extent(points: &[Point3]) -> f64 {
    let Some(origin) = points.first() else {
        return 0.0;
    };
    points
        .iter()
        .map(|p| (p - origin).norm())
        .fold(0.0_f64, f64::max)
}

/// Verifies that all points lie in one plane.
///
/// The reference plane goes through the centroid with the Newell normal of
/// the whole loop, so it does not depend on which vertex comes first or on
/// any single (possibly near-collinear) pair of edges. Every point must lie
/// within `tolerance * extent` of that plane.
///
/// Three points always pass. Fully collinear input passes as well; it is
/// rejected later when the normal is computed.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateInput`] for fewer than 3 points and
/// [`GeometryError::NonCoplanar`] naming the point farthest off the plane.
pub fn check_coplanar(points: &[Point3], tolerance: f64) -> Result<()> {
    let count = points.len();
    if count < 3 {
        return Err(GeometryError::DegenerateInput { count }.into());
    }
    if count == 3 {
        tracing::warn!("coplanarity check on 3 points always passes");
        return Ok(());
    }

    let center = centroid(points);
    let normal = newell_sum(points, &center);
    let len = normal.norm();
    if len < f64::MIN_POSITIVE {
        return Ok(());
    }
    let normal = normal / len;

    let (index, distance) = points
        .iter()
        .map(|p| normal.dot(&(p - center)).abs())
        .enumerate()
        .fold((0, 0.0_f64), |best, (i, d)| if d > best.1 { (i, d) } else { best });
    if distance > tolerance * extent(points) {
        return Err(GeometryError::NonCoplanar {
            index,
            point: points[index],
            count,
        }
        .into());
    }
    Ok(())
}

/// Computes the unit normal of a planar polygon using Newell's method.
///
/// The direction follows the right-hand rule over the vertex order, for
/// convex and concave polygons alike.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the normal collapses, i.e. the
/// polygon has (near) zero area relative to its size.
pub fn newell_normal(points: &[Point3], tolerance: f64) -> Result<Vector3> {
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::DegenerateInput { count: n }.into());
    }
    let normal = newell_sum(points, &centroid(points));
    let len = normal.norm();
    let scale = extent(points);
    if len <= tolerance * scale * scale || len < f64::MIN_POSITIVE {
        return Err(GeometryError::Degenerate(format!(
            "cannot compute a normal for {n} points with zero area"
        ))
        .into());
    }
    Ok(normal / len)
}

/// Arithmetic mean of the points.
fn centroid(points: &[Point3]) -> Point3 {
    let sum = points.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords);
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / points.len() as f64;
    Point3::from(sum * inv_n)
}

/// Unnormalized Newell normal (twice the vector area) of the loop, with
/// coordinates taken relative to `origin` to keep the products small.
fn newell_sum(points: &[Point3], origin: &Point3) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = points[i] - origin;
        let next = points[(i + 1) % n] - origin;
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Returns the axis with the largest absolute component.
///
/// Ties resolve in the fixed order x, then y, then z.
#[must_use]
pub fn dominant_axis(v: &Vector3) -> Axis {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    if ax >= ay && ax >= az {
        Axis::X
    } else if ay >= az {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Flattens 3D points by dropping the given axis.
///
/// Dropping x keeps `(y, z)`, dropping y keeps `(x, z)`, dropping z keeps `(x, y)`.
#[must_use]
pub fn project_dropping(points: &[Point3], axis: Axis) -> Vec<Point2> {
    points
        .iter()
        .map(|p| match axis {
            Axis::X => Point2::new(p.y, p.z),
            Axis::Y => Point2::new(p.x, p.z),
            Axis::Z => Point2::new(p.x, p.y),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoomGeoError;
    use crate::math::TOLERANCE;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    // ── check_coplanar ──

    #[test]
    fn fewer_than_three_points_is_degenerate() {
        let err = check_coplanar(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], TOL).unwrap_err();
        assert!(matches!(
            err,
            RoomGeoError::Geometry(GeometryError::DegenerateInput { count: 2 })
        ));
    }

    #[test]
    fn three_points_always_pass() {
        let tri = [p(0.0, 0.0, 0.0), p(3.0, 1.0, 7.0), p(-2.0, 5.0, 1.0)];
        assert!(check_coplanar(&tri, TOL).is_ok());
    }

    #[test]
    fn square_is_coplanar() {
        assert!(check_coplanar(&unit_square(), TOL).is_ok());
    }

    #[test]
    fn tilted_quad_is_coplanar() {
        let quad = [
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(4.0, 3.0, 3.0),
            p(0.0, 3.0, 3.0),
        ];
        assert!(check_coplanar(&quad, TOL).is_ok());
    }

    #[test]
    fn perturbed_fourth_point_is_rejected() {
        let mut quad = unit_square();
        quad[3].z = 0.01;
        let err = check_coplanar(&quad, TOL).unwrap_err();
        assert!(matches!(
            err,
            RoomGeoError::Geometry(GeometryError::NonCoplanar { count: 4, .. })
        ));
    }

    #[test]
    fn one_far_point_is_reported() {
        let mut poly = vec![
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(4.0, 4.0, 0.0),
            p(2.0, 4.0, 0.0),
            p(0.0, 4.0, 0.0),
        ];
        poly[3].z = 1.0;
        let err = check_coplanar(&poly, TOL).unwrap_err();
        assert!(matches!(
            err,
            RoomGeoError::Geometry(GeometryError::NonCoplanar { index: 3, count: 6, .. })
        ));
    }

    #[test]
    fn tilted_near_collinear_start_is_accepted_from_any_vertex() {
        // All points on z = x + y; the first three are nearly collinear.
        let poly = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 1.0),
            p(2.0, 1e-8, 2.0 + 1e-8),
            p(2.0, 2.0, 4.0),
            p(0.0, 2.0, 2.0),
        ];
        for shift in 0..poly.len() {
            let mut rotated = poly.to_vec();
            rotated.rotate_left(shift);
            assert!(
                check_coplanar(&rotated, TOL).is_ok(),
                "rejected when starting at vertex {shift}"
            );
        }
    }

    #[test]
    fn collinear_leading_points_use_next_vertex() {
        // First three points collinear; the plane comes from the fourth.
        let poly = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ];
        assert!(check_coplanar(&poly, TOL).is_ok());

        let mut bent = poly;
        bent[4].z = 0.5;
        assert!(check_coplanar(&bent, TOL).is_err());
    }

    #[test]
    fn perturbation_sweep_respects_tolerance_boundary() {
        for scale in [1e-3, 1.0, 1e3] {
            let base: Vec<Point3> = unit_square()
                .iter()
                .map(|q| Point3::from(q.coords * scale))
                .collect();
            for exp in 1..=12 {
                let offset = 10f64.powi(-exp) * scale;
                let mut quad = base.clone();
                quad[3].z = offset;
                let result = check_coplanar(&quad, TOL);
                // Every corner ends up offset / 4 from the fitted plane;
                // the extent of the square is sqrt(2) * scale.
                let relative = offset / (4.0 * 2f64.sqrt() * scale);
                if relative > TOL * 1.01 {
                    assert!(result.is_err(), "offset {offset} at scale {scale} accepted");
                } else if relative < TOL * 0.99 {
                    assert!(result.is_ok(), "offset {offset} at scale {scale} rejected");
                }
            }
        }
    }

    // ── newell_normal ──

    #[test]
    fn ccw_square_normal_points_up() {
        let n = newell_normal(&unit_square(), TOLERANCE).unwrap();
        assert_abs_diff_eq!(n, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn cw_square_normal_points_down() {
        let cw: Vec<Point3> = unit_square().into_iter().rev().collect();
        let n = newell_normal(&cw, TOLERANCE).unwrap();
        assert_abs_diff_eq!(n, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn concave_polygon_with_reflex_vertex_keeps_sign() {
        // Vertex 3 is reflex; a single edge cross product there would flip.
        let l_shape = [
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(4.0, 2.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(2.0, 4.0, 0.0),
            p(0.0, 4.0, 0.0),
        ];
        let n = newell_normal(&l_shape, TOLERANCE).unwrap();
        assert_abs_diff_eq!(n.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_have_no_normal() {
        let line = [p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0)];
        let err = newell_normal(&line, TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            RoomGeoError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    // ── dominant_axis / projection ──

    #[test]
    fn dominant_axis_picks_largest_component() {
        assert_eq!(dominant_axis(&Vector3::new(0.1, -0.9, 0.2)), Axis::Y);
        assert_eq!(dominant_axis(&Vector3::new(0.0, 0.0, -1.0)), Axis::Z);
    }

    #[test]
    fn dominant_axis_ties_prefer_x_then_y() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(dominant_axis(&Vector3::new(s, s, 0.0)), Axis::X);
        assert_eq!(dominant_axis(&Vector3::new(0.0, -s, s)), Axis::Y);
        assert_eq!(dominant_axis(&Vector3::new(1.0, 1.0, 1.0)), Axis::X);
    }

    #[test]
    fn projection_drops_axis() {
        let pts = [p(1.0, 2.0, 3.0)];
        assert_eq!(project_dropping(&pts, Axis::X)[0], Point2::new(2.0, 3.0));
        assert_eq!(project_dropping(&pts, Axis::Y)[0], Point2::new(1.0, 3.0));
        assert_eq!(project_dropping(&pts, Axis::Z)[0], Point2::new(1.0, 2.0));
    }
}
