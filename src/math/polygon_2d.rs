use super::Point2;

/// Computes the signed area of a 2D polygon (shoelace formula).
///
/// Uses a right-handed, y-up convention: positive for counter-clockwise,
/// negative for clockwise. Every winding decision in this crate derives from
/// this sign, so floor/ceiling/wall normal directions depend on it.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the polygon winds clockwise (negative signed area).
#[must_use]
pub fn is_clockwise(points: &[Point2]) -> bool {
    signed_area_2d(points) < 0.0
}

/// Returns the indices of `points` in counter-clockwise order.
///
/// `[0, 1, .., n-1]` for counter-clockwise or zero-area input, the reverse
/// for clockwise input.
#[must_use]
pub fn counter_clockwise_order(points: &[Point2]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    if is_clockwise(points) {
        order.reverse();
    }
    order
}

/// Returns the polygon in counter-clockwise order.
///
/// Clockwise input is reversed; counter-clockwise and zero-area input is
/// returned unchanged. Applying it twice equals applying it once.
#[must_use]
pub fn orient_counter_clockwise(points: &[Point2]) -> Vec<Point2> {
    counter_clockwise_order(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn ccw_rect() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0), p(0.0, 3.0)]
    }

    #[test]
    fn signed_area_ccw_rect() {
        assert_abs_diff_eq!(signed_area_2d(&ccw_rect()), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn signed_area_cw_rect() {
        let cw: Vec<Point2> = ccw_rect().into_iter().rev().collect();
        assert_abs_diff_eq!(signed_area_2d(&cw), -12.0, epsilon = 1e-12);
        assert!(is_clockwise(&cw));
    }

    #[test]
    fn signed_area_degenerate() {
        assert_abs_diff_eq!(signed_area_2d(&[]), 0.0);
        assert_abs_diff_eq!(signed_area_2d(&[p(1.0, 1.0), p(2.0, 2.0)]), 0.0);
        assert!(!is_clockwise(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]));
    }

    #[test]
    fn orient_keeps_ccw_order() {
        assert_eq!(orient_counter_clockwise(&ccw_rect()), ccw_rect());
    }

    #[test]
    fn orient_reverses_cw_and_is_idempotent() {
        let cw: Vec<Point2> = ccw_rect().into_iter().rev().collect();
        let once = orient_counter_clockwise(&cw);
        assert_eq!(once, ccw_rect());
        assert_eq!(orient_counter_clockwise(&once), once);
    }

    #[test]
    fn order_maps_back_to_input_indices() {
        let cw: Vec<Point2> = ccw_rect().into_iter().rev().collect();
        assert_eq!(counter_clockwise_order(&cw), vec![3, 2, 1, 0]);
        assert_eq!(counter_clockwise_order(&ccw_rect()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn orient_concave_l_shape() {
        let l_cw = vec![
            p(0.0, 0.0),
            p(0.0, 4.0),
            p(2.0, 4.0),
            p(2.0, 2.0),
            p(4.0, 2.0),
            p(4.0, 0.0),
        ];
        let oriented = orient_counter_clockwise(&l_cw);
        assert!(!is_clockwise(&oriented));
        assert_eq!(oriented[0], p(4.0, 0.0));
    }
}
