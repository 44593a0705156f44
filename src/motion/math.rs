//! Pure polyline math for path-constrained motion.
//!
//! Progress is normalized: a value in `[0, 1)` covers one traversal of
//! the polyline, mapped linearly onto the segment count rather than
//! onto arc length. Segments of different lengths are crossed at
//! different world speeds within a traversal; total duration is still
//! arc-length exact via [`travel_duration`].

use glam::Vec3;

/// Sum of Euclidean distances between consecutive points.
///
/// 0 for fewer than 2 points.
#[must_use]
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}

/// Wall-clock seconds needed to travel the polyline `loops` times at
/// `speed` world units per second.
///
/// Precondition: `speed > 0` (callers reject non-positive speed before
/// any driver exists).
#[must_use]
pub fn travel_duration(points: &[Vec3], speed: f32, loops: f32) -> f32 {
    debug_assert!(speed > 0.0, "travel_duration requires a positive speed");
    polyline_length(points) / speed * loops
}

/// Position at normalized progress `t`.
///
/// `t * (N-1)` selects a segment and a local interpolation factor; the
/// result is the lerp between that segment's endpoints. A `t` at or
/// past the final boundary (exactly 1.0 under floating point) returns
/// the last point verbatim rather than indexing out of range.
#[must_use]
pub fn position_at(points: &[Vec3], t: f32) -> Vec3 {
    assert!(!points.is_empty(), "position_at on an empty polyline");

    let last = points.len() - 1;
    let segment_float = t.clamp(0.0, 1.0) * last as f32;
    let segment = segment_float.floor() as usize;
    if segment >= last {
        return points[last];
    }

    let local = segment_float - segment as f32;
    points[segment].lerp(points[segment + 1], local)
}

/// Unit direction of travel at normalized progress `t`.
///
/// Uses the same segment [`position_at`] selects, except at the final
/// boundary where the last two points are used so a direction is
/// defined even at the path's end. A zero-length segment yields
/// `Vec3::ZERO`; callers must treat that as degenerate and skip any
/// orientation update.
#[must_use]
pub fn direction_at(points: &[Vec3], t: f32) -> Vec3 {
    assert!(points.len() >= 2, "direction_at needs at least 2 points");

    let last = points.len() - 1;
    let segment_float = t.clamp(0.0, 1.0) * last as f32;
    let segment = (segment_float.floor() as usize).min(last - 1);

    (points[segment + 1] - points[segment]).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn square() -> Vec<Vec3> {
        vec![
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
        ]
    }

    #[test]
    fn length_sums_segments() {
        assert!(approx(polyline_length(&square()), 40.0));
    }

    #[test]
    fn length_degenerate_polylines() {
        assert!(approx(polyline_length(&[]), 0.0));
        assert!(approx(polyline_length(&[Vec3::ONE]), 0.0));
    }

    #[test]
    fn duration_scales_with_speed_and_loops() {
        let points = square();
        let base = travel_duration(&points, 5.0, 1.0);
        assert!(approx(base, 8.0));
        // Doubling speed halves duration; doubling loops doubles it.
        assert!(approx(travel_duration(&points, 10.0, 1.0), base / 2.0));
        assert!(approx(travel_duration(&points, 5.0, 2.0), base * 2.0));
    }

    #[test]
    fn position_at_endpoints() {
        let points = square();
        assert_eq!(position_at(&points, 0.0), points[0]);
        assert_eq!(position_at(&points, 1.0), points[4]);
    }

    #[test]
    fn position_at_lies_on_segment() {
        let points = square();
        // t = 0.375 → segment_float = 1.5 → halfway along segment 1
        let pos = position_at(&points, 0.375);
        assert!(approx(pos.x, 10.0), "got {pos}");
        assert!(approx(pos.z, 5.0), "got {pos}");
    }

    #[test]
    fn position_at_single_point() {
        let points = [Vec3::new(3.0, 4.0, 5.0)];
        assert_eq!(position_at(&points, 0.5), points[0]);
    }

    #[test]
    fn direction_follows_current_segment() {
        let points = square();
        let dir = direction_at(&points, 0.1);
        assert!(approx(dir.x, 1.0), "got {dir}");
        let dir = direction_at(&points, 0.375);
        assert!(approx(dir.z, 1.0), "got {dir}");
    }

    #[test]
    fn direction_defined_at_path_end() {
        let points = [Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)];
        // At t = 1.0 the final segment's direction is still reported.
        let dir = direction_at(&points, 1.0);
        assert!(approx(dir.z, 1.0), "got {dir}");
    }

    #[test]
    fn direction_zero_for_coincident_points() {
        let points = [Vec3::ONE, Vec3::ONE];
        assert_eq!(direction_at(&points, 0.5), Vec3::ZERO);
    }
}
