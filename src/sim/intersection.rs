//! Trajectory/box intersection
//!
//! Containment is tested per sample, not per segment: a fast projectile can
//! step over a thin box between two samples. With the default resolution the
//! gap between samples is far smaller than any box on the board.

use super::geometry::Aabb;
use super::trajectory::Trajectory;

/// Index of the first sample strictly inside `bbox`
///
/// The final sample (ground impact) is never tested, so a path ending on a
/// box does not count as entering it.
pub fn first_index_in_box(path: &Trajectory, bbox: &Aabb) -> Option<usize> {
    let scan = path.len().saturating_sub(1);
    path.points()[..scan]
        .iter()
        .position(|&p| bbox.contains(p))
}

/// The part of `path` before it first enters `bbox`
///
/// Returns `path` untouched when it never enters the box; otherwise the
/// samples strictly before the intersection (the entering sample is dropped).
pub fn truncate_at_intersection(mut path: Trajectory, bbox: &Aabb) -> Trajectory {
    if let Some(index) = first_index_in_box(&path, bbox) {
        path.truncate(index);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;

    fn path_of(points: &[(f64, f64)]) -> Trajectory {
        Trajectory::from_points(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect(), 0.1)
    }

    fn unit_box() -> Aabb {
        Aabb::new(1.0, 2.0, 1.0, 2.0).unwrap()
    }

    #[test]
    fn test_first_index_found() {
        let path = path_of(&[(0.0, 0.0), (1.5, 1.5), (1.6, 1.6), (3.0, 0.0)]);
        assert_eq!(first_index_in_box(&path, &unit_box()), Some(1));
    }

    #[test]
    fn test_no_intersection() {
        let path = path_of(&[(0.0, 0.0), (3.0, 3.0), (4.0, 0.0)]);
        assert_eq!(first_index_in_box(&path, &unit_box()), None);
    }

    #[test]
    fn test_final_sample_ignored() {
        let path = path_of(&[(0.0, 0.0), (0.5, 0.5), (1.5, 1.5)]);
        assert_eq!(first_index_in_box(&path, &unit_box()), None);
    }

    #[test]
    fn test_edge_samples_do_not_count() {
        let path = path_of(&[(1.0, 1.5), (1.5, 2.0), (1.5, 1.5), (0.0, 0.0)]);
        assert_eq!(first_index_in_box(&path, &unit_box()), Some(2));
    }

    #[test]
    fn test_short_paths() {
        assert_eq!(first_index_in_box(&Trajectory::default(), &unit_box()), None);
        // A single sample is the final sample
        let single = path_of(&[(1.5, 1.5)]);
        assert_eq!(first_index_in_box(&single, &unit_box()), None);
    }

    #[test]
    fn test_tunnelling_between_samples() {
        // Consecutive samples straddle the box without landing inside it
        let path = path_of(&[(0.0, 1.5), (3.0, 1.5), (4.0, 0.0)]);
        assert_eq!(first_index_in_box(&path, &unit_box()), None);
    }

    #[test]
    fn test_truncate_drops_entering_sample() {
        let path = path_of(&[(0.0, 0.0), (0.5, 0.5), (1.5, 1.5), (3.0, 0.0)]);
        let cut = truncate_at_intersection(path, &unit_box());
        assert_eq!(cut.points(), &[DVec2::new(0.0, 0.0), DVec2::new(0.5, 0.5)]);
    }

    #[test]
    fn test_truncate_at_origin_is_empty() {
        let path = path_of(&[(1.5, 1.5), (3.0, 0.0)]);
        assert!(truncate_at_intersection(path, &unit_box()).is_empty());
    }

    #[test]
    fn test_truncate_without_intersection_is_identity() {
        let path = path_of(&[(0.0, 0.0), (3.0, 3.0), (4.0, 0.0)]);
        assert_eq!(truncate_at_intersection(path.clone(), &unit_box()), path);
    }

    proptest! {
        #[test]
        fn prop_truncation_never_grows(
            raw in prop::collection::vec((0.0f64..10.0, 0.0f64..10.0), 0..60),
            left in 0.0f64..8.0,
            bottom in 0.0f64..8.0,
            w in 0.1f64..4.0,
            h in 0.1f64..4.0,
        ) {
            let path = path_of(&raw);
            let bbox = Aabb::new(left, left + w, bottom, bottom + h).unwrap();
            let hit = first_index_in_box(&path, &bbox);
            let cut = truncate_at_intersection(path.clone(), &bbox);

            prop_assert!(cut.len() <= path.len());
            match hit {
                None => prop_assert_eq!(&cut, &path),
                Some(i) => {
                    prop_assert_eq!(cut.len(), i);
                    prop_assert_eq!(cut.points(), &path.points()[..i]);
                    prop_assert!(cut.iter().all(|p| !bbox.contains(p)));
                }
            }
        }
    }
}
