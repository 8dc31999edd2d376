use cumulus_3d::ops::euclidean_distance;

use crate::MIN_CURVE_POINTS;

/// Factor over the average spacing beyond which a point is an outlier.
const FAR_FACTOR: f64 = 3.0;

/// Factor of the average spacing under which neighbors merge into one.
const NEAR_FACTOR: f64 = 0.5;

/// Denoise a drawn curve by pruning outliers and merging near-duplicates.
///
/// The first stage drops points whose distance to their neighbors exceeds
/// [`FAR_FACTOR`] times the average consecutive spacing. Endpoints stay
/// when either of their two nearest neighbors is close enough, interior
/// points need both. The second stage walks the survivors and keeps only
/// points farther than [`NEAR_FACTOR`] times the recomputed average
/// spacing from the last kept point.
///
/// Either stage returns its own input unchanged when it would leave
/// fewer than [`MIN_CURVE_POINTS`] points, and a curve that short is
/// passed through untouched.
///
/// # Arguments
///
/// * `points` - The ordered curve to denoise.
///
/// # Returns
///
/// The denoised curve, never longer than the input.
pub fn prefilter_curve(points: &[[f64; 3]]) -> Vec<[f64; 3]> {
    if points.len() <= MIN_CURVE_POINTS {
        return points.to_vec();
    }

    let far_threshold = FAR_FACTOR * average_spacing(points);

    let last = points.len() - 1;
    let mut survivors = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let keep = if i == 0 {
            euclidean_distance(point, &points[1]) < far_threshold
                || euclidean_distance(point, &points[2]) < far_threshold
        } else if i == last {
            euclidean_distance(point, &points[last - 1]) < far_threshold
                || euclidean_distance(point, &points[last - 2]) < far_threshold
        } else {
            euclidean_distance(point, &points[i - 1]) < far_threshold
                && euclidean_distance(point, &points[i + 1]) < far_threshold
        };
        if keep {
            survivors.push(*point);
        }
    }

    if survivors.len() < MIN_CURVE_POINTS {
        log::warn!(
            "outlier pruning left {} points, keeping the original curve",
            survivors.len()
        );
        return points.to_vec();
    }

    let near_threshold = NEAR_FACTOR * average_spacing(&survivors);

    let mut merged = Vec::with_capacity(survivors.len());
    let mut last_kept = survivors[0];
    merged.push(last_kept);
    for point in &survivors[1..] {
        if euclidean_distance(point, &last_kept) > near_threshold {
            merged.push(*point);
            last_kept = *point;
        }
    }

    if merged.len() < MIN_CURVE_POINTS {
        log::warn!(
            "duplicate merging left {} points, keeping the pruned curve",
            merged.len()
        );
        return survivors;
    }

    merged
}

/// Average Euclidean distance between consecutive points.
fn average_spacing(points: &[[f64; 3]]) -> f64 {
    let total = points
        .windows(2)
        .map(|pair| euclidean_distance(&pair[0], &pair[1]))
        .sum::<f64>();
    total / (points.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_average_spacing() {
        let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 3.0, 0.0]];
        assert_relative_eq!(average_spacing(&points), 2.0);
    }

    #[test]
    fn test_prefilter_passthrough_short() {
        let points = [[0.0, 0.0, 0.0], [100.0, 0.0, 0.0], [0.0, 100.0, 0.0]];
        assert_eq!(prefilter_curve(&points), points.to_vec());
    }

    #[test]
    fn test_prefilter_clean_curve_unchanged() {
        let points = (0..6).map(|i| [i as f64, 0.0, 0.0]).collect::<Vec<_>>();
        assert_eq!(prefilter_curve(&points), points);
    }

    #[test]
    fn test_prefilter_removes_spike() {
        let mut points = (0..10).map(|i| [i as f64, 0.0, 0.0]).collect::<Vec<_>>();
        points[4] = [4.0, 10.0, 0.0];

        let filtered = prefilter_curve(&points);

        // the spike and its two neighbors all sit past the far threshold
        let expected = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [6.0, 0.0, 0.0],
            [7.0, 0.0, 0.0],
            [8.0, 0.0, 0.0],
            [9.0, 0.0, 0.0],
        ];
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_prefilter_merges_near_duplicates() {
        let xs = [0.0, 0.05, 0.1, 1.0, 2.0, 2.05, 3.0];
        let points = xs.map(|x| [x, 0.0, 0.0]);

        let filtered = prefilter_curve(&points);

        let expected = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
        ];
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_prefilter_pruning_fallback_keeps_input() {
        // three coincident points and one three-spacings away: the far
        // stage keeps only two, so the original curve comes back
        let points = [
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
        ];
        assert_eq!(prefilter_curve(&points), points.to_vec());
    }

    #[test]
    fn test_prefilter_merging_fallback_keeps_survivors() {
        // the far stage drops the stray tail, then merging would collapse
        // the coincident survivors to one point and is rolled back
        let points = [
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [4.0, 0.0, 0.0],
        ];
        assert_eq!(prefilter_curve(&points), vec![[0.0, 0.0, 0.0]; 3]);
    }

    #[test]
    fn test_prefilter_never_grows() {
        let points = [
            [0.0, 0.0, 0.0],
            [0.5, 0.1, 0.0],
            [1.0, 0.0, 0.2],
            [1.5, -0.1, 0.0],
            [2.0, 0.0, 0.0],
            [9.0, 9.0, 9.0],
        ];
        assert!(prefilter_curve(&points).len() <= points.len());
    }
}
