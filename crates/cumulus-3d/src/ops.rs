/// Utility function to compute the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - A point in 3D space.
/// * `b` - Another point in 3D space.
///
/// # Returns
///
/// The Euclidean distance between the two points.
///
/// Example:
/// ```
/// use cumulus_3d::ops::euclidean_distance;
///
/// let a = [0.0, 0.0, 0.0];
/// let b = [3.0, 4.0, 0.0];
/// assert_eq!(euclidean_distance(&a, &b), 5.0);
/// ```
pub fn euclidean_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}
