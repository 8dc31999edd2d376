use crate::error::CurveError;
use crate::spline::CubicSpline;
use crate::MIN_CURVE_POINTS;

/// Parameter distance between two consecutive output samples.
const RESAMPLE_STEP: f64 = 0.1;

/// Number of output samples per input segment.
const SAMPLES_PER_SEGMENT: usize = 10;

/// Resample a curve densely with one cubic spline per coordinate axis.
///
/// The point index serves as the interpolation parameter, so the splines
/// pass through every input point at the integer parameters and get
/// sampled every [`RESAMPLE_STEP`] in between. A curve of `n` points
/// comes back with `10 * (n - 1) + 1` points, the input points among
/// them. Curves with up to [`MIN_CURVE_POINTS`] points pass through
/// unchanged.
///
/// # Arguments
///
/// * `points` - The ordered curve to resample.
///
/// # Returns
///
/// The densely sampled curve.
pub fn resample_curve(points: &[[f64; 3]]) -> Result<Vec<[f64; 3]>, CurveError> {
    if points.len() <= MIN_CURVE_POINTS {
        return Ok(points.to_vec());
    }

    let ts = (0..points.len()).map(|i| i as f64).collect::<Vec<_>>();
    let xs = points.iter().map(|p| p[0]).collect::<Vec<_>>();
    let ys = points.iter().map(|p| p[1]).collect::<Vec<_>>();
    let zs = points.iter().map(|p| p[2]).collect::<Vec<_>>();

    let spline_x = CubicSpline::new(ts.clone(), xs)?;
    let spline_y = CubicSpline::new(ts.clone(), ys)?;
    let spline_z = CubicSpline::new(ts, zs)?;

    let num_samples = SAMPLES_PER_SEGMENT * (points.len() - 1) + 1;
    let mut resampled = Vec::with_capacity(num_samples);
    for k in 0..num_samples {
        let t = k as f64 * RESAMPLE_STEP;
        resampled.push([
            spline_x.evaluate(t),
            spline_y.evaluate(t),
            spline_z.evaluate(t),
        ]);
    }

    log::debug!(
        "resampled {} curve points into {}",
        points.len(),
        resampled.len()
    );

    Ok(resampled)
}
