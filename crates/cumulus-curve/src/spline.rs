use crate::error::CurveError;

/// A natural cubic spline through a set of knots.
///
/// Interpolates the values `ys` against the strictly increasing
/// parameters `ts`, with zero curvature at both ends. Evaluation outside
/// the parameter range extends the boundary segment polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    ts: Vec<f64>,
    ys: Vec<f64>,
    second_derivatives: Vec<f64>,
}

impl CubicSpline {
    /// Construct a spline through the given knots.
    ///
    /// # Arguments
    ///
    /// * `ts` - Interpolation parameters, strictly increasing.
    /// * `ys` - Values to interpolate, one per parameter.
    ///
    /// # Errors
    ///
    /// Fails when the lengths differ, fewer than two knots are given, or
    /// the parameters are not strictly increasing.
    pub fn new(ts: Vec<f64>, ys: Vec<f64>) -> Result<Self, CurveError> {
        if ts.len() != ys.len() {
            return Err(CurveError::LengthMismatch(ts.len(), ys.len()));
        }
        if ts.len() < 2 {
            return Err(CurveError::InsufficientPoints(ts.len(), 2));
        }
        for i in 1..ts.len() {
            if ts[i] <= ts[i - 1] {
                return Err(CurveError::NonIncreasingParameters(i));
            }
        }

        let second_derivatives = solve_second_derivatives(&ts, &ys);

        Ok(Self {
            ts,
            ys,
            second_derivatives,
        })
    }

    /// Evaluate the spline at parameter `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        let i = self.segment_index(t);
        let h = self.ts[i + 1] - self.ts[i];
        let u = t - self.ts[i];

        let m_i = self.second_derivatives[i];
        let m_next = self.second_derivatives[i + 1];
        let slope = (self.ys[i + 1] - self.ys[i]) / h;

        self.ys[i]
            + u * (slope - h * (2.0 * m_i + m_next) / 6.0)
            + u * u * m_i / 2.0
            + u * u * u * (m_next - m_i) / (6.0 * h)
    }

    /// Index of the segment whose polynomial covers `t`.
    fn segment_index(&self, t: f64) -> usize {
        self.ts
            .partition_point(|&knot| knot <= t)
            .saturating_sub(1)
            .min(self.ts.len() - 2)
    }
}

/// Solve the natural spline tridiagonal system for the knot second
/// derivatives with the Thomas algorithm. The boundary derivatives are
/// zero, so only the interior knots are unknowns.
fn solve_second_derivatives(ts: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = ts.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        // two knots make a straight segment
        return m;
    }

    let unknowns = n - 2;
    let mut c_prime = vec![0.0; unknowns];
    let mut d_prime = vec![0.0; unknowns];

    // forward sweep, the matrix is strictly diagonally dominant
    for k in 0..unknowns {
        let i = k + 1;
        let h_prev = ts[i] - ts[i - 1];
        let h_next = ts[i + 1] - ts[i];
        let diag = 2.0 * (h_prev + h_next);
        let rhs = 6.0 * ((ys[i + 1] - ys[i]) / h_next - (ys[i] - ys[i - 1]) / h_prev);

        if k == 0 {
            c_prime[k] = h_next / diag;
            d_prime[k] = rhs / diag;
        } else {
            let w = diag - h_prev * c_prime[k - 1];
            c_prime[k] = h_next / w;
            d_prime[k] = (rhs - h_prev * d_prime[k - 1]) / w;
        }
    }

    m[unknowns] = d_prime[unknowns - 1];
    for k in (0..unknowns - 1).rev() {
        m[k + 1] = d_prime[k] - c_prime[k] * m[k + 2];
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spline_interpolates_knots() {
        let ts = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = vec![1.0, 3.0, 2.0, 5.0, 4.0];
        let spline = CubicSpline::new(ts.clone(), ys.clone()).unwrap();

        for (t, y) in ts.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.evaluate(*t), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_spline_linear_data_stays_linear() {
        let ts = vec![0.0, 1.0, 2.0, 3.0];
        let ys = ts.iter().map(|t| 2.0 * t + 1.0).collect::<Vec<_>>();
        let spline = CubicSpline::new(ts, ys).unwrap();

        for k in 0..=30 {
            let t = k as f64 * 0.1;
            assert_relative_eq!(spline.evaluate(t), 2.0 * t + 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_spline_symmetric_arch() {
        let ts = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 1.0, 0.0];
        let spline = CubicSpline::new(ts, ys).unwrap();

        // second derivatives are m1 = m2 = -1.2, the apex sits at 1.15
        assert_relative_eq!(spline.evaluate(1.5), 1.15, epsilon = 1e-9);
        assert_relative_eq!(spline.evaluate(0.5), spline.evaluate(2.5), epsilon = 1e-12);
    }

    #[test]
    fn test_spline_non_uniform_knots() {
        let ts = vec![0.0, 0.5, 2.0];
        let ys = vec![1.0, 3.0, 2.0];
        let spline = CubicSpline::new(ts, ys).unwrap();

        assert_relative_eq!(spline.evaluate(0.5), 3.0, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(2.0), 2.0, epsilon = 1e-12);
        // hand-solved: the single interior second derivative is -7
        assert_relative_eq!(spline.evaluate(1.25), 3.484375, epsilon = 1e-9);
    }

    #[test]
    fn test_spline_two_knots() {
        let spline = CubicSpline::new(vec![0.0, 2.0], vec![1.0, 5.0]).unwrap();
        assert_relative_eq!(spline.evaluate(1.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spline_length_mismatch() {
        let result = CubicSpline::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0]);
        assert_eq!(result, Err(CurveError::LengthMismatch(3, 2)));
    }

    #[test]
    fn test_spline_too_few_knots() {
        let result = CubicSpline::new(vec![0.0], vec![1.0]);
        assert_eq!(result, Err(CurveError::InsufficientPoints(1, 2)));
    }

    #[test]
    fn test_spline_non_increasing_parameters() {
        let result = CubicSpline::new(vec![0.0, 1.0, 1.0], vec![1.0, 2.0, 3.0]);
        assert_eq!(result, Err(CurveError::NonIncreasingParameters(2)));
    }
}
