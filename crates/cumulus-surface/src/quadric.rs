/// Minimum number of points for a determinate quadric fit.
pub const MIN_FIT_POINTS: usize = 9;

/// An implicit quadric surface.
///
/// The surface is the zero set of
///
/// `A·x² + B·y² + C·z² + 2(D·yz + E·xz + F·xy) + 2(G·x + H·y + I·z) + J`
///
/// with the constant term fixed at `J = -1`. The nine stored coefficients
/// follow the doubled convention above, so the cross and linear terms D..I
/// hold half of the raw least-squares solution.
///
/// A surface fitted on fewer than [`MIN_FIT_POINTS`] points is invalid and
/// yields no meaningful value or gradient; consumers check
/// [`QuadricSurface::is_valid`] before evaluating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadricSurface {
    coeffs: [f64; 9],
    valid: bool,
}

impl Default for QuadricSurface {
    /// An invalid surface with zeroed coefficients.
    fn default() -> Self {
        Self {
            coeffs: [0.0; 9],
            valid: false,
        }
    }
}

impl QuadricSurface {
    /// Constant term of the implicit equation.
    pub const J: f64 = -1.0;

    /// Build a surface from a raw normal-equations solution, halving the
    /// cross and linear terms into the doubled-coefficient convention.
    pub(crate) fn from_raw_coefficients(raw: [f64; 9]) -> Self {
        let mut coeffs = raw;
        for c in coeffs.iter_mut().skip(3) {
            *c *= 0.5;
        }
        Self {
            coeffs,
            valid: true,
        }
    }

    /// Whether the surface holds a usable fit.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The nine stored coefficients A..I.
    #[inline]
    pub fn coefficients(&self) -> &[f64; 9] {
        &self.coeffs
    }

    /// Signed value of the implicit function at `p`, zero on the surface.
    pub fn value(&self, p: &[f64; 3]) -> f64 {
        let [a, b, c, d, e, f, g, h, i] = self.coeffs;
        let [x, y, z] = *p;
        a * x * x
            + b * y * y
            + c * z * z
            + 2.0 * (d * y * z + e * x * z + f * x * y)
            + 2.0 * (g * x + h * y + i * z)
            + Self::J
    }

    /// Gradient of the implicit function at `p`.
    pub fn gradient(&self, p: &[f64; 3]) -> [f64; 3] {
        let [a, b, c, d, e, f, g, h, i] = self.coeffs;
        let [x, y, z] = *p;
        [
            2.0 * (a * x + e * z + f * y + g),
            2.0 * (b * y + d * z + f * x + h),
            2.0 * (c * z + d * y + e * x + i),
        ]
    }
}
