use crate::quadric::{QuadricSurface, MIN_FIT_POINTS};

/// Relative tolerance below which an elimination pivot counts as zero.
const PIVOT_EPSILON: f64 = 1e-12;

/// Fit an implicit quadric surface to a set of 3D points.
///
/// Builds one design-matrix row `[x², y², z², yz, xz, xy, x, y, z]` per
/// point and solves the normal equations `(MᵀM)·c = Mᵀ·1` for the nine
/// coefficients, an ordinary least-squares fit of the constraint
/// "quadric form = 1". The order of the points does not matter.
///
/// Fewer than [`MIN_FIT_POINTS`] points, or a normal system the
/// factorization cannot use, produce an invalid surface.
///
/// # Arguments
///
/// * `points` - The points to fit.
///
/// # Returns
///
/// The fitted surface, invalid when underdetermined.
pub fn fit_quadric(points: &[[f64; 3]]) -> QuadricSurface {
    if points.len() < MIN_FIT_POINTS {
        log::warn!(
            "quadric fit needs at least {} points, got {}",
            MIN_FIT_POINTS,
            points.len()
        );
        return QuadricSurface::default();
    }

    // Build design matrix M (N x 9), one monomial row per point
    let n = points.len();
    let mut m = faer::Mat::<f64>::zeros(n, 9);
    for (i, p) in points.iter().enumerate() {
        let [x, y, z] = *p;
        unsafe {
            m.write_unchecked(i, 0, x * x);
            m.write_unchecked(i, 1, y * y);
            m.write_unchecked(i, 2, z * z);
            m.write_unchecked(i, 3, y * z);
            m.write_unchecked(i, 4, x * z);
            m.write_unchecked(i, 5, x * y);
            m.write_unchecked(i, 6, x);
            m.write_unchecked(i, 7, y);
            m.write_unchecked(i, 8, z);
        }
    }

    let ones = faer::Mat::<f64>::from_fn(n, 1, |_, _| 1.0);
    let mtm = m.transpose() * m.as_ref();
    let mtb = m.transpose() * ones.as_ref();

    let mut ata = [[0.0f64; 9]; 9];
    let mut atb = [0.0f64; 9];
    for i in 0..9 {
        for j in 0..9 {
            ata[i][j] = mtm.read(i, j);
        }
        atb[i] = mtb.read(i, 0);
    }

    match solve_symmetric_9x9(&ata, &atb) {
        Some(raw) => {
            log::debug!("quadric coefficients: {:?}", raw);
            QuadricSurface::from_raw_coefficients(raw)
        }
        None => {
            log::warn!("quadric normal equations are not solvable, surface marked invalid");
            QuadricSurface::default()
        }
    }
}

/// Solve the symmetric positive semidefinite system `a·x = b` with an LDLT
/// factorization.
///
/// Pivots below [`PIVOT_EPSILON`] relative to the largest diagonal entry
/// are treated as exact zeros and their directions dropped, which keeps
/// rank-deficient but consistent systems (coplanar input points) solvable.
/// Returns `None` when a pivot turns negative beyond the tolerance, i.e.
/// the matrix is not a valid normal matrix.
fn solve_symmetric_9x9(a: &[[f64; 9]; 9], b: &[f64; 9]) -> Option<[f64; 9]> {
    const N: usize = 9;

    let mut lower = [[0.0f64; N]; N];
    let mut diag = [0.0f64; N];

    let max_diag = (0..N).fold(0.0f64, |acc, i| acc.max(a[i][i].abs()));
    let pivot_tol = PIVOT_EPSILON * max_diag.max(1.0);

    for j in 0..N {
        let mut pivot = a[j][j];
        for k in 0..j {
            pivot -= lower[j][k] * lower[j][k] * diag[k];
        }

        if pivot.abs() <= pivot_tol {
            // semidefinite direction, drop it from the factorization
            diag[j] = 0.0;
            continue;
        }
        if pivot < 0.0 {
            return None;
        }

        diag[j] = pivot;
        for i in (j + 1)..N {
            let mut v = a[i][j];
            for k in 0..j {
                v -= lower[i][k] * lower[j][k] * diag[k];
            }
            lower[i][j] = v / pivot;
        }
    }

    // forward substitution L·y = b
    let mut y = *b;
    for i in 0..N {
        for k in 0..i {
            y[i] -= lower[i][k] * y[k];
        }
    }

    // diagonal D·z = y, dropped directions contribute nothing
    let mut x = [0.0f64; N];
    for i in 0..N {
        x[i] = if diag[i] > 0.0 { y[i] / diag[i] } else { 0.0 };
    }

    // backward substitution Lᵀ·x = z
    for i in (0..N).rev() {
        for k in (i + 1)..N {
            x[i] -= lower[k][i] * x[k];
        }
    }

    Some(x)
}
