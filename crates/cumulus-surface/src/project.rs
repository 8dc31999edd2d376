use crate::quadric::QuadricSurface;

/// Squared gradient magnitude below which a point cannot be moved.
const GRADIENT_EPSILON: f64 = 1e-12;

/// Structure to define the projection parameters.
#[derive(Debug, Clone)]
pub struct ProjectionCriteria {
    /// Maximum number of iterations to perform per point.
    pub max_iterations: usize,
    /// Convergence tolerance on the absolute surface value at the point.
    pub tolerance: f64,
}

impl Default for ProjectionCriteria {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-7,
        }
    }
}

/// Result of projecting a set of points onto a surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectionResult {
    /// Number of points that reached the tolerance.
    pub num_converged: usize,
    /// Number of points that stalled or ran out of iterations.
    pub num_failed: usize,
}

/// Project points onto the zero level-set of a quadric surface.
///
/// Each point is moved along the surface gradient by the Newton step
/// `value(p) / |gradient(p)|²` until the absolute surface value drops
/// below the tolerance. A point whose gradient vanishes stays where it
/// is and counts as failed. An invalid surface leaves all points
/// untouched.
///
/// # Arguments
///
/// * `surface` - The surface to project onto.
/// * `points` - The points to project, updated in place.
/// * `criteria` - Convergence criteria.
///
/// # Returns
///
/// * `result` - Counts of converged and failed points.
pub fn project_onto_surface(
    surface: &QuadricSurface,
    points: &mut [[f64; 3]],
    criteria: ProjectionCriteria,
) -> ProjectionResult {
    if !surface.is_valid() {
        log::warn!("projection skipped, the surface is invalid");
        return ProjectionResult::default();
    }

    let mut result = ProjectionResult::default();

    for point in points.iter_mut() {
        let mut converged = false;
        let mut iterations = 0;

        while !converged && iterations < criteria.max_iterations {
            let gradient = surface.gradient(point);
            let gradient_sq =
                gradient[0] * gradient[0] + gradient[1] * gradient[1] + gradient[2] * gradient[2];
            if gradient_sq <= GRADIENT_EPSILON {
                break;
            }

            let step = surface.value(point) / gradient_sq;
            point[0] -= step * gradient[0];
            point[1] -= step * gradient[1];
            point[2] -= step * gradient[2];

            converged = surface.value(point).abs() < criteria.tolerance;
            iterations += 1;
        }

        if converged {
            result.num_converged += 1;
        } else {
            result.num_failed += 1;
        }
    }

    log::debug!(
        "projected {} points onto the surface, {} failed",
        result.num_converged,
        result.num_failed
    );
    if result.num_failed > 0 {
        log::warn!(
            "{} points did not converge onto the surface",
            result.num_failed
        );
    }

    result
}
