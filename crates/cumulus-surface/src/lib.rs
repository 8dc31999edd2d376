#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Least-squares fitting of implicit quadric surfaces.
pub mod fit;

/// Newton-style projection of points onto a fitted surface.
pub mod project;

/// Implicit quadric surface representation.
pub mod quadric;

pub use crate::fit::fit_quadric;
pub use crate::project::{project_onto_surface, ProjectionCriteria, ProjectionResult};
pub use crate::quadric::{QuadricSurface, MIN_FIT_POINTS};
