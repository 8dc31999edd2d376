#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Depth map representation and pixel access.
pub mod depth_map;

/// Error types for the depth map module.
pub mod error;

/// Hole filling for depth maps with missing measurements.
pub mod fill;

/// Smoothing filters over depth maps.
pub mod filter;

/// Stereo disparity to depth conversion.
pub mod stereo;

pub use crate::depth_map::{DepthMap, HOLE_EPSILON};
pub use crate::error::DepthMapError;
pub use crate::fill::fill_depth_map;
