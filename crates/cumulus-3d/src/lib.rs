#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pinhole camera intrinsics.
pub mod camera;

/// Error types for the point cloud module.
pub mod error;

/// Operations on 3D points.
pub mod ops;

/// Point cloud container.
pub mod pointcloud;

/// Depth map back-projection into point clouds.
pub mod unproject;

pub use crate::camera::PinholeCamera;
pub use crate::error::CloudError;
pub use crate::pointcloud::PointCloud;
pub use crate::unproject::unproject_depth_map;
