use cumulus_depth::DepthMap;

use crate::camera::PinholeCamera;
use crate::error::CloudError;
use crate::pointcloud::PointCloud;

/// Back-project a depth map into a colored point cloud.
///
/// Each cell (u, v) holding a depth z within `depth_range` produces the
/// point `[(u - cx) * z / fx, (v - cy) * z / fy, z]`. Cells outside the
/// range are dropped, which also discards holes and far-field noise the
/// stereo matcher could not resolve.
///
/// # Arguments
///
/// * `depth` - The depth map to back-project.
/// * `colors` - Optional row-major per-cell colors over the same grid.
/// * `camera` - The pinhole intrinsics of the depth camera.
/// * `depth_range` - Inclusive (min, max) band of depths to keep.
///
/// # Returns
///
/// The back-projected point cloud, colored when colors were supplied.
///
/// # Errors
///
/// If the length of the color buffer does not match the depth grid, an
/// error is returned.
pub fn unproject_depth_map(
    depth: &DepthMap,
    colors: Option<&[[u8; 3]]>,
    camera: &PinholeCamera,
    depth_range: (f64, f64),
) -> Result<PointCloud, CloudError> {
    if let Some(colors) = colors {
        if colors.len() != depth.num_pixels() {
            return Err(CloudError::InvalidColorsLength(
                colors.len(),
                depth.num_pixels(),
            ));
        }
    }

    let width = depth.width();
    let height = depth.height();
    let data = depth.as_slice();

    let mut points = Vec::new();
    let mut point_colors = colors.map(|_| Vec::new());

    for v in 0..height {
        for u in 0..width {
            let index = v * width + u;
            let z = data[index] as f64;
            if z < depth_range.0 || z > depth_range.1 {
                continue;
            }

            let x = (u as f64 - camera.cx) * z / camera.fx;
            let y = (v as f64 - camera.cy) * z / camera.fy;
            points.push([x, y, z]);

            if let (Some(point_colors), Some(colors)) = (point_colors.as_mut(), colors) {
                point_colors.push(colors[index]);
            }
        }
    }

    Ok(PointCloud::new(points, point_colors))
}
