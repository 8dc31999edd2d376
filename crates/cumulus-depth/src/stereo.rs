use crate::depth_map::DepthMap;
use crate::error::DepthMapError;

/// Convert a stereo disparity buffer into a depth map.
///
/// Depth is `focal * baseline / disparity` per cell. Cells with a
/// non-positive disparity carry no measurement and become holes.
///
/// # Arguments
///
/// * `disparity` - Row-major disparity values in pixels.
/// * `width` - The number of columns.
/// * `height` - The number of rows.
/// * `focal` - Horizontal focal length in pixels.
/// * `baseline` - Stereo baseline in world units.
///
/// # Returns
///
/// The converted depth map.
///
/// # Errors
///
/// If the length of the disparity buffer does not match the grid size, an
/// error is returned.
pub fn depth_from_disparity(
    disparity: &[f32],
    width: usize,
    height: usize,
    focal: f64,
    baseline: f64,
) -> Result<DepthMap, DepthMapError> {
    if disparity.len() != width * height {
        return Err(DepthMapError::InvalidDataLength(
            disparity.len(),
            width * height,
        ));
    }

    let focal_baseline = focal * baseline;
    let data = disparity
        .iter()
        .map(|&d| {
            if d > 0.0 {
                (focal_baseline / d as f64) as f32
            } else {
                0.0
            }
        })
        .collect();

    DepthMap::new(width, height, data)
}
