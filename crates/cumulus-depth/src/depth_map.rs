use crate::error::DepthMapError;

/// Depth value below which a cell counts as a hole.
///
/// Stereo matchers leave cells without a reliable measurement at zero; the
/// epsilon absorbs the rounding noise such buffers carry.
pub const HOLE_EPSILON: f32 = 1e-3;

/// A dense single channel depth map with row-major single precision storage.
///
/// # Examples
///
/// ```
/// use cumulus_depth::DepthMap;
///
/// let depth = DepthMap::from_size_val(4, 3, 1.5);
///
/// assert_eq!(depth.width(), 4);
/// assert_eq!(depth.height(), 3);
/// assert_eq!(depth.get(0, 0), Some(1.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DepthMap {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl DepthMap {
    /// Create a new depth map from row-major data.
    ///
    /// # Arguments
    ///
    /// * `width` - The number of columns.
    /// * `height` - The number of rows.
    /// * `data` - Row-major depth values, one per cell.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the grid size, an error is
    /// returned.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self, DepthMapError> {
        if data.len() != width * height {
            return Err(DepthMapError::InvalidDataLength(
                data.len(),
                width * height,
            ));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a new depth map with every cell set to `val`.
    pub fn from_size_val(width: usize, height: usize, val: f32) -> Self {
        Self {
            width,
            height,
            data: vec![val; width * height],
        }
    }

    /// The number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of cells.
    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.data.len()
    }

    /// Get the depth value at pixel coordinates (x, y), or `None` when the
    /// coordinates fall outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Whether the cell at (x, y) holds a valid measurement.
    #[inline]
    pub fn is_valid(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|d| d > HOLE_EPSILON)
    }

    /// Get the underlying data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Get the underlying data as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
