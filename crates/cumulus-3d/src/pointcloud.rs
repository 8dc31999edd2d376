/// A point cloud with points and per-point colors.
#[derive(Debug, Clone)]
pub struct PointCloud {
    // The points in the point cloud.
    points: Vec<[f64; 3]>,
    // The colors of the points.
    colors: Option<Vec<[u8; 3]>>,
}

impl PointCloud {
    /// Create a new point cloud from points and colors (optional).
    pub fn new(points: Vec<[f64; 3]>, colors: Option<Vec<[u8; 3]>>) -> Self {
        Self { points, colors }
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &Vec<[f64; 3]> {
        &self.points
    }

    /// Get as reference the colors of the points in the point cloud.
    pub fn colors(&self) -> Option<&Vec<[u8; 3]>> {
        self.colors.as_ref()
    }

    /// Get the minimum bound of the point cloud.
    pub fn min_bound(&self) -> [f64; 3] {
        if self.points.is_empty() {
            return [0.0; 3];
        }
        self.points.iter().fold(self.points[0], |a, b| {
            [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])]
        })
    }

    /// Get the maximum bound of the point cloud.
    pub fn max_bound(&self) -> [f64; 3] {
        if self.points.is_empty() {
            return [0.0; 3];
        }
        self.points.iter().fold(self.points[0], |a, b| {
            [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])]
        })
    }
}
