/// Pinhole camera intrinsic parameters in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeCamera {
    /// Focal length along x in pixels.
    pub fx: f64,
    /// Focal length along y in pixels.
    pub fy: f64,
    /// Principal point x coordinate in pixels.
    pub cx: f64,
    /// Principal point y coordinate in pixels.
    pub cy: f64,
}
