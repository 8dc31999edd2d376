/// An error type for the point cloud module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CloudError {
    /// Error when the color buffer does not cover the depth map grid.
    #[error("Colors length ({0}) does not match the number of depth cells ({1})")]
    InvalidColorsLength(usize, usize),
}
