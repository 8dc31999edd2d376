/// An error type for the depth map module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DepthMapError {
    /// Error when the data length and the grid size are not valid.
    #[error("Data length ({0}) does not match the depth map size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a smoothing kernel size is not valid.
    #[error("Kernel size ({0}) must be odd and non-zero")]
    InvalidKernelSize(usize),
}
