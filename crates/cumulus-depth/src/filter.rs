use crate::depth_map::DepthMap;
use crate::error::DepthMapError;

/// Create a normalized gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

/// Apply a gaussian blur to a depth map in place.
///
/// The blur runs as two 1D passes over a temporary buffer. Border samples
/// replicate the nearest cell, so a constant buffer stays constant through
/// the pass.
///
/// # Arguments
///
/// * `depth` - The depth map to smooth.
/// * `kernel_size` - The side of the square kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Errors
///
/// If the kernel size is even or zero, an error is returned.
pub fn gaussian_blur(
    depth: &mut DepthMap,
    kernel_size: usize,
    sigma: f32,
) -> Result<(), DepthMapError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(DepthMapError::InvalidKernelSize(kernel_size));
    }

    let kernel = gaussian_kernel_1d(kernel_size, sigma);
    separable_filter(depth, &kernel, &kernel);

    Ok(())
}

/// Apply horizontal and vertical 1D convolutions sequentially in place.
///
/// Out of range samples clamp to the nearest border cell.
pub(crate) fn separable_filter(depth: &mut DepthMap, kernel_x: &[f32], kernel_y: &[f32]) {
    let cols = depth.width();
    let rows = depth.height();
    if cols == 0 || rows == 0 {
        return;
    }

    let half_x = (kernel_x.len() / 2) as isize;
    let half_y = (kernel_y.len() / 2) as isize;

    let data = depth.as_slice_mut();
    let mut temp = vec![0.0f32; data.len()];

    // Horizontal
    for r in 0..rows {
        let row_offset = r * cols;
        for c in 0..cols {
            let mut acc = 0.0f32;
            for (i, &k) in kernel_x.iter().enumerate() {
                let x = (c as isize + i as isize - half_x).clamp(0, cols as isize - 1);
                acc += data[row_offset + x as usize] * k;
            }
            temp[row_offset + c] = acc;
        }
    }

    // Vertical
    for r in 0..rows {
        let row_offset = r * cols;
        for c in 0..cols {
            let mut acc = 0.0f32;
            for (i, &k) in kernel_y.iter().enumerate() {
                let y = (r as isize + i as isize - half_y).clamp(0, rows as isize - 1);
                acc += temp[y as usize * cols + c] * k;
            }
            data[row_offset + c] = acc;
        }
    }
}
