use crate::depth_map::{DepthMap, HOLE_EPSILON};
use crate::filter::{gaussian_kernel_1d, separable_filter};

/// Largest smoothing kernel side applied after an averaging pass.
const MAX_KERNEL_SIZE: isize = 201;

/// Fill holes of a depth map in place with an adaptive local average.
///
/// Two summed-area tables over the buffer, one of depth values zeroed at
/// holes and one of valid-cell counts, give O(1) rectangular sums. A square
/// window with a half-size starting at 2 and halving until it reaches 1
/// sweeps the buffer once per size; every cell that sees at least one valid
/// neighbor takes the local average, cells with none are left untouched.
/// Each sweep ends with a gaussian smoothing pass sized to the window to
/// suppress seams between filled regions.
///
/// # Arguments
///
/// * `depth` - The depth map to fill, modified in place.
///
/// # Examples
///
/// ```
/// use cumulus_depth::{fill_depth_map, DepthMap};
///
/// let mut depth = DepthMap::from_size_val(5, 5, 10.0);
/// depth.as_slice_mut()[12] = 0.0;
///
/// fill_depth_map(&mut depth);
/// assert!((depth.get(2, 2).unwrap() - 10.0).abs() < 1e-3);
/// ```
pub fn fill_depth_map(depth: &mut DepthMap) {
    let width = depth.width();
    let height = depth.height();
    if width == 0 || height == 0 {
        return;
    }

    let (values, counts) = build_integral_tables(depth);

    let mut dwnd = 2.0f64;
    while dwnd > 1.0 {
        let wnd = dwnd as isize;
        dwnd /= 2.0;

        let data = depth.as_slice_mut();
        for row in 0..height as isize {
            for col in 0..width as isize {
                let left = (col - wnd - 1).max(0);
                let right = (col + wnd).min(width as isize - 1);
                let top = (row - wnd - 1).max(0);
                let bottom = (row + wnd).min(height as isize - 1);

                let dx = (right - left) as usize;
                let dy = (bottom - top) as usize * width;
                let left_top = top as usize * width + left as usize;
                let right_top = left_top + dx;
                let left_bottom = left_top + dy;
                let right_bottom = left_bottom + dx;

                let count = counts[right_bottom] + counts[left_top]
                    - counts[left_bottom]
                    - counts[right_top];
                if count <= 0 {
                    continue;
                }

                let sum = values[right_bottom] + values[left_top]
                    - values[left_bottom]
                    - values[right_top];
                data[row as usize * width + col as usize] = (sum / count as f64) as f32;
            }
        }

        let kernel_size = (wnd / 2 * 2 + 1).min(MAX_KERNEL_SIZE) as usize;
        log::debug!("filled with window {}, smoothing with kernel {}", wnd, kernel_size);
        let kernel = gaussian_kernel_1d(kernel_size, kernel_size as f32);
        separable_filter(depth, &kernel, &kernel);
    }
}

/// Build inclusive prefix-sum tables of depth values and valid-cell counts.
fn build_integral_tables(depth: &DepthMap) -> (Vec<f64>, Vec<i32>) {
    let width = depth.width();
    let height = depth.height();

    let mut values = vec![0.0f64; width * height];
    let mut counts = vec![0i32; width * height];

    for (i, &d) in depth.as_slice().iter().enumerate() {
        if d > HOLE_EPSILON {
            values[i] = d as f64;
            counts[i] = 1;
        }
    }

    // row prefix sums
    for row in 0..height {
        let offset = row * width;
        for col in 1..width {
            values[offset + col] += values[offset + col - 1];
            counts[offset + col] += counts[offset + col - 1];
        }
    }

    // column prefix sums
    for row in 1..height {
        let offset = row * width;
        for col in 0..width {
            values[offset + col] += values[offset - width + col];
            counts[offset + col] += counts[offset - width + col];
        }
    }

    (values, counts)
}
