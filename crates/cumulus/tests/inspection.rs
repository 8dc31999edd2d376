use approx::assert_relative_eq;

use cumulus::curve::{prefilter_curve, resample_curve};
use cumulus::depth::fill_depth_map;
use cumulus::depth::stereo::depth_from_disparity;
use cumulus::k3d::{unproject_depth_map, PinholeCamera};
use cumulus::surface::{fit_quadric, project_onto_surface, ProjectionCriteria};

/// Points spread over a sphere of the given radius centered at origin.
fn sphere_points(radius: f64, num_rings: usize, num_segments: usize) -> Vec<[f64; 3]> {
    let mut points = Vec::new();
    for ring in 1..num_rings {
        let polar = std::f64::consts::PI * ring as f64 / num_rings as f64;
        for segment in 0..num_segments {
            let azimuth = std::f64::consts::TAU * segment as f64 / num_segments as f64;
            points.push([
                radius * polar.sin() * azimuth.cos(),
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
            ]);
        }
    }
    points.push([0.0, 0.0, radius]);
    points.push([0.0, 0.0, -radius]);
    points
}

#[test]
fn annotate_curve_on_fitted_surface() -> Result<(), Box<dyn std::error::Error>> {
    let region = sphere_points(2.0, 6, 12);
    let surface = fit_quadric(&region);
    assert!(surface.is_valid());

    // free-hand picks along an arc slightly above the surface, with a
    // double pick and one stray outlier mixed in
    let mut drawn = Vec::new();
    for i in 0..10 {
        let angle = 0.2 * i as f64;
        drawn.push([2.2 * angle.cos(), 2.2 * angle.sin(), 0.0]);
        if i == 4 {
            drawn.push([2.2 * angle.cos() + 0.01, 2.2 * angle.sin(), 0.0]);
        }
        if i == 8 {
            drawn.push([8.0, 8.0, 0.0]);
        }
    }

    let mut curve = prefilter_curve(&drawn);

    // the stray pick takes one arc neighbor with it, the double pick merges
    assert_eq!(curve.len(), 9);
    assert!(curve.iter().all(|p| p[0] * p[0] + p[1] * p[1] < 9.0));

    let result = project_onto_surface(&surface, &mut curve, ProjectionCriteria::default());
    assert_eq!(result.num_converged, curve.len());
    assert_eq!(result.num_failed, 0);
    for p in &curve {
        assert!(surface.value(p).abs() < 1e-7);
    }

    let resampled = resample_curve(&curve)?;
    assert_eq!(resampled.len(), 10 * (curve.len() - 1) + 1);

    // every dense sample stays close to the sphere the curve was snapped on
    for p in &resampled {
        let norm = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((norm - 2.0).abs() < 0.08, "sample strayed off the sphere: {:?}", p);
    }

    Ok(())
}

#[test]
fn depth_to_colored_cloud() -> Result<(), Box<dyn std::error::Error>> {
    // a flat wall at 30 world units for a 10px focal, 3 unit baseline rig
    let disparity = vec![1.0f32; 64];
    let mut depth = depth_from_disparity(&disparity, 8, 8, 10.0, 3.0)?;

    // punch a few acquisition holes
    for (x, y) in [(1usize, 1usize), (4, 6), (6, 2)] {
        depth.as_slice_mut()[y * 8 + x] = 0.0;
    }
    assert!(!depth.is_valid(1, 1));

    fill_depth_map(&mut depth);

    for &d in depth.as_slice() {
        assert_relative_eq!(d, 30.0, epsilon = 1e-4);
    }

    let colors = vec![[200u8, 200, 200]; 64];
    let camera = PinholeCamera {
        fx: 10.0,
        fy: 10.0,
        cx: 3.5,
        cy: 3.5,
    };
    let cloud = unproject_depth_map(&depth, Some(&colors), &camera, (25.0, 60.0))?;

    assert_eq!(cloud.len(), 64);
    assert_eq!(cloud.colors().map(|c| c.len()), Some(64));

    let min = cloud.min_bound();
    let max = cloud.max_bound();
    for axis in 0..2 {
        assert_relative_eq!(min[axis], -10.5, epsilon = 1e-4);
        assert_relative_eq!(max[axis], 10.5, epsilon = 1e-4);
    }
    assert_relative_eq!(min[2], 30.0, epsilon = 1e-4);
    assert_relative_eq!(max[2], 30.0, epsilon = 1e-4);

    Ok(())
}
