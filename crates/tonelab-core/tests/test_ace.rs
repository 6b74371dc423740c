mod common;

use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

use tonelab_core::ace::{adaptive_contrast_enhancement, box_mean, AceParams};
use tonelab_core::buffer::Channel;
use tonelab_core::consts::ACE_VARIANCE_FLOOR;
use tonelab_core::error::ToneError;
use tonelab_core::histogram::compute_histogram;

use common::{flat_channel, noise_channel};

// ---------------------------------------------------------------------------
// Parameter validation
// ---------------------------------------------------------------------------

#[test]
fn test_ace_rejects_even_window() {
    let params = AceParams {
        window_size: 8,
        ..AceParams::default()
    };
    let err = adaptive_contrast_enhancement(&flat_channel(4, 4, 1), &params).unwrap_err();
    assert!(matches!(
        err,
        ToneError::InvalidParameter {
            name: "window_size",
            ..
        }
    ));
}

#[test]
fn test_ace_rejects_zero_window() {
    let params = AceParams {
        window_size: 0,
        ..AceParams::default()
    };
    assert!(params.validate().is_err());
}

#[test]
fn test_ace_rejects_out_of_range_gains() {
    let negative_k1 = AceParams {
        k1: -0.1,
        ..AceParams::default()
    };
    assert!(matches!(
        negative_k1.validate(),
        Err(ToneError::InvalidParameter { name: "k1", .. })
    ));

    let big_k2 = AceParams {
        k2: 1.5,
        ..AceParams::default()
    };
    assert!(matches!(
        big_k2.validate(),
        Err(ToneError::InvalidParameter { name: "k2", .. })
    ));
}

#[test]
fn test_ace_default_params_are_valid() {
    let params = AceParams::default();
    assert!(params.validate().is_ok());
    assert_eq!(params.window_size % 2, 1);
}

// ---------------------------------------------------------------------------
// Behaviour
// ---------------------------------------------------------------------------

#[test]
fn test_ace_single_pixel_window_is_pure_gain() {
    // With a 1x1 window the local mean is the pixel itself and the variance
    // is floored, so E = k1 * k2 * m_I / sqrt(floor) * I. Picking k1 to
    // cancel that factor reproduces the input.
    let ch = noise_channel(24, 16, 5);
    let global_mean = compute_histogram(&ch).mean().unwrap() / 255.0;
    let k2 = 0.5;
    let params = AceParams {
        k1: 1e-3 / (k2 * global_mean),
        k2,
        window_size: 1,
    };

    let out = adaptive_contrast_enhancement(&ch, &params).unwrap();
    for (&a, &b) in ch.data().iter().zip(out.data().iter()) {
        assert!((a as i32 - b as i32).abs() <= 1, "{a} -> {b}");
    }
}

#[test]
fn test_ace_flat_image_saturates_without_nan() {
    let ch = flat_channel(16, 16, 100);

    let out = adaptive_contrast_enhancement(&ch, &AceParams::default()).unwrap();
    assert!(out.data().iter().all(|&v| v == 255));

    let no_mean = AceParams {
        k2: 0.0,
        ..AceParams::default()
    };
    let out = adaptive_contrast_enhancement(&ch, &no_mean).unwrap();
    assert!(out.data().iter().all(|&v| v == 0));
}

#[test]
fn test_ace_black_image_stays_black() {
    let ch = flat_channel(8, 8, 0);
    let out = adaptive_contrast_enhancement(&ch, &AceParams::default()).unwrap();
    assert!(out.data().iter().all(|&v| v == 0));
}

#[test]
fn test_ace_preserves_shape() {
    let ch = noise_channel(37, 21, 12);
    let out = adaptive_contrast_enhancement(&ch, &AceParams::default()).unwrap();
    assert_eq!(out.data().dim(), ch.data().dim());
}

#[test]
fn test_ace_window_wider_than_image() {
    let ch = noise_channel(3, 2, 7);
    let params = AceParams {
        window_size: 15,
        ..AceParams::default()
    };
    let out = adaptive_contrast_enhancement(&ch, &params).unwrap();
    assert_eq!(out.data().dim(), (2, 3));
}

/// Direct per-pixel ACE: every window is gathered explicitly with
/// reflect-101 indexing.
fn naive_ace(ch: &Channel, k1: f64, k2: f64, window: usize) -> Array2<u8> {
    let (h, w) = ch.data().dim();
    let intensity = ch.data().mapv(|v| v as f64 / 255.0);
    let global_mean = intensity.mean().unwrap();
    let r = (window / 2) as isize;
    let reflect = |i: isize, n: usize| -> usize {
        let n = n as isize;
        if n == 1 {
            return 0;
        }
        let period = 2 * (n - 1);
        let m = i.rem_euclid(period);
        (if m >= n { period - m } else { m }) as usize
    };

    Array2::from_shape_fn((h, w), |(row, col)| {
        let mut sum = 0.0;
        let mut sq = 0.0;
        for dr in -r..=r {
            for dc in -r..=r {
                let v = intensity[[
                    reflect(row as isize + dr, h),
                    reflect(col as isize + dc, w),
                ]];
                sum += v;
                sq += v * v;
            }
        }
        let n = (window * window) as f64;
        let m = sum / n;
        let sigma = (sq / n - m * m).max(ACE_VARIANCE_FLOOR).sqrt();
        let i = intensity[[row, col]];
        let e = k1 * (global_mean / sigma) * (i - m + k2 * m);
        (e.clamp(0.0, 1.0) * 255.0).round() as u8
    })
}

#[test]
fn test_ace_matches_direct_window_computation() {
    let ch = noise_channel(13, 9, 31);
    for (k1, k2, window) in [(0.5, 0.5, 3), (0.3, 0.8, 5), (0.2, 0.1, 3)] {
        let params = AceParams {
            k1,
            k2,
            window_size: window,
        };
        let out = adaptive_contrast_enhancement(&ch, &params).unwrap();
        let expected = naive_ace(&ch, k1, k2, window);

        let mut mid_tones = 0;
        for (&a, &b) in out.data().iter().zip(expected.iter()) {
            assert!((a as i32 - b as i32).abs() <= 1, "window {window}: {a} vs {b}");
            if a > 0 && a < 255 {
                mid_tones += 1;
            }
        }
        // Guard against a degenerate all-clipped comparison.
        assert!(mid_tones > 0, "window {window} clipped everything");
    }
}

#[test]
fn test_ace_boosts_pixel_brighter_than_its_window() {
    // A bright centre on a dull background sits above its local mean, so it
    // must come out brighter than the corners, which sit below theirs.
    let ch = Channel::new(array![[50, 50, 50], [50, 200, 50], [50, 50, 50]]).unwrap();
    let params = AceParams {
        k1: 0.5,
        k2: 0.5,
        window_size: 3,
    };
    let out = adaptive_contrast_enhancement(&ch, &params).unwrap();
    let expected = naive_ace(&ch, 0.5, 0.5, 3);

    assert!(out.data()[[1, 1]] > out.data()[[0, 0]]);
    assert!(out.data()[[1, 1]] > out.data()[[0, 1]]);
    for (&a, &b) in out.data().iter().zip(expected.iter()) {
        assert!((a as i32 - b as i32).abs() <= 1, "{a} vs {b}");
    }
}

// ---------------------------------------------------------------------------
// box_mean
// ---------------------------------------------------------------------------

#[test]
fn test_box_mean_reflects_at_borders() {
    let data = array![[1.0, 2.0, 3.0]];
    let mean = box_mean(&data, 1);
    assert_abs_diff_eq!(mean[[0, 0]], 5.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mean[[0, 1]], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mean[[0, 2]], 7.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_box_mean_constant_stays_constant() {
    let data = Array2::from_elem((9, 13), 0.25);
    let mean = box_mean(&data, 3);
    assert!(mean.iter().all(|&v| (v - 0.25).abs() < 1e-12));
}

#[test]
fn test_box_mean_parallel_path_on_linear_ramp() {
    // 300 x 300 takes the parallel path; a window mean of a plane is the
    // plane's value at the centre away from the borders.
    let data = Array2::from_shape_fn((300, 300), |(r, c)| (r + 2 * c) as f64);
    let mean = box_mean(&data, 4);
    for &(r, c) in &[(4, 4), (150, 150), (295, 10), (10, 295)] {
        assert_abs_diff_eq!(mean[[r, c]], (r + 2 * c) as f64, epsilon = 1e-9);
    }
}
