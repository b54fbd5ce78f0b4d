use super::*;

#[test]
fn mean_of_lane() {
    assert_eq!(mean(&[1.0f64, 2.0, 3.0]), 2.0);
    assert!((mean(&[4.0f32, 5.0, 6.0, 7.0]) - 5.5).abs() < 1e-6);
}

#[test]
fn sample_std_uses_bessel_correction() {
    let lane = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let m = mean(&lane);
    let mut scratch = Vec::new();
    let std = sample_std(&lane, m, &mut scratch);
    // population std of this lane is exactly 2.0
    let expected = (32.0f64 / 7.0).sqrt();
    assert!((std - expected).abs() < 1e-12);
}

#[test]
fn constant_lane_has_zero_std() {
    let lane = [3.0f64; 5];
    let mut scratch = Vec::new();
    assert_eq!(sample_std(&lane, mean(&lane), &mut scratch), 0.0);
}

#[test]
fn single_element_std_is_nan() {
    let lane = [42.0f32];
    let mut scratch = Vec::new();
    assert!(sample_std(&lane, mean(&lane), &mut scratch).is_nan());
}

#[test]
fn scratch_is_reused() {
    let mut scratch = vec![100.0f64; 10];
    let lane = [1.0f64, 3.0];
    let std = sample_std(&lane, 2.0, &mut scratch);
    assert_eq!(scratch.len(), 2);
    assert!((std - 2.0f64.sqrt()).abs() < 1e-12);
}
