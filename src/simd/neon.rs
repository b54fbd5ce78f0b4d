#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use std::arch::aarch64::*;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub fn sum_f64(values: &[f64]) -> f64 {
    // SAFETY: function uses NEON intrinsics and is compiled for aarch64+neon.
    unsafe { sum_f64_neon(values) }
}

#[cfg(not(all(target_arch = "aarch64", target_feature = "neon")))]
pub fn sum_f64(values: &[f64]) -> f64 {
    values.iter().sum()
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub fn sum_f32(values: &[f32]) -> f32 {
    // SAFETY: function uses NEON intrinsics and is compiled for aarch64+neon.
    unsafe { sum_f32_neon(values) }
}

#[cfg(not(all(target_arch = "aarch64", target_feature = "neon")))]
pub fn sum_f32(values: &[f32]) -> f32 {
    values.iter().sum()
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
unsafe fn sum_f64_neon(values: &[f64]) -> f64 {
    let mut i = 0usize;
    let len = values.len();
    let mut acc = unsafe { vdupq_n_f64(0.0) };

    while i + 2 <= len {
        let v = unsafe { vld1q_f64(values.as_ptr().add(i)) };
        acc = unsafe { vaddq_f64(acc, v) };
        i += 2;
    }

    let mut sum = unsafe { vaddvq_f64(acc) };

    while i < len {
        sum += values[i];
        i += 1;
    }
    sum
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
unsafe fn sum_f32_neon(values: &[f32]) -> f32 {
    let mut i = 0usize;
    let len = values.len();
    let mut acc = unsafe { vdupq_n_f32(0.0) };

    while i + 4 <= len {
        let v = unsafe { vld1q_f32(values.as_ptr().add(i)) };
        acc = unsafe { vaddq_f32(acc, v) };
        i += 4;
    }

    let mut sum = unsafe { vaddvq_f32(acc) };

    while i < len {
        sum += values[i];
        i += 1;
    }
    sum
}
