#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
use std::arch::x86_64::*;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub fn sum_f64(values: &[f64]) -> f64 {
    // SAFETY: this function is compiled only when target includes AVX2.
    unsafe { sum_f64_avx2(values) }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub fn sum_f64(values: &[f64]) -> f64 {
    values.iter().sum()
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub fn sum_f32(values: &[f32]) -> f32 {
    // SAFETY: this function is compiled only when target includes AVX2.
    unsafe { sum_f32_avx2(values) }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
pub fn sum_f32(values: &[f32]) -> f32 {
    values.iter().sum()
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
#[target_feature(enable = "avx2")]
unsafe fn sum_f64_avx2(values: &[f64]) -> f64 {
    let mut i = 0usize;
    let len = values.len();
    let mut acc = _mm256_setzero_pd();

    while i + 4 <= len {
        let v = unsafe { _mm256_loadu_pd(values.as_ptr().add(i)) };
        acc = _mm256_add_pd(acc, v);
        i += 4;
    }

    let mut buf = [0f64; 4];
    unsafe { _mm256_storeu_pd(buf.as_mut_ptr(), acc) };
    let mut sum = (buf[0] + buf[1]) + (buf[2] + buf[3]);

    while i < len {
        sum += values[i];
        i += 1;
    }
    sum
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
#[target_feature(enable = "avx2")]
unsafe fn sum_f32_avx2(values: &[f32]) -> f32 {
    let mut i = 0usize;
    let len = values.len();
    let mut acc = _mm256_setzero_ps();

    while i + 8 <= len {
        let v = unsafe { _mm256_loadu_ps(values.as_ptr().add(i)) };
        acc = _mm256_add_ps(acc, v);
        i += 8;
    }

    let mut buf = [0f32; 8];
    unsafe { _mm256_storeu_ps(buf.as_mut_ptr(), acc) };
    let mut sum = buf.iter().copied().sum::<f32>();

    while i < len {
        sum += values[i];
        i += 1;
    }
    sum
}
