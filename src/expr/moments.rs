use num_traits::{Float, FromPrimitive};

use crate::simd;

/// Float element accepted by the normalization routines.
pub trait Element: Float + FromPrimitive + 'static {
    fn lane_sum(values: &[Self]) -> Self;
}

impl Element for f64 {
    fn lane_sum(values: &[Self]) -> Self {
        simd::sum_f64(values)
    }
}

impl Element for f32 {
    fn lane_sum(values: &[Self]) -> Self {
        simd::sum_f32(values)
    }
}

pub fn mean<F: Element>(lane: &[F]) -> F {
    let n = F::from_usize(lane.len()).unwrap_or_else(F::nan);
    F::lane_sum(lane) / n
}

/// Standard deviation with Bessel's correction (divisor `n - 1`).
///
/// `scratch` is overwritten with squared deviations. A single-element lane
/// divides by zero and yields NaN.
pub fn sample_std<F: Element>(lane: &[F], mean: F, scratch: &mut Vec<F>) -> F {
    scratch.clear();
    scratch.extend(lane.iter().map(|&x| {
        let d = x - mean;
        d * d
    }));
    let dof = F::from_usize(lane.len().saturating_sub(1)).unwrap_or_else(F::nan);
    (F::lane_sum(scratch) / dof).sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/expr/moments.rs"]
mod tests;
