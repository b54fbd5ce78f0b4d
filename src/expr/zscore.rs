//! Per-channel z-score normalization of a dense matrix.
//!
//! The channel axis is the shorter side of the matrix: rows when the matrix
//! is wider than tall, columns otherwise (square matrices included). Each
//! channel has its mean subtracted and is then divided by its sample
//! standard deviation. Constant channels are not guarded and produce
//! non-finite output.

use ndarray::{Array2, ArrayView2, Axis};

use crate::expr::moments::{Element, mean, sample_std};
use crate::model::axis::{ChannelAxis, channel_count};

#[derive(Debug, Clone, Copy)]
pub struct ChannelStats<F> {
    pub index: usize,
    pub len: usize,
    pub mean: F,
    pub std: F,
}

impl<F: Element> ChannelStats<F> {
    /// True when dividing by `std` cannot give finite output.
    pub fn is_degenerate(&self) -> bool {
        !self.std.is_finite() || self.std == F::zero()
    }
}

#[derive(Debug, Clone)]
pub struct Normalized<F> {
    pub axis: ChannelAxis,
    pub stats: Vec<ChannelStats<F>>,
    pub data: Array2<F>,
}

/// Normalizes every channel of `data` to zero mean and unit sample std.
///
/// The output has the shape of the input. It starts zero-filled and only the
/// first `min(n_rows, n_cols)` channels are written.
pub fn zscore_channels<F: Element>(data: ArrayView2<'_, F>) -> Array2<F> {
    zscore_with_stats(data).data
}

pub fn zscore_with_stats<F: Element>(data: ArrayView2<'_, F>) -> Normalized<F> {
    let (n_rows, n_cols) = data.dim();
    let axis = ChannelAxis::for_shape(n_rows, n_cols);
    let index_axis = axis.index_axis();
    let mut out = Array2::<F>::zeros((n_rows, n_cols));

    let n_channels = channel_count(n_rows, n_cols);
    let mut stats = Vec::with_capacity(n_channels);
    let mut lane = Vec::new();
    let mut scratch = Vec::new();

    for k in 0..n_channels {
        let channel = lane_stats(data, index_axis, k, &mut lane, &mut scratch);

        let mut target = out.index_axis_mut(index_axis, k);
        for (dst, &x) in target.iter_mut().zip(lane.iter()) {
            *dst = (x - channel.mean) / channel.std;
        }
        stats.push(channel);
    }

    Normalized {
        axis,
        stats,
        data: out,
    }
}

/// Mean and sample std of each channel, without producing the output matrix.
pub fn channel_stats<F: Element>(data: ArrayView2<'_, F>) -> (ChannelAxis, Vec<ChannelStats<F>>) {
    let (n_rows, n_cols) = data.dim();
    let axis = ChannelAxis::for_shape(n_rows, n_cols);
    let mut lane = Vec::new();
    let mut scratch = Vec::new();

    let stats = (0..channel_count(n_rows, n_cols))
        .map(|k| lane_stats(data, axis.index_axis(), k, &mut lane, &mut scratch))
        .collect();

    (axis, stats)
}

/// Copies channel `k` into `lane` and computes its mean and sample std.
fn lane_stats<F: Element>(
    data: ArrayView2<'_, F>,
    index_axis: Axis,
    k: usize,
    lane: &mut Vec<F>,
    scratch: &mut Vec<F>,
) -> ChannelStats<F> {
    lane.clear();
    lane.extend(data.index_axis(index_axis, k).iter().copied());
    let mu = mean(lane);
    ChannelStats {
        index: k,
        len: lane.len(),
        mean: mu,
        std: sample_std(lane, mu, scratch),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/expr/zscore.rs"]
mod tests;
