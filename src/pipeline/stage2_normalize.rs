use ndarray::Array2;
use tracing::warn;

use crate::expr::zscore::{ChannelStats, zscore_with_stats};
use crate::model::axis::ChannelAxis;
use crate::pipeline::stage1_load::DatasetCtx;

#[derive(Debug, Clone)]
pub struct NormalizeContext {
    pub axis: ChannelAxis,
    pub stats: Vec<ChannelStats<f64>>,
    pub normalized: Array2<f64>,
    pub degenerate_channels: usize,
    pub non_finite: usize,
}

pub fn run_stage2(ctx: &DatasetCtx) -> NormalizeContext {
    let result = zscore_with_stats(ctx.data.view());

    let mut degenerate_channels = 0usize;
    for stats in result.stats.iter().filter(|s| s.is_degenerate()) {
        degenerate_channels += 1;
        warn!(
            axis = result.axis.as_str(),
            channel = stats.index,
            len = stats.len,
            mean = stats.mean,
            std = stats.std,
            "channel has zero or undefined std, output is non-finite"
        );
    }

    let non_finite = result.data.iter().filter(|v| !v.is_finite()).count();

    NormalizeContext {
        axis: result.axis,
        stats: result.stats,
        normalized: result.data,
        degenerate_channels,
        non_finite,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
