use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array2;
use serde::Serialize;
use thiserror::Error;

use crate::expr::zscore::ChannelStats;
use crate::model::axis::ChannelAxis;
use crate::pipeline::stage1_load::DatasetCtx;
use crate::pipeline::stage2_normalize::NormalizeContext;
use crate::report::json::write_summary;
use crate::report::text::render_report;
use crate::simd;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalSummary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub normalization: NormalizationSummary,
    pub qc: QcSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
    pub simd: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub n_rows: usize,
    pub n_cols: usize,
    pub delimiter: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizationSummary {
    pub axis: ChannelAxis,
    pub channels: usize,
    pub channel_len: usize,
    pub std_divisor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QcSummary {
    pub degenerate_channels: usize,
    pub non_finite_values: usize,
    pub non_finite_fraction: f64,
}

pub fn run_stage3_report(
    dataset: &DatasetCtx,
    norm: &NormalizeContext,
    out_dir: &Path,
) -> Result<FinalSummary, Stage3Error> {
    std::fs::create_dir_all(out_dir)?;

    write_matrix_tsv(&out_dir.join("normalized.tsv"), &norm.normalized)?;
    write_channel_stats_tsv(&out_dir.join("channel_stats.tsv"), norm)?;

    let summary = build_summary(dataset, norm);
    write_summary(out_dir, &summary)?;
    std::fs::write(out_dir.join("summary.txt"), render_report(&summary))?;

    Ok(summary)
}

pub fn build_summary(dataset: &DatasetCtx, norm: &NormalizeContext) -> FinalSummary {
    let total = dataset.n_rows * dataset.n_cols;
    let non_finite_fraction = if total == 0 {
        0.0
    } else {
        norm.non_finite as f64 / total as f64
    };

    FinalSummary {
        tool: ToolSummary {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            simd: simd::backend_name().to_string(),
        },
        input: InputSummary {
            path: dataset.matrix_path.to_string_lossy().to_string(),
            n_rows: dataset.n_rows,
            n_cols: dataset.n_cols,
            delimiter: dataset.delimiter.as_str().to_string(),
        },
        normalization: NormalizationSummary {
            axis: norm.axis,
            channels: norm.stats.len(),
            channel_len: norm.stats.first().map(|s| s.len).unwrap_or(0),
            std_divisor: "n-1".to_string(),
        },
        qc: QcSummary {
            degenerate_channels: norm.degenerate_channels,
            non_finite_values: norm.non_finite,
            non_finite_fraction,
        },
    }
}

fn write_matrix_tsv(path: &Path, matrix: &Array2<f64>) -> Result<(), Stage3Error> {
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    let mut line = String::new();
    for row in matrix.rows() {
        line.clear();
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                line.push('\t');
            }
            line.push_str(&format_value(*value));
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

fn write_channel_stats_tsv(path: &Path, norm: &NormalizeContext) -> Result<(), Stage3Error> {
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    writer.write_all(b"axis\tchannel\tlen\tmean\tstd\tdegenerate\n")?;
    for stats in &norm.stats {
        writer.write_all(stats_line(norm.axis.as_str(), stats).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

fn stats_line(axis: &str, stats: &ChannelStats<f64>) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\n",
        axis,
        stats.index,
        stats.len,
        fmt6(stats.mean),
        fmt6(stats.std),
        stats.is_degenerate(),
    )
}

/// Shortest round-trip form, with lowercase non-finite spellings.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        value.to_string()
    }
}

fn fmt6(value: f64) -> String {
    if value.is_finite() {
        format!("{:.6}", value)
    } else {
        format_value(value)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
