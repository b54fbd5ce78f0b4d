use super::*;
use crate::model::axis::ChannelAxis;
use crate::pipeline::stage3_report::{
    InputSummary, NormalizationSummary, QcSummary, ToolSummary,
};

#[test]
fn report_lists_shape_axis_and_qc() {
    let summary = FinalSummary {
        tool: ToolSummary {
            name: "kira-zscore".to_string(),
            version: "0.0.0".to_string(),
            simd: "scalar".to_string(),
        },
        input: InputSummary {
            path: "m.tsv".to_string(),
            n_rows: 3,
            n_cols: 2,
            delimiter: "tab".to_string(),
        },
        normalization: NormalizationSummary {
            axis: ChannelAxis::Columns,
            channels: 2,
            channel_len: 3,
            std_divisor: "n-1".to_string(),
        },
        qc: QcSummary {
            degenerate_channels: 1,
            non_finite_values: 3,
            non_finite_fraction: 0.5,
        },
    };

    let text = render_report(&summary);
    assert!(text.starts_with("Kira Z-Score Report\n"));
    assert!(text.contains("- Shape: 3 rows x 2 columns\n"));
    assert!(text.contains("- Channel axis: columns\n"));
    assert!(text.contains("- Degenerate channels: 1\n"));
    assert!(text.contains("- Non-finite values: 3 (50.00%)\n"));
}
