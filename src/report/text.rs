use crate::pipeline::stage3_report::FinalSummary;

pub fn render_report(summary: &FinalSummary) -> String {
    let mut out = String::new();
    out.push_str("Kira Z-Score Report\n");
    out.push_str("===================\n\n");
    out.push_str("Each channel is centered on its mean and divided by its sample standard deviation (n-1). ");
    out.push_str("Constant channels are not guarded and produce non-finite values.\n\n");

    out.push_str("Input:\n");
    out.push_str(&format!("- File: {}\n", summary.input.path));
    out.push_str(&format!(
        "- Shape: {} rows x {} columns\n\n",
        summary.input.n_rows, summary.input.n_cols
    ));

    out.push_str("Normalization:\n");
    out.push_str(&format!("- Channel axis: {}\n", summary.normalization.axis.as_str()));
    out.push_str(&format!("- Channels: {}\n", summary.normalization.channels));
    out.push_str(&format!(
        "- Values per channel: {}\n\n",
        summary.normalization.channel_len
    ));

    out.push_str("QC:\n");
    out.push_str(&format!(
        "- Degenerate channels: {}\n",
        summary.qc.degenerate_channels
    ));
    out.push_str(&format!(
        "- Non-finite values: {} ({:.2}%)\n",
        summary.qc.non_finite_values,
        summary.qc.non_finite_fraction * 100.0
    ));
    out.push('\n');

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
