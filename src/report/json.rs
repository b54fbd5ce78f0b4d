use crate::pipeline::stage3_report::{FinalSummary, Stage3Error};

pub fn write_summary(out_dir: &std::path::Path, summary: &FinalSummary) -> Result<(), Stage3Error> {
    let json = serde_json::to_string_pretty(summary)?;
    let path = out_dir.join("summary.json");
    std::fs::write(path, json)?;
    Ok(())
}
