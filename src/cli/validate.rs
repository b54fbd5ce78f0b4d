use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::pipeline::stage1_load::{DatasetCtx, run_stage1};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Dense matrix file (.tsv, .csv, optionally .gz)
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Output directory
    #[arg(long)]
    pub(crate) out: PathBuf,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let ctx = run_stage1(&args.input)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    write_validate(&args.out, &ctx)?;
    Ok(())
}

fn write_validate(out_dir: &Path, ctx: &DatasetCtx) -> anyhow::Result<()> {
    let lines = [
        ("matrix_file", ctx.matrix_path.to_string_lossy().to_string()),
        ("delimiter", ctx.delimiter.as_str().to_string()),
        ("n_rows", ctx.n_rows.to_string()),
        ("n_cols", ctx.n_cols.to_string()),
        ("axis", ctx.axis().as_str().to_string()),
        ("channels", ctx.n_channels().to_string()),
    ];

    let path = out_dir.join("validate.tsv");
    let mut buf = String::new();
    for (k, v) in lines {
        buf.push_str(k);
        buf.push('\t');
        buf.push_str(&v);
        buf.push('\n');
    }
    std::fs::write(path, buf)?;
    Ok(())
}
