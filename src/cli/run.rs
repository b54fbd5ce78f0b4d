use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_normalize::run_stage2;
use crate::pipeline::stage3_report::run_stage3_report;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Dense matrix file (.tsv, .csv, optionally .gz)
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Output directory
    #[arg(long)]
    pub(crate) out: PathBuf,
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let ctx = run_stage1(&args.input)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        n_rows = ctx.n_rows,
        n_cols = ctx.n_cols,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_normalize", "starting stage");
    let norm = run_stage2(&ctx);
    info!(
        stage = "stage2_normalize",
        elapsed_ms = start.elapsed().as_millis(),
        axis = norm.axis.as_str(),
        channels = norm.stats.len(),
        degenerate = norm.degenerate_channels,
        non_finite = norm.non_finite,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_report", "starting stage");
    let _summary = run_stage3_report(&ctx, &norm, &args.out)?;
    info!(
        stage = "stage3_report",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}
