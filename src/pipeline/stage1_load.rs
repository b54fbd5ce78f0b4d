use std::path::{Path, PathBuf};

use ndarray::Array2;
use thiserror::Error;
use tracing::debug;

use crate::input::InputError;
use crate::input::dense::{Delimiter, read_dense};
use crate::model::axis::{ChannelAxis, channel_count};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct DatasetCtx {
    pub matrix_path: PathBuf,
    pub delimiter: Delimiter,
    pub data: Array2<f64>,
    pub n_rows: usize,
    pub n_cols: usize,
}

impl DatasetCtx {
    pub fn axis(&self) -> ChannelAxis {
        ChannelAxis::for_shape(self.n_rows, self.n_cols)
    }

    pub fn n_channels(&self) -> usize {
        channel_count(self.n_rows, self.n_cols)
    }
}

pub fn run_stage1(input: &Path) -> Result<DatasetCtx, Stage1Error> {
    let delimiter = Delimiter::from_path(input);
    let data = read_dense(input)?;
    let (n_rows, n_cols) = data.dim();
    debug!(
        path = %input.to_string_lossy(),
        delimiter = delimiter.as_str(),
        n_rows,
        n_cols,
        "loaded dense matrix"
    );

    Ok(DatasetCtx {
        matrix_path: input.to_path_buf(),
        delimiter,
        data,
        n_rows,
        n_cols,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
