use ndarray::Axis;
use serde::Serialize;

/// Which matrix axis holds the channels being normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelAxis {
    /// Each row is a channel; used when the matrix is wider than tall.
    Rows,
    /// Each column is a channel; used for tall and square matrices.
    Columns,
}

impl ChannelAxis {
    pub fn for_shape(n_rows: usize, n_cols: usize) -> Self {
        if n_cols > n_rows {
            ChannelAxis::Rows
        } else {
            ChannelAxis::Columns
        }
    }

    /// The ndarray axis whose index selects a channel.
    pub fn index_axis(self) -> Axis {
        match self {
            ChannelAxis::Rows => Axis(0),
            ChannelAxis::Columns => Axis(1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelAxis::Rows => "rows",
            ChannelAxis::Columns => "columns",
        }
    }
}

/// Number of channels a matrix of this shape is normalized over.
pub fn channel_count(n_rows: usize, n_cols: usize) -> usize {
    n_rows.min(n_cols)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/axis.rs"]
mod tests;
