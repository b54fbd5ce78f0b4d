pub mod moments;
pub mod zscore;
