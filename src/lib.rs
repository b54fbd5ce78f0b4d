pub mod cli;
pub mod expr;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod simd;

pub mod prelude {
    pub use crate::expr::moments::Element;
    pub use crate::expr::zscore::{
        ChannelStats, Normalized, channel_stats, zscore_channels, zscore_with_stats,
    };
    pub use crate::model::axis::ChannelAxis;
}
