pub mod matrix;
pub mod ranking;
pub mod stats;

pub use matrix::{Dataset, ScoreMatrix};
pub use ranking::{RankedEntity, Ranking};
pub use stats::{ClassSummary, EntityStats, RowStats};
