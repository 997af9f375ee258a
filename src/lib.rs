// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod formatting;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use crate::dataset::{AnswerOption, Dataset, Question};
pub use crate::errors::StatsError;
pub use crate::report::{
    category_total, flatten, read_statistics, write_statistics, Category, StatEntry, StatValue,
};
pub use crate::stats::{AnswerDistribution, DatasetStatistics, DatasetSummary, FrequencyTable};
