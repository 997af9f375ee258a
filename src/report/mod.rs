//! Report output: the console sections and the exported statistics table.

pub mod export;
pub mod terminal;

use crate::stats::{DatasetStatistics, DatasetSummary};

pub use export::{
    category_total, flatten, read_statistics, write_entries, write_statistics, Category,
    StatEntry, StatValue,
};
pub use terminal::TerminalWriter;

pub trait ReportWriter {
    fn write_report(
        &mut self,
        stats: &DatasetStatistics,
        summary: &DatasetSummary,
    ) -> anyhow::Result<()>;
}
