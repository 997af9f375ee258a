pub mod report;
pub mod summary;

pub use report::{handle_report, run_report, ReportConfig};
pub use summary::{handle_summary, run_summary};
