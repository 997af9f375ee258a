use std::io::Write;

use anyhow::{Context, Result};

use crate::config::ReportPaths;
use crate::dataset::Dataset;
use crate::formatting::{formatter_for, FormattingConfig};
use crate::report::{flatten, write_statistics, ReportWriter, StatEntry, TerminalWriter};
use crate::stats::{DatasetStatistics, DatasetSummary};

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub paths: ReportPaths,
    pub formatting: FormattingConfig,
}

/// Loads both datasets, prints the report to `out` and writes the statistics table.
///
/// Returns the exported entries.
pub fn run_report<W: Write>(config: &ReportConfig, out: W) -> Result<Vec<StatEntry>> {
    let paths = &config.paths;
    let dataset = Dataset::load(&paths.answers, &paths.questions)
        .context("Failed to load datasets")?;

    let stats = DatasetStatistics::compute(&dataset);
    let summary = DatasetSummary::compute(&dataset);

    let mut writer = TerminalWriter::new(out, formatter_for(config.formatting));
    writer.write_report(&stats, &summary)?;

    writer.write_export_started()?;
    let entries = flatten(&stats);
    write_statistics(&paths.output, &entries)
        .with_context(|| format!("Failed to export statistics to {}", paths.output.display()))?;
    writer.write_export_finished(&paths.output)?;

    Ok(entries)
}

/// Runs the report against standard output.
pub fn handle_report(config: ReportConfig) -> Result<()> {
    let stdout = std::io::stdout();
    run_report(&config, stdout.lock())?;
    Ok(())
}
