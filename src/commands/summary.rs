use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dataset::Dataset;
use crate::stats::DatasetSummary;

/// Writes the headline counts as pretty-printed JSON.
pub fn run_summary<W: Write>(answers: &Path, questions: &Path, mut out: W) -> Result<DatasetSummary> {
    let dataset = Dataset::load(answers, questions).context("Failed to load datasets")?;
    let summary = DatasetSummary::compute(&dataset);

    serde_json::to_writer_pretty(&mut out, &summary)?;
    writeln!(out)?;
    out.flush()?;
    Ok(summary)
}

pub fn handle_summary(answers: &Path, questions: &Path) -> Result<()> {
    let stdout = std::io::stdout();
    run_summary(answers, questions, stdout.lock())?;
    Ok(())
}
