use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use super::ReportWriter;
use crate::formatting::{emoji_or_fallback, OutputFormatter};
use crate::stats::{DatasetStatistics, DatasetSummary, FrequencyTable};

const RULE_WIDTH: usize = 80;

/// Human-readable report sections, one per statistic, in a fixed order.
pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn rule(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.dim(&"=".repeat(RULE_WIDTH)))?;
        Ok(())
    }

    fn section(&mut self, emoji: &str, title: &str) -> anyhow::Result<()> {
        let (icon, fallback) = emoji_or_fallback(emoji);
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji(icon, fallback),
            self.formatter.header(title)
        )?;
        Ok(())
    }

    /// Writes a table the way a labelled series is usually printed: the
    /// column name, then one `value  count` line per entry.
    fn table<K: Display>(&mut self, name: &str, table: &FrequencyTable<K>) -> anyhow::Result<()> {
        let rows: Vec<(String, String)> = table
            .iter()
            .map(|(k, count)| (k.to_string(), count.to_string()))
            .collect();
        let key_width = rows
            .iter()
            .map(|(k, _)| k.chars().count())
            .chain(std::iter::once(name.chars().count()))
            .max()
            .unwrap_or(0);
        let count_width = rows.iter().map(|(_, c)| c.len()).max().unwrap_or(0);

        writeln!(self.writer, "{}", self.formatter.bold(name))?;
        for (key, count) in rows {
            let pad = key_width - key.chars().count();
            writeln!(
                self.writer,
                "{key}{:pad$}  {count:>count_width$}",
                ""
            )?;
        }
        Ok(())
    }

    fn write_basic_counts(&mut self, stats: &DatasetStatistics) -> anyhow::Result<()> {
        self.section("📊", "BASIC COUNTS")?;
        writeln!(self.writer, "Total questions: {}", stats.total_questions)?;
        writeln!(self.writer, "Total answer options: {}", stats.total_answer_options)?;
        Ok(())
    }

    fn write_answer_distribution(&mut self, stats: &DatasetStatistics) -> anyhow::Result<()> {
        self.section("📝", "QUESTIONS BY NUMBER OF ANSWER OPTIONS")?;
        self.table("answers", &stats.answers.distribution)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Average answers per question: {}",
            stats.answers.average_display()
        )?;
        Ok(())
    }

    fn write_dimensions(&mut self, stats: &DatasetStatistics) -> anyhow::Result<()> {
        let sections: [(&str, &str, &str, &FrequencyTable<String>); 6] = [
            ("📢", "QUESTIONS BY PUBLISHED STATUS", "IsPublished", &stats.published),
            ("🗑️", "QUESTIONS BY DELETED STATUS", "IsDeleted", &stats.deleted),
            ("🌍", "QUESTIONS BY LANGUAGE", "Language", &stats.language),
            ("📋", "QUESTIONS BY TYPE", "Type", &stats.question_type),
            ("⚡", "QUESTIONS BY DIFFICULTY", "Difficulty", &stats.difficulty),
            (
                "🔄",
                "QUESTIONS BY PREVIOUS VERSION STATUS",
                "HasPreviousVersion",
                &stats.previous_version,
            ),
        ];

        for (emoji, title, column, table) in sections {
            self.section(emoji, title)?;
            self.table(column, table)?;
        }
        Ok(())
    }

    pub fn write_export_started(&mut self) -> anyhow::Result<()> {
        self.section("💾", "Exporting statistics to CSV...")?;
        Ok(())
    }

    pub fn write_export_finished(&mut self, path: &Path) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .success(&format!("Statistics exported to {}", path.display()))
        )?;
        writeln!(self.writer)?;
        self.rule()?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &DatasetSummary) -> anyhow::Result<()> {
        self.section("🧾", "SUMMARY")?;
        writeln!(self.writer, "Published questions: {}", summary.published_questions)?;
        writeln!(self.writer, "Deleted questions: {}", summary.deleted_questions)?;
        writeln!(self.writer, "Bulk-deleted questions: {}", summary.bulk_deletes)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(
        &mut self,
        stats: &DatasetStatistics,
        summary: &DatasetSummary,
    ) -> anyhow::Result<()> {
        self.rule()?;
        writeln!(self.writer, "{}", self.formatter.header("DATASET STATISTICS"))?;
        self.rule()?;

        self.write_basic_counts(stats)?;
        self.write_answer_distribution(stats)?;
        self.write_dimensions(stats)?;
        self.write_summary(summary)?;

        writeln!(self.writer)?;
        self.rule()?;
        self.writer.flush()?;
        Ok(())
    }
}
