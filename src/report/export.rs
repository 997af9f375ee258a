//! Flattened `(Metric, Value, Category)` statistics table.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{Result, StatsError};
use crate::stats::{DatasetStatistics, FrequencyTable};

pub const HEADER: [&str; 3] = ["Metric", "Value", "Category"];

/// Grouping label of a statistic entry, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BasicCounts,
    AnswerDistribution,
    PublishedStatus,
    DeletedStatus,
    Language,
    QuestionType,
    Difficulty,
    VersionStatus,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::BasicCounts,
        Category::AnswerDistribution,
        Category::PublishedStatus,
        Category::DeletedStatus,
        Category::Language,
        Category::QuestionType,
        Category::Difficulty,
        Category::VersionStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BasicCounts => "Basic Counts",
            Category::AnswerDistribution => "Answer Distribution",
            Category::PublishedStatus => "Published Status",
            Category::DeletedStatus => "Deleted Status",
            Category::Language => "Language",
            Category::QuestionType => "Question Type",
            Category::Difficulty => "Difficulty",
            Category::VersionStatus => "Version Status",
        }
    }

    /// Prefix of the metric label for per-value rows.
    fn metric_prefix(&self) -> &'static str {
        match self {
            Category::PublishedStatus => "Published",
            Category::DeletedStatus => "Deleted",
            Category::Language => "Language",
            Category::QuestionType => "Type",
            Category::Difficulty => "Difficulty",
            Category::VersionStatus => "Has Previous Version",
            Category::BasicCounts | Category::AnswerDistribution => "",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A count or a preformatted value such as the two-decimal average.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    Count(usize),
    Text(String),
}

impl StatValue {
    pub fn as_count(&self) -> Option<usize> {
        match self {
            StatValue::Count(n) => Some(*n),
            StatValue::Text(_) => None,
        }
    }

    fn parse(raw: &str) -> Self {
        raw.parse()
            .map_or_else(|_| StatValue::Text(raw.to_string()), StatValue::Count)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub metric: String,
    pub value: StatValue,
    pub category: Category,
}

impl StatEntry {
    pub fn new(metric: impl Into<String>, value: StatValue, category: Category) -> Self {
        Self {
            metric: metric.into(),
            value,
            category,
        }
    }

    pub fn count(metric: impl Into<String>, count: usize, category: Category) -> Self {
        Self::new(metric, StatValue::Count(count), category)
    }
}

/// Flattens the statistics into export rows, grouped in [`Category::ALL`] order.
pub fn flatten(stats: &DatasetStatistics) -> Vec<StatEntry> {
    let mut entries = vec![
        StatEntry::count("Total Questions", stats.total_questions, Category::BasicCounts),
        StatEntry::count(
            "Total Answer Options",
            stats.total_answer_options,
            Category::BasicCounts,
        ),
        StatEntry::new(
            "Average Answers per Question",
            StatValue::Text(stats.answers.average_display()),
            Category::BasicCounts,
        ),
    ];

    entries.extend(stats.answers.distribution.iter().map(|(n, count)| {
        StatEntry::count(
            format!("Questions with {n} answers"),
            count,
            Category::AnswerDistribution,
        )
    }));

    let dimensions: [(&FrequencyTable<String>, Category); 6] = [
        (&stats.published, Category::PublishedStatus),
        (&stats.deleted, Category::DeletedStatus),
        (&stats.language, Category::Language),
        (&stats.question_type, Category::QuestionType),
        (&stats.difficulty, Category::Difficulty),
        (&stats.previous_version, Category::VersionStatus),
    ];

    for (table, category) in dimensions {
        entries.extend(table.iter().map(|(value, count)| {
            StatEntry::count(
                format!("{}: {}", category.metric_prefix(), value),
                count,
                category,
            )
        }));
    }

    entries
}

/// Serializes entries as CSV with a header row and `\n` line endings.
pub fn write_entries<W: Write>(writer: W, entries: &[StatEntry]) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for entry in entries {
        csv_writer.write_record([
            entry.metric.as_str(),
            entry.value.to_string().as_str(),
            entry.category.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the table to `path`, replacing any existing file.
pub fn write_statistics(path: &Path, entries: &[StatEntry]) -> Result<()> {
    let file = File::create(path).map_err(|e| StatsError::io(path, e))?;
    write_entries(file, entries).map_err(|e| StatsError::csv(path, e))?;
    log::info!("Wrote {} statistics to {}", entries.len(), path.display());
    Ok(())
}

/// Reads a table produced by [`write_statistics`].
pub fn read_statistics(path: &Path) -> Result<Vec<StatEntry>> {
    let file = File::open(path).map_err(|e| StatsError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|e| StatsError::csv(path, e))?;
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| StatsError::missing_column(path, name))
    };
    let metric = column(HEADER[0])?;
    let value = column(HEADER[1])?;
    let category = column(HEADER[2])?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StatsError::csv(path, e))?;
        let field = |i: usize| record.get(i).unwrap_or_default();

        let parsed_category = field(category)
            .parse::<Category>()
            .map_err(|name| StatsError::UnknownCategory {
                path: path.to_path_buf(),
                category: name,
            })?;

        entries.push(StatEntry::new(
            field(metric),
            StatValue::parse(field(value)),
            parsed_category,
        ));
    }

    Ok(entries)
}

/// Sums the counts of every entry in `category`.
pub fn category_total(entries: &[StatEntry], category: Category) -> usize {
    entries
        .iter()
        .filter(|e| e.category == category)
        .filter_map(|e| e.value.as_count())
        .sum()
}
