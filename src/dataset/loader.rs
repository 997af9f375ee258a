use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use super::records::{answer_columns, parse_cell, question_columns, AnswerOption, Question};
use crate::errors::{Result, StatsError};

/// A delimited-text file held fully in memory, addressed by header name.
#[derive(Debug)]
pub(crate) struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub(crate) fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| StatsError::io(path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| StatsError::csv(path, e))?
            .clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| StatsError::csv(path, e))?;
            // Short rows read as null; long rows have nowhere to go
            if record.len() > headers.len() {
                return Err(StatsError::RaggedRow {
                    path: path.to_path_buf(),
                    line: record.position().map_or(0, |p| p.line()),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            rows.push(record);
        }

        log::debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(Self { headers, rows })
    }

    /// Index of the first header named `name` (surrounding whitespace ignored).
    pub(crate) fn column(&self, path: &Path, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| StatsError::missing_column(path, name))
    }

    /// Reads a cell as nullable text. Short rows yield null for missing cells.
    fn cell(row: &StringRecord, index: usize) -> Option<String> {
        row.get(index).and_then(parse_cell)
    }
}

/// Loads the question dataset.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let table = Table::read(path)?;

    let id = table.column(path, question_columns::ID)?;
    let is_published = table.column(path, question_columns::IS_PUBLISHED)?;
    let deleted = table.column(path, question_columns::DELETED)?;
    let language = table.column(path, question_columns::LANGUAGE)?;
    let question_type = table.column(path, question_columns::TYPE)?;
    let difficulty = table.column(path, question_columns::DIFFICULTY)?;
    let previous_version_id = table.column(path, question_columns::PREVIOUS_VERSION_ID)?;

    let questions = table
        .rows
        .iter()
        .map(|row| Question {
            id: Table::cell(row, id),
            is_published: Table::cell(row, is_published),
            deleted: Table::cell(row, deleted),
            language: Table::cell(row, language),
            question_type: Table::cell(row, question_type),
            difficulty: Table::cell(row, difficulty),
            previous_version_id: Table::cell(row, previous_version_id),
        })
        .collect::<Vec<_>>();

    log::info!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Loads the answer-option dataset.
pub fn load_answer_options(path: &Path) -> Result<Vec<AnswerOption>> {
    let table = Table::read(path)?;
    let id = table.column(path, answer_columns::ID)?;

    let answers = table
        .rows
        .iter()
        .map(|row| AnswerOption {
            question_id: Table::cell(row, id),
        })
        .collect::<Vec<_>>();

    log::info!(
        "Loaded {} answer options from {}",
        answers.len(),
        path.display()
    );
    Ok(answers)
}
