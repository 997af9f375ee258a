//! Question and answer-option datasets.
//!
//! Both files are delimited text with a header row. Columns are located by
//! name, so extra columns and column order do not matter. A missing expected
//! column fails the whole load.

pub mod loader;
pub mod records;

use std::path::Path;

use crate::errors::Result;

pub use loader::{load_answer_options, load_questions};
pub use records::{is_null_marker, parse_cell, AnswerOption, Question};

/// Both datasets, loaded fully into memory.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub questions: Vec<Question>,
    pub answers: Vec<AnswerOption>,
}

impl Dataset {
    pub fn new(questions: Vec<Question>, answers: Vec<AnswerOption>) -> Self {
        Self { questions, answers }
    }

    /// Loads the answer options first, then the questions.
    pub fn load(answers_path: &Path, questions_path: &Path) -> Result<Self> {
        let answers = load_answer_options(answers_path)?;
        let questions = load_questions(questions_path)?;
        Ok(Self { questions, answers })
    }
}
