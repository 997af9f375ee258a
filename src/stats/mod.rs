//! Descriptive statistics over a loaded [`Dataset`].
//!
//! Every question-level dimension is a [`FrequencyTable`] built from the full
//! question population, so its counts always sum to the question count. Null
//! cells land in a [`MISSING_LABEL`] bucket rather than being dropped.

pub mod answers;
pub mod frequency;
pub mod summary;

use crate::dataset::{Dataset, Question};

pub use answers::AnswerDistribution;
pub use frequency::{render_flag, render_value, FrequencyTable, MISSING_LABEL};
pub use summary::{count_bulk_deletes, DatasetSummary};

/// All statistics reported for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    pub total_questions: usize,
    pub total_answer_options: usize,
    pub answers: AnswerDistribution,
    pub published: FrequencyTable<String>,
    pub deleted: FrequencyTable<String>,
    pub language: FrequencyTable<String>,
    pub question_type: FrequencyTable<String>,
    pub difficulty: FrequencyTable<String>,
    pub previous_version: FrequencyTable<String>,
}

impl DatasetStatistics {
    pub fn compute(dataset: &Dataset) -> Self {
        let questions = &dataset.questions;

        let stats = Self {
            total_questions: questions.len(),
            total_answer_options: dataset.answers.len(),
            answers: AnswerDistribution::compute(&dataset.answers),
            published: categorical(questions, |q| q.is_published.as_deref()),
            deleted: flag(questions, Question::is_deleted),
            language: categorical(questions, |q| q.language.as_deref()),
            question_type: categorical(questions, |q| q.question_type.as_deref()),
            difficulty: categorical(questions, |q| q.difficulty.as_deref()),
            previous_version: flag(questions, Question::has_previous_version),
        };

        log::debug!(
            "Computed statistics: {} questions, {} answer options, {} languages",
            stats.total_questions,
            stats.total_answer_options,
            stats.language.len()
        );
        stats
    }
}

fn categorical<F>(questions: &[Question], field: F) -> FrequencyTable<String>
where
    F: Fn(&Question) -> Option<&str>,
{
    FrequencyTable::by_frequency(questions.iter().map(|q| render_value(field(q))))
}

fn flag<F>(questions: &[Question], derive: F) -> FrequencyTable<String>
where
    F: Fn(&Question) -> bool,
{
    FrequencyTable::by_frequency(questions.iter().map(|q| render_flag(derive(q))))
}
