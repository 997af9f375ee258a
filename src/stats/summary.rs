use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::dataset::{Dataset, Question};

/// Headline counts for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub total_questions: usize,
    pub deleted_questions: usize,
    pub bulk_deletes: usize,
    pub published_questions: usize,
    pub total_answers: usize,
}

impl DatasetSummary {
    pub fn compute(dataset: &Dataset) -> Self {
        let questions = &dataset.questions;
        Self {
            total_questions: questions.len(),
            deleted_questions: questions.iter().filter(|q| q.is_deleted()).count(),
            bulk_deletes: count_bulk_deletes(questions),
            published_questions: questions.iter().filter(|q| is_published(q)).count(),
            total_answers: dataset.answers.len(),
        }
    }
}

/// Only the exact lowercase literal `true` marks a question as published.
fn is_published(question: &Question) -> bool {
    question.is_published.as_deref() == Some("true")
}

/// Distinct IDs of deleted questions whose deletion timestamp is shared with
/// another deleted row.
///
/// Timestamps are compared as exact strings. Rows without an ID share one key.
pub fn count_bulk_deletes(questions: &[Question]) -> usize {
    let mut by_timestamp: HashMap<&str, usize> = HashMap::new();
    for deleted in questions.iter().filter_map(|q| q.deleted.as_deref()) {
        *by_timestamp.entry(deleted).or_insert(0) += 1;
    }

    questions
        .iter()
        .filter(|q| {
            q.deleted
                .as_deref()
                .is_some_and(|ts| by_timestamp.get(ts).copied().unwrap_or(0) > 1)
        })
        .map(|q| q.id.as_deref())
        .collect::<HashSet<_>>()
        .len()
}
