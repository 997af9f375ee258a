use std::collections::BTreeMap;

use super::frequency::FrequencyTable;
use crate::dataset::AnswerOption;

/// How answer options spread across the questions they belong to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerDistribution {
    /// Question identifier → number of answer options referencing it.
    pub per_question: BTreeMap<String, usize>,
    /// Number of answers per question → number of questions with that many.
    pub distribution: FrequencyTable<usize>,
    /// Answer rows without a question identifier; not grouped.
    pub ungrouped: usize,
}

impl AnswerDistribution {
    pub fn compute(answers: &[AnswerOption]) -> Self {
        let mut per_question: BTreeMap<String, usize> = BTreeMap::new();
        let mut ungrouped = 0;

        for answer in answers {
            match &answer.question_id {
                Some(id) => *per_question.entry(id.clone()).or_insert(0) += 1,
                None => ungrouped += 1,
            }
        }

        if ungrouped > 0 {
            log::warn!("{ungrouped} answer options have no question ID and were not grouped");
        }

        let distribution = FrequencyTable::by_key(per_question.values().copied());
        Self {
            per_question,
            distribution,
            ungrouped,
        }
    }

    /// Number of distinct questions with at least one answer option.
    pub fn question_count(&self) -> usize {
        self.per_question.len()
    }

    /// Number of answer options that were grouped under a question.
    pub fn grouped_answers(&self) -> usize {
        self.per_question.values().sum()
    }

    /// Mean answers per answered question; `None` when nothing was grouped.
    pub fn average(&self) -> Option<f64> {
        if self.per_question.is_empty() {
            None
        } else {
            Some(self.grouped_answers() as f64 / self.question_count() as f64)
        }
    }

    /// Mean formatted to two decimals, `nan` when undefined.
    pub fn average_display(&self) -> String {
        self.average()
            .map_or_else(|| "nan".to_string(), |avg| format!("{avg:.2}"))
    }
}
