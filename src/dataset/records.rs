//! Row types for the question and answer-option datasets.

/// Header names read from the question dataset.
pub mod question_columns {
    pub const ID: &str = "ID";
    pub const IS_PUBLISHED: &str = "IsPublished";
    pub const DELETED: &str = "Deleted";
    pub const LANGUAGE: &str = "Language";
    pub const TYPE: &str = "Type";
    pub const DIFFICULTY: &str = "Difficulty";
    pub const PREVIOUS_VERSION_ID: &str = "PreviousVersionId";
}

/// Header names read from the answer-option dataset.
pub mod answer_columns {
    /// Foreign key to the owning question.
    pub const ID: &str = "ID";
}

/// Cell contents treated as missing, in addition to the empty string.
const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true when a raw cell should be read as null.
pub fn is_null_marker(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NULL_MARKERS.contains(&trimmed)
}

/// Converts a raw cell into `None` for null markers, the text as written otherwise.
///
/// Surrounding whitespace is kept, so `"en "` and `"en"` stay distinct values.
pub fn parse_cell(raw: &str) -> Option<String> {
    if is_null_marker(raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

/// One row of the question dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question {
    pub id: Option<String>,
    pub is_published: Option<String>,
    /// Deletion timestamp; present only for soft-deleted questions.
    pub deleted: Option<String>,
    pub language: Option<String>,
    pub question_type: Option<String>,
    pub difficulty: Option<String>,
    pub previous_version_id: Option<String>,
}

impl Question {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted.is_some()
    }

    #[must_use]
    pub fn has_previous_version(&self) -> bool {
        self.previous_version_id.is_some()
    }
}

/// One row of the answer-option dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerOption {
    /// Identifier of the question this option belongs to.
    pub question_id: Option<String>,
}
