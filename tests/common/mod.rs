// Test utility module for qstats integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;
use qstats::config::{ReportPaths, DEFAULT_ANSWERS_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_QUESTIONS_FILE};
use tempfile::TempDir;

pub const QUESTIONS_HEADER: &str =
    "ID,Question,Tip,Type,Difficulty,CourseId,IsPublished,Created,PreviousVersionId,Deleted,TopicId,OriginalVersionId,Language";

/// Two questions, one soft-deleted, with two and one answer options.
pub const SCENARIO_QUESTIONS: &str = indoc! {"
    ID,Question,Tip,Type,Difficulty,CourseId,IsPublished,Created,PreviousVersionId,Deleted,TopicId,OriginalVersionId,Language
    1,What is 2+2?,,single,easy,7,true,2024-01-01,,NULL,3,1,en
    2,Name a prime,,multi,hard,7,false,2024-01-01,1,2024-01-01,3,1,en
"};

pub const SCENARIO_ANSWERS: &str = indoc! {"
    ID,Answer → ID,Answer → Answer,Answer → QuestionId,Answer → IsCorrect
    1,10,4,1,true
    1,11,5,1,false
    2,12,7,2,true
"};

/// A dataset directory with files under their default names.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new(questions: &str, answers: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join(DEFAULT_QUESTIONS_FILE), questions)
            .expect("Failed to write questions");
        fs::write(dir.path().join(DEFAULT_ANSWERS_FILE), answers).expect("Failed to write answers");
        Self { dir }
    }

    pub fn scenario() -> Self {
        Self::new(SCENARIO_QUESTIONS, SCENARIO_ANSWERS)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_path(&self) -> PathBuf {
        self.path().join(DEFAULT_OUTPUT_FILE)
    }

    pub fn paths(&self) -> ReportPaths {
        ReportPaths {
            answers: self.path().join(DEFAULT_ANSWERS_FILE),
            questions: self.path().join(DEFAULT_QUESTIONS_FILE),
            output: self.output_path(),
        }
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("Failed to read statistics output")
    }
}

/// Builds a question dataset from `(language, deleted)` pairs.
pub fn questions_csv(rows: &[(&str, &str)]) -> String {
    let mut csv = format!("{QUESTIONS_HEADER}\n");
    for (i, (language, deleted)) in rows.iter().enumerate() {
        csv.push_str(&format!(
            "{id},Q{id},,single,easy,1,true,,,{deleted},1,{id},{language}\n",
            id = i + 1
        ));
    }
    csv
}

/// Builds an answer dataset with `count` answers per question id.
pub fn answers_csv(counts: &[(&str, usize)]) -> String {
    let mut csv = String::from("ID,Answer → Answer\n");
    for (id, count) in counts {
        for n in 0..*count {
            csv.push_str(&format!("{id},answer {n}\n"));
        }
    }
    csv
}
