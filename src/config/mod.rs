//! Input and output locations.
//!
//! Built-in defaults reproduce the fixed file names the report has always
//! used. A `.qstats.toml` found in the working directory or one of its
//! ancestors can override them, and command-line flags override both.

pub mod loader;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use loader::{load_config, load_config_from, parse_config, CONFIG_FILE_NAME};

pub const DEFAULT_ANSWERS_FILE: &str = "AnswerOptions_04_11.csv";
pub const DEFAULT_QUESTIONS_FILE: &str = "QuestionsGenerated_04_11.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "dataset_statistics.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_answers")]
    pub answers: PathBuf,

    #[serde(default = "default_questions")]
    pub questions: PathBuf,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            answers: default_answers(),
            questions: default_questions(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output(),
        }
    }
}

fn default_answers() -> PathBuf {
    PathBuf::from(DEFAULT_ANSWERS_FILE)
}

fn default_questions() -> PathBuf {
    PathBuf::from(DEFAULT_QUESTIONS_FILE)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

/// Contents of `.qstats.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub inputs: InputsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Directory of the file this was loaded from; relative paths resolve against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Paths overridden on the command line.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub answers: Option<PathBuf>,
    pub questions: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Final file locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub answers: PathBuf,
    pub questions: PathBuf,
    pub output: PathBuf,
}

impl StatsConfig {
    fn anchor(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// Override paths are used as given; configured paths are anchored to
    /// the directory of the config file.
    pub fn resolve(&self, overrides: PathOverrides) -> ReportPaths {
        ReportPaths {
            answers: overrides
                .answers
                .unwrap_or_else(|| self.anchor(&self.inputs.answers)),
            questions: overrides
                .questions
                .unwrap_or_else(|| self.anchor(&self.inputs.questions)),
            output: overrides
                .output
                .unwrap_or_else(|| self.anchor(&self.output.path)),
        }
    }
}
