use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PathOverrides;

#[derive(Parser, Debug)]
#[command(name = "qstats")]
#[command(about = "Descriptive statistics for question and answer-option datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to `report` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

/// Dataset locations shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Answer-option dataset (defaults to AnswerOptions_04_11.csv)
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Question dataset (defaults to QuestionsGenerated_04_11.csv)
    #[arg(long)]
    pub questions: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the statistics report and export the statistics table
    Report {
        #[command(flatten)]
        inputs: InputArgs,

        /// Statistics table to write (defaults to dataset_statistics.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plain output (no colors, ASCII-only)
        #[arg(long)]
        plain: bool,
    },

    /// Print headline counts as JSON
    Summary {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

impl Commands {
    /// The command run when none is given.
    pub fn default_report() -> Self {
        Commands::Report {
            inputs: InputArgs::default(),
            output: None,
            plain: false,
        }
    }
}

impl InputArgs {
    pub fn into_overrides(self, output: Option<PathBuf>) -> PathOverrides {
        PathOverrides {
            answers: self.answers,
            questions: self.questions,
            output,
        }
    }
}
