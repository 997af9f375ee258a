use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use qstats::cli::{Cli, Commands};
use qstats::commands::{handle_report, handle_summary, ReportConfig};
use qstats::config::{load_config, StatsConfig};
use qstats::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = load_config();
    let command = cli.command.unwrap_or_else(Commands::default_report);

    match command {
        Commands::Report {
            inputs,
            output,
            plain,
        } => handle_report(build_report_config(&config, inputs, output, plain)),
        Commands::Summary { inputs } => {
            let paths = config.resolve(inputs.into_overrides(None));
            handle_summary(&paths.answers, &paths.questions)
        }
    }
}

// -v info, -vv debug, -vvv trace; RUST_LOG still wins
fn verbosity_to_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(verbosity_to_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn build_report_config(
    config: &StatsConfig,
    inputs: qstats::cli::InputArgs,
    output: Option<std::path::PathBuf>,
    plain: bool,
) -> ReportConfig {
    let formatting = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    ReportConfig {
        paths: config.resolve(inputs.into_overrides(output)),
        formatting,
    }
}
