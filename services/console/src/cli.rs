use crate::demo::{run_demo, DemoArgs};
use crate::intake::{run_intake, IntakeArgs};
use clap::{Parser, Subcommand};
use tracing::info;
use zoo_registry::config::AppConfig;
use zoo_registry::error::AppError;
use zoo_registry::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "zoo",
    about = "Admit animals and assets into the zoo registry and report on holdings",
    version
)]
struct Cli {
    /// Override the configured tracing filter (e.g. `debug` or `zoo_registry=trace`)
    #[arg(long, global = true, value_parser = parse_log_level)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the reference admission scenario and print the holdings summary
    Demo(DemoArgs),
    /// Apply a JSON intake manifest and print the outcome and summary
    Intake(IntakeArgs),
}

fn parse_log_level(raw: &str) -> Result<String, String> {
    let level = raw.trim();
    if level.is_empty() {
        Err("log level must not be blank".to_string())
    } else {
        Ok(level.to_string())
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load_with_log_level(cli.log_level)?;

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "zoo registry ready");

    match cli.command {
        Command::Demo(args) => run_demo(args),
        Command::Intake(args) => run_intake(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_intake_with_global_log_level() {
        let cli = Cli::try_parse_from([
            "zoo",
            "intake",
            "animals.json",
            "--json",
            "--log-level",
            "debug",
        ])
        .expect("arguments parse");

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Intake(args) => {
                assert_eq!(args.manifest, PathBuf::from("animals.json"));
                assert!(args.json);
            }
            other => panic!("expected intake command, got {other:?}"),
        }
    }

    #[test]
    fn demo_defaults_to_text_output() {
        let cli = Cli::try_parse_from(["zoo", "demo"]).expect("arguments parse");
        assert!(cli.log_level.is_none());
        assert!(matches!(cli.command, Command::Demo(DemoArgs { json: false })));
    }

    #[test]
    fn blank_log_level_flag_is_rejected() {
        assert!(Cli::try_parse_from(["zoo", "demo", "--log-level", ""]).is_err());
        assert!(Cli::try_parse_from(["zoo", "--log-level", "  ", "demo"]).is_err());

        let cli = Cli::try_parse_from(["zoo", "--log-level", " warn ", "demo"])
            .expect("arguments parse");
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["zoo"]).is_err());
    }
}
