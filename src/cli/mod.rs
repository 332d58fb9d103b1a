pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dummylog")]
#[command(about = "Synthetic log and HTTP traffic generator", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: ~/.config/dummylog/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Periodically write fabricated log lines
    Run(RunArgs),
    /// Serve POST /say, echoing request bodies
    Serve,
}

#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Log format: 'text' or 'json' [default: text]
    #[arg(long)]
    pub format: Option<String>,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Pause between messages (e.g., "500ms", "1s", "5m")
    #[arg(short, long)]
    pub interval: Option<String>,

    /// Words per sentence
    #[arg(short, long)]
    pub words: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::try_parse_from([
            "dummylog", "run", "--format", "json", "--file", "out.log", "--interval", "250ms",
        ])
        .unwrap();

        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.format.as_deref(), Some("json"));
                assert_eq!(args.file, Some(PathBuf::from("out.log")));
                assert_eq!(args.interval.as_deref(), Some("250ms"));
                assert_eq!(args.words, None);
            }
            Commands::Serve => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["dummylog", "--config", "c.toml", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["dummylog"]).is_err());
        assert!(Cli::try_parse_from(["dummylog", "walk"]).is_err());
        assert!(Cli::try_parse_from(["dummylog", "serve", "--format", "json"]).is_err());
    }
}
