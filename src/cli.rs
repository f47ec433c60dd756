//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "seqview", version, about = "Interactive sequence (array) visualizer")]
pub struct Cli {
    /// YAML config file (timings, view sizing).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file for the terminal UI. Defaults to seqview.log in the temp dir.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive terminal UI (default).
    Tui,
    /// Run a script of operations and print the final render.
    Replay {
        /// Script file, one operation per line.
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["seqview"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn replay_with_format() {
        let cli =
            Cli::try_parse_from(["seqview", "replay", "ops.txt", "--format", "html"]).unwrap();
        match cli.command {
            Some(Command::Replay { file, format }) => {
                assert_eq!(file, PathBuf::from("ops.txt"));
                assert_eq!(format, OutputFormat::Html);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["seqview", "tui", "--config", "c.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
