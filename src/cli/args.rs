//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Railyard shunting simulator: move trains between tracks until every train has departed
#[derive(Parser, Debug)]
#[command(name = "railyard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .railyard.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session on stdin/stdout
    Play {
        /// Yard layout file (default: `default_layout` setting)
        #[arg(value_hint = ValueHint::FilePath)]
        layout: Option<PathBuf>,
    },

    /// Run a session with commands read from a script file
    Run {
        /// Yard layout file
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
        /// Command script, one command per line
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,
    },

    /// Render a yard with its counts
    Show {
        /// Yard layout file
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
    },

    /// Validate a layout file
    Check {
        /// Yard layout file
        #[arg(value_hint = ValueHint::FilePath)]
        layout: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show config file locations
    Path,
}
