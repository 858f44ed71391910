//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `rnlink`.
#[derive(Debug, Parser)]
#[command(name = "rnlink", version, about = "Link native dependencies into a React Native project")]
pub struct Cli {
    /// Log debug output.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Project root; defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Link one dependency, or all of them when no package is given.
    Link {
        /// Package to link; a trailing `@version` is ignored.
        package: Option<String>,
        /// Only link for these platforms (comma-separated).
        #[arg(long, value_delimiter = ',', value_name = "LIST")]
        platforms: Option<Vec<String>>,
    },
    /// Print the resolved project configuration as JSON.
    Config,
}
