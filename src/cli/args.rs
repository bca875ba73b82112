//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Parse decision-tree text exports into trees and drawing layouts
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output; repeat for more verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse an export and print the tree structure
    Show {
        /// Export file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Include leaf class nodes in the tree
        #[arg(short, long)]
        leaves: bool,
    },

    /// Parse an export and print its drawing layout
    Layout {
        /// Export file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Summarize leaf class assignments
    Leaves {
        /// Export file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Parse all exports in a directory
    Scan {
        /// Directory (default: configured default_dir)
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
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

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
