//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// unknown-sdk - Describe and check missing development SDKs.
#[derive(Debug, Parser)]
#[command(name = "unknown-sdk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to descriptor file (overrides default .unknown-sdk.yml)
    #[arg(short, long, global = true, env = "UNKNOWN_SDK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the SDK descriptors in the descriptor file
    List(ListArgs),

    /// Check candidate versions against a descriptor
    Check(CheckArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Descriptor key in the descriptor file
    pub descriptor: String,

    /// Candidate version strings to test
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub versions: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
