pub mod build;
pub mod completions;
pub mod index;
pub mod init;
pub mod list;

use clap::{Parser, Subcommand};

/// emosaic - Emoji photomosaic generator
#[derive(Parser, Debug)]
#[command(name = "emosaic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a mosaic from a source photo
    Build(build::BuildArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),

    /// Extract tile features into the dictionary
    Index(index::IndexArgs),

    /// Initialize a mosaic project (generates mosaic.yaml)
    Init(init::InitArgs),

    /// List dictionary entries in sort order
    List(list::ListArgs),
}
