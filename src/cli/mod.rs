pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// smudge - Sprite generator for Find Smudge
#[derive(Parser, Debug)]
#[command(name = "smudge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw every sprite and write them as PNG files
    Generate(generate::GenerateArgs),

    /// List the sprites this tool can draw
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
