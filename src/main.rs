use clap::Parser;
use miette::Result;
use smudge::cli::{Cli, Commands};
use smudge::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => smudge::cli::generate::run(args, &printer)?,
        Commands::List(args) => smudge::cli::list::run(args, &printer)?,
        Commands::Completions(args) => smudge::cli::completions::run(args)?,
    }

    Ok(())
}
