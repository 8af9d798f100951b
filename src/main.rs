use clap::Parser;
use emosaic::cli::{Cli, Commands};
use emosaic::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Build(args) => {
            emosaic::cli::build::run(args, &printer)?;
        }
        Commands::Completions(args) => emosaic::cli::completions::run(args)?,
        Commands::Index(args) => {
            emosaic::cli::index::run(args, &printer)?;
        }
        Commands::Init(args) => emosaic::cli::init::run(args, &printer)?,
        Commands::List(args) => emosaic::cli::list::run(args, &printer)?,
    }

    Ok(())
}
