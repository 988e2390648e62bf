mod args;
mod run;
mod stats;
mod util;

use args::{Cli, SubCommands};
use libpairwise::structs::AlignmentMode;
use run::run;
use util::init_logger;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let cli = Cli::parse();
    init_logger(cli.verbosity);

    match cli.command {
        SubCommands::Global(args) => {
            run(&args, AlignmentMode::Global)?;
        }
        SubCommands::Local(args) => {
            run(&args, AlignmentMode::Local)?;
        }
    }
    Ok(())
}
