mod commands;
mod terminal;

use bhumi_common::config::Config;
use commands::{CommandLine, Commands, batch, compute, convert, report};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet, commands.json)?;

    let cfg = Config {
        no_banner: commands.no_banner || commands.json,
        quiet: commands.quiet,
        json: commands.json,
        sequential: matches!(commands.command, Commands::Batch { sequential: true, .. }),
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match &commands.command {
        Commands::Compute(args) => compute::compute(args, &cfg),
        Commands::Batch { file, .. } => batch::batch(file, &cfg),
        Commands::Convert { sqft } => convert::convert(*sqft, &cfg),
        Commands::ReportNumber { date, existing } => report::next_number(*date, existing, &cfg),
    }
}
