mod cli;
mod input;

use clap::Parser;
use log::info;
use log::warn;

use pr_closure::analyze;
use pr_structure::ComplementTable;

use cli::Cli;
use input::parse_sequence;
use input::read_input;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level())
    ).init();

    let sequence = parse_sequence(&read_input(cli.input.as_deref())?)?;
    if !sequence.is_canonical() {
        warn!("Sequence contains bytes other than A, C, G, U; they never pair.");
    }
    info!("Checking a sequence of length {} ({:?}).", sequence.len(), cli.strategy);

    let table = ComplementTable::watson_crick();
    let report = analyze(&sequence, &table, cli.strategy.into());

    if cli.stats {
        match report.perfect {
            Some(s) => eprintln!("P closure: {s}"),
            None => eprintln!("P closure: skipped"),
        }
        if let Some(s) = report.almost {
            eprintln!("A closure: {s}");
        }
    }
    println!("{}", report.verdict);
    Ok(())
}

