use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use pr_closure::Strategy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Compress nested pairs into stems.
    #[default]
    Stem,
    /// One fact per derivable range.
    Baseline,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Stem => Strategy::Stem,
            StrategyArg::Baseline => Strategy::Baseline,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "perfectrna", bin_name = "perfectrna")]
#[command(about = "Is an RNA sequence perfect, almost perfect or imperfect?")]
#[command(after_help = r#"EXAMPLES:
  echo AUGC | perfectrna
  perfectrna --strategy baseline --stats sequence.txt"#)]
pub struct Cli {
    /// File holding the sequence (first whitespace-delimited token), stdin if omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Closure used to find perfect substrings.
    #[arg(long, short = 's', value_enum, default_value_t)]
    pub strategy: StrategyArg,

    /// Print closure statistics to stderr.
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
