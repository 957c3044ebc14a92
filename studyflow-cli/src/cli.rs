use std::path::PathBuf;

use clap::Parser;

/// Lay out a list of chips or fixed-size items into wrapping rows.
///
/// Reads a JSON layout request and prints the JSON layout response.
#[derive(Parser, Debug, Clone)]
#[command(name = "studyflow", version, about)]
pub struct Args {
    /// Request file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// JSON config file with default spacing and origin
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Container width, overriding the request
    #[arg(short, long)]
    pub width: Option<f32>,

    /// Spacing between items and rows, overriding request and config
    #[arg(short, long)]
    pub spacing: Option<f32>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
