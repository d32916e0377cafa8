use std::path::PathBuf;

use geovalid::GeomType;

/// WKT validation CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "geovalid", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Validate a single WKT geometry
    Validate(ValidateArgs),

    /// Validate a JSON file of geometry records
    Batch(BatchArgs),
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Declared geometry type: Point, LineString or Polygon
    pub declared: GeomType,

    /// WKT text, e.g. "POINT (30 10)"
    pub wkt: String,

    /// Policy file (JSON); defaults to the built-in policy
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub policy: Option<PathBuf>,

    /// Print the verdict as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of {name, wkt, type} records
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Policy file (JSON); defaults to the built-in policy
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub policy: Option<PathBuf>,
}
