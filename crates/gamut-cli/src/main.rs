//! gamut - RGB gamut conversion matrix generator
//!
//! Derives normalized primary matrices and gamut-to-gamut conversion
//! matrices from chromaticities and whitepoints.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gamut")]
#[command(author, version, about = "RGB gamut conversion matrix generator")]
#[command(long_about = "
Derives 3x3 matrices converting linear RGB between gamuts.
No chromatic adaptation is applied between differing whitepoints.

Examples:
  gamut list                                    # Built-in gamuts
  gamut convert --from sRGB --to ACES2065-1     # Conversion matrix
  gamut convert --from ap1 --to xyz --json
  gamut convert --src-primaries 0.64,0.33,0.3,0.6,0.15,0.06 \\
                --src-white 0.3127,0.329 --to ACEScg --flat
  gamut npm \"DCI-P3\"                            # RGB to XYZ matrix
  gamut invert 2 0 0 4                          # Invert a 2x2 matrix
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the matrix converting one gamut's RGB to another's
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print a gamut's normalized primary matrix (RGB to XYZ)
    Npm(NpmArgs),

    /// List built-in gamuts
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Invert a 2x2, 3x3 or 4x4 matrix given row-major
    Invert(InvertArgs),
}

/// Matrix printing options shared by every command.
#[derive(Args, Clone, Copy)]
struct OutputArgs {
    /// Decimal places in text output
    #[arg(short, long, default_value = "15")]
    precision: usize,

    /// Emit JSON instead of text
    #[arg(long, conflicts_with = "flat")]
    json: bool,

    /// Emit the row-major values on one comma-separated line
    #[arg(long)]
    flat: bool,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source gamut name
    #[arg(short, long, required_unless_present = "src_primaries")]
    from: Option<String>,

    /// Destination gamut name
    #[arg(short, long, required_unless_present = "dst_primaries")]
    to: Option<String>,

    /// Source primaries as rx,ry,gx,gy,bx,by
    #[arg(long, conflicts_with = "from", requires = "src_white", allow_hyphen_values = true)]
    src_primaries: Option<String>,

    /// Source whitepoint as wx,wy
    #[arg(long, requires = "src_primaries")]
    src_white: Option<String>,

    /// Destination primaries as rx,ry,gx,gy,bx,by
    #[arg(long, conflicts_with = "to", requires = "dst_white", allow_hyphen_values = true)]
    dst_primaries: Option<String>,

    /// Destination whitepoint as wx,wy
    #[arg(long, requires = "dst_primaries")]
    dst_white: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct NpmArgs {
    /// Gamut name
    gamut: String,

    /// Print the inverse (XYZ to RGB) instead
    #[arg(short, long)]
    inverse: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ListArgs {
    /// Also print primaries and whitepoints
    #[arg(short, long)]
    long: bool,

    /// Emit JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InvertArgs {
    /// Matrix values, row-major (4, 9 or 16 of them)
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

fn init_logging(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Npm(args) => commands::npm::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Invert(args) => commands::invert::run(args),
    }
}
