use std::path::PathBuf;

use clap::Parser;
use vesta_vec::ArrowAnchor;

#[derive(Parser, Debug)]
#[command(
    name = "vesta-add-vec",
    about = "Add vector arrays to a VESTA file.",
    version
)]
pub struct Cli {
    /// Path to the input VESTA file
    #[arg(value_name = "INPUT_VESTA_FILE")]
    pub input_vesta_file: PathBuf,

    /// VASP MAGMOM string
    #[arg(long, value_name = "STR", allow_hyphen_values = true)]
    pub magmom: Option<String>,

    /// File that stores the vectors as a natoms-by-3 array
    #[arg(long = "vector_file", visible_alias = "vector-file", value_name = "FILE")]
    pub vector_file: Option<PathBuf>,

    /// Output VESTA file name with added vectors [default: output.vesta]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of atoms (required with --magmom)
    #[arg(short = 'n', long, value_name = "N")]
    pub natoms: Option<usize>,

    /// center: arrow is centered on the site | site: arrow starts at the site [default: center]
    #[arg(long = "arrow_mode", visible_alias = "arrow-mode", value_name = "MODE")]
    pub arrow_mode: Option<ArrowAnchor>,

    /// Spin axis, only relevant if MAGMOM is collinear (0=x, 1=y, 2=z) [default: 2]
    #[arg(
        short = 's',
        long = "sqa",
        value_name = "AXIS",
        value_parser = clap::value_parser!(u8).range(0..=2)
    )]
    pub sqa: Option<u8>,

    /// Scale arrow length [default: 1]
    #[arg(short = 'l', long = "lscale", value_name = "F", allow_hyphen_values = true)]
    pub scale: Option<f64>,

    /// Scale arrow width [default: 1]
    #[arg(short = 'w', long = "wscale", value_name = "F")]
    pub width: Option<f64>,

    /// RGB color, 3 integers separated by spaces [default: 255 0 0]
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    pub rgb: Option<Vec<u8>>,

    /// Settings file to use instead of the one in the user config directory
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Store the effective arrow style as the new defaults
    #[arg(long)]
    pub save_config: bool,

    /// Also write the vectors as a JSON object {"0": [x, y, z], ...}
    #[arg(long, value_name = "FILE")]
    pub dump_moments: Option<PathBuf>,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Show debug output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
