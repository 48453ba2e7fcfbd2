//! Command-line interface implementation for sprout.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATES_DIR};

/// Command-line arguments structure for sprout.
#[derive(Parser, Debug)]
#[command(author, version, about = "Sprout: scaffold a component tree from templates", long_about = None)]
pub struct Args {
    /// Directory to generate into. It is deleted and recreated on every run
    #[arg(value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Component tree file (JSON or YAML). Defaults to sprout.json, sprout.yml
    /// or sprout.yaml in the current directory, then to the built-in tree
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the templates
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates: PathBuf,

    /// Organisation prefix used in binding declarations, overriding the config
    #[arg(short = 'p', long, value_name = "PREFIX")]
    pub app_prefix: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments, exiting with clap's error handling on
/// invalid input.
pub fn get_args() -> Args {
    Args::parse()
}
