//! CLI argument definitions for texcache

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "texcache")]
#[command(about = "Live2D textures.cache generator")]
#[command(
    long_about = "Scans a directory tree for index.json model descriptors and writes a \
                  textures.cache file next to each one.\n\n\
                  Supported formats: standard ({\"textures\": [...]}) and \
                  Live2D Cubism 3.0+ ({\"FileReferences\": {\"Textures\": [...]}})."
)]
#[command(after_help = "Examples:\n  \
                        texcache\n  \
                        texcache /path/to/models\n  \
                        texcache /path/to/models --preview")]
#[command(version)]
pub struct Args {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Preview mode: scan only, then ask before generating
    #[arg(short, long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
