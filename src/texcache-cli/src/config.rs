//! Run configuration resolved from the command line

use crate::cli::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub directory: PathBuf,
    pub preview: bool,
    pub verbosity: u8,
}

impl RunConfig {
    /// Log filter directive for the configured verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            directory: args.directory,
            preview: args.preview,
            verbosity: args.verbose,
        }
    }
}
