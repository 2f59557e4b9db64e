mod cli;
mod commands;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use config::RunConfig;
use report::separator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(config: &RunConfig) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_banner(config: &RunConfig) {
    let target = std::path::absolute(&config.directory).unwrap_or_else(|_| config.directory.clone());

    println!("Live2D textures.cache generator");
    println!("{}", separator('='));
    println!("Target directory: {}", target.display());
    println!("Supported formats: standard + Live2D Cubism 3.0+");
    println!("{}", separator('-'));
}

fn main() -> Result<()> {
    let config = RunConfig::from(Args::parse());
    init_logging(&config);

    print_banner(&config);

    if config.preview {
        commands::preview::handle(&config.directory)?;
    } else {
        commands::generate::handle(&config.directory)?;
    }

    Ok(())
}
