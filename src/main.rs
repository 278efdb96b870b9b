use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use aurora::config::OUTPUT_PATH;
use aurora::{AuroraConfig, Pipeline, PngSink};

#[derive(Parser)]
#[command(name = "aurora")]
#[command(about = "Render a noise-modulated aurora gradient to gradient.png")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format_timestamp(None)
        .init();

    let sink = PngSink::new(OUTPUT_PATH);
    Pipeline::new(AuroraConfig::default())
        .run(&sink)
        .with_context(|| format!("Failed to generate {}", OUTPUT_PATH))?;

    Ok(())
}
