mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tonelab", about = "Intensity transformation and histogram tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and per-channel statistics
    Info(commands::info::InfoArgs),
    /// Print or export a channel's histogram and CDF
    Histogram(commands::histogram::HistogramArgs),
    /// Apply point tone mappings (stretch, shrink, slide, piecewise, ...)
    Tone(commands::tone::ToneArgs),
    /// Match an image's histogram to a reference image
    Match(commands::matching::MatchArgs),
    /// Adaptive contrast enhancement
    Ace(commands::ace::AceArgs),
    /// Enhance colour contrast in HLS space
    Color(commands::color::ColorArgs),
    /// Keep a single RGB channel
    Channel(commands::color::ChannelArgs),
    /// Simulate a lower spatial resolution
    Reduce(commands::reduce::ReduceArgs),
    /// Run a pipeline described by a TOML config
    Run(commands::pipeline::RunArgs),
    /// Print or save a default pipeline config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Histogram(args) => commands::histogram::run(args),
        Commands::Tone(args) => commands::tone::run(args),
        Commands::Match(args) => commands::matching::run(args),
        Commands::Ace(args) => commands::ace::run(args),
        Commands::Color(args) => commands::color::run(args),
        Commands::Channel(args) => commands::color::run_channel(args),
        Commands::Reduce(args) => commands::reduce::run(args),
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
