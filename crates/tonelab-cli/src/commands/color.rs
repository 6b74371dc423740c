use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tonelab_core::color::channels::{isolate_channel, RgbChannel};
use tonelab_core::color::enhance::enhance_color;
use tonelab_core::io::image_io::ColorLoad;

use super::{load, save};

#[derive(Args)]
pub struct ColorArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "enhanced.png")]
    pub output: PathBuf,
}

pub fn run(args: &ColorArgs) -> Result<()> {
    let buffer = load(&args.file, ColorLoad::Rgb)?;
    println!("Equalizing saturation, stretching lightness");
    let result = enhance_color(&buffer)?;
    save(&result, &args.output)
}

#[derive(Args)]
pub struct ChannelArgs {
    /// Input image file
    pub file: PathBuf,

    /// Channel to keep: r, g or b
    #[arg(long)]
    pub channel: RgbChannel,

    /// Output file path
    #[arg(short, long, default_value = "channel.png")]
    pub output: PathBuf,
}

pub fn run_channel(args: &ChannelArgs) -> Result<()> {
    let buffer = load(&args.file, ColorLoad::Rgb)?;
    println!("Keeping the {} channel", args.channel);
    let result = isolate_channel(&buffer, args.channel)?;
    save(&result, &args.output)
}
