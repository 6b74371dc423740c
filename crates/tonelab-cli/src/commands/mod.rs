pub mod ace;
pub mod color;
pub mod config;
pub mod histogram;
pub mod info;
pub mod matching;
pub mod pipeline;
pub mod reduce;
pub mod tone;

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tonelab_core::buffer::PixelBuffer;
use tonelab_core::io::image_io::{load_buffer, save_buffer, ColorLoad};
use tracing::debug;

/// How input images are converted on load.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LoadModeArg {
    Auto,
    Gray,
    Rgb,
}

impl From<LoadModeArg> for ColorLoad {
    fn from(arg: LoadModeArg) -> Self {
        match arg {
            LoadModeArg::Auto => ColorLoad::Auto,
            LoadModeArg::Gray => ColorLoad::Gray,
            LoadModeArg::Rgb => ColorLoad::Rgb,
        }
    }
}

pub(crate) fn load(path: &Path, mode: ColorLoad) -> Result<PixelBuffer> {
    let buffer =
        load_buffer(path, mode).with_context(|| format!("Failed to load {}", path.display()))?;
    debug!(path = %path.display(), ?mode, "Image loaded");
    println!(
        "Loaded {}x{} image ({} channel{})",
        buffer.width(),
        buffer.height(),
        buffer.channel_count(),
        if buffer.channel_count() == 1 { "" } else { "s" }
    );
    Ok(buffer)
}

pub(crate) fn save(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    save_buffer(buffer, path).with_context(|| format!("Failed to save {}", path.display()))?;
    println!("Saved to {}", path.display());
    Ok(())
}

/// Parse a comma-separated list of exactly `count` values.
pub(crate) fn parse_list<T>(input: &str, count: usize, what: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values: Vec<T> = input
        .split(',')
        .map(|s| s.trim().parse::<T>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Invalid {what} format: '{input}'"))?;
    if values.len() != count {
        anyhow::bail!("{what} requires exactly {count} values, got {}", values.len());
    }
    Ok(values)
}
