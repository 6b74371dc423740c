use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tonelab_core::filters::levels::PiecewiseParams;
use tonelab_core::pipeline::config::TransformStep;
use tonelab_core::pipeline::{apply_steps, NoOpReporter};

use super::{load, parse_list, save, LoadModeArg};

#[derive(Args)]
pub struct ToneArgs {
    /// Input image file
    pub file: PathBuf,

    /// Linear stretch to "min,max" (e.g. "0,255")
    #[arg(long)]
    pub stretch: Option<String>,

    /// Shrink into "min,max" (e.g. "64,192")
    #[arg(long)]
    pub shrink: Option<String>,

    /// Explicit range map "src_min,src_max,dst_min,dst_max"
    #[arg(long)]
    pub map: Option<String>,

    /// Add an offset to every sample (may be negative)
    #[arg(long, allow_hyphen_values = true)]
    pub slide: Option<i32>,

    /// Piecewise-linear "threshold,low_a,low_b,high_c,high_d"
    #[arg(long)]
    pub piecewise: Option<String>,

    /// Percentile stretch "low,high" in percent (e.g. "2,98")
    #[arg(long)]
    pub percentile: Option<String>,

    /// Histogram equalization
    #[arg(long)]
    pub equalize: bool,

    /// Channel conversion on load
    #[arg(long, value_enum, default_value = "auto")]
    pub mode: LoadModeArg,

    /// Output file path
    #[arg(short, long, default_value = "toned.png")]
    pub output: PathBuf,
}

pub fn run(args: &ToneArgs) -> Result<()> {
    let buffer = load(&args.file, args.mode.into())?;
    let steps = build_steps(args)?;
    if steps.is_empty() {
        anyhow::bail!("No tone mapping requested (see --help)");
    }

    for step in &steps {
        println!("Applying {step}");
    }
    let result = apply_steps(&buffer, &steps, None, &NoOpReporter)?;

    save(&result, &args.output)
}

fn build_steps(args: &ToneArgs) -> Result<Vec<TransformStep>> {
    let mut steps = Vec::new();

    if let Some(ref s) = args.stretch {
        let v: Vec<u8> = parse_list(s, 2, "stretch")?;
        steps.push(TransformStep::LinearStretch {
            dst_min: v[0],
            dst_max: v[1],
        });
    }
    if let Some(ref s) = args.shrink {
        let v: Vec<u8> = parse_list(s, 2, "shrink")?;
        steps.push(TransformStep::Shrink {
            dst_min: v[0],
            dst_max: v[1],
        });
    }
    if let Some(ref s) = args.map {
        let v: Vec<u8> = parse_list(s, 4, "map")?;
        steps.push(TransformStep::LinearMap {
            src_min: v[0],
            src_max: v[1],
            dst_min: v[2],
            dst_max: v[3],
        });
    }
    if let Some(offset) = args.slide {
        steps.push(TransformStep::Slide(offset));
    }
    if let Some(ref s) = args.piecewise {
        let v: Vec<u8> = parse_list(s, 5, "piecewise")?;
        steps.push(TransformStep::Piecewise(PiecewiseParams {
            threshold: v[0],
            low: (v[1], v[2]),
            high: (v[3], v[4]),
        }));
    }
    if let Some(ref s) = args.percentile {
        let v: Vec<f64> = parse_list(s, 2, "percentile")?;
        steps.push(TransformStep::PercentileStretch {
            low_pct: v[0],
            high_pct: v[1],
            out_min: 0,
            out_max: 255,
        });
    }
    if args.equalize {
        steps.push(TransformStep::Equalize);
    }

    Ok(steps)
}
