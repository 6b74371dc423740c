use console::Style;
use tonelab_core::histogram::Histogram;
use tonelab_core::pipeline::config::PipelineConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    step: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            step: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn channel_name(index: usize, count: usize) -> &'static str {
    match (count, index) {
        (1, _) => "Gray",
        (_, 0) => "Red",
        (_, 1) => "Green",
        _ => "Blue",
    }
}

fn stats_row(hist: &Histogram) -> (String, String, String, String) {
    let min = hist.min_level().map_or("-".into(), |v| v.to_string());
    let max = hist.max_level().map_or("-".into(), |v| v.to_string());
    let mean = hist.mean().map_or("-".into(), |v| format!("{v:.2}"));
    (min, max, mean, hist.non_empty_bins().to_string())
}

/// Print min / max / mean / occupied-level count for each channel.
pub fn print_channel_table(histograms: &[Histogram]) {
    let s = Styles::new();
    println!(
        "  {:<8}{:>6}{:>6}{:>10}{:>8}",
        s.label.apply_to("Channel"),
        s.label.apply_to("Min"),
        s.label.apply_to("Max"),
        s.label.apply_to("Mean"),
        s.label.apply_to("Levels"),
    );
    for (i, hist) in histograms.iter().enumerate() {
        let (min, max, mean, levels) = stats_row(hist);
        println!(
            "  {:<8}{:>6}{:>6}{:>10}{:>8}",
            channel_name(i, histograms.len()),
            s.value.apply_to(min),
            s.value.apply_to(max),
            s.value.apply_to(mean),
            s.value.apply_to(levels),
        );
    }
}

/// Print two histograms' statistics side by side.
pub fn print_histogram_comparison(before: &Histogram, after: &Histogram) {
    let s = Styles::new();
    let (b_min, b_max, b_mean, b_levels) = stats_row(before);
    let (a_min, a_max, a_mean, a_levels) = stats_row(after);

    println!("  {}", s.title.apply_to("Histogram comparison"));
    println!(
        "  {:<10}{:>10}{:>10}",
        "",
        s.label.apply_to("First"),
        s.label.apply_to("Second")
    );
    for (label, b, a) in [
        ("Min", b_min, a_min),
        ("Max", b_max, a_max),
        ("Mean", b_mean, a_mean),
        ("Levels", b_levels, a_levels),
    ] {
        println!(
            "  {:<10}{:>10}{:>10}",
            s.label.apply_to(label),
            s.value.apply_to(b),
            s.value.apply_to(a)
        );
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Tonelab Pipeline"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    match &config.reference {
        Some(path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Reference"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Reference"),
            s.disabled.apply_to("none")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Load mode"),
        s.value.apply_to(format!("{:?}", config.color_load))
    );
    println!();

    if config.steps.is_empty() {
        println!("  {}", s.disabled.apply_to("No transform steps"));
    }
    for (i, step) in config.steps.iter().enumerate() {
        println!("  {:>2}. {}", s.label.apply_to(i + 1), s.step.apply_to(step));
    }
    println!();
}
