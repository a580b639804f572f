use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "spotlyte", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate frames over a progress range and print them as JSON.
    Sample(SampleArgs),
    /// Print the reference configuration as JSON.
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Device {
    Compact,
    Standard,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Choreography config JSON (defaults to the reference choreography).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Force a device class instead of deriving it from the width.
    #[arg(long, value_enum)]
    device: Option<Device>,

    /// First progress value.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last progress value (inclusive).
    #[arg(long, default_value_t = 1.05)]
    to: f64,

    /// Number of intervals between `from` and `to`.
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// Evaluate frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Config => cmd_config(),
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => spotlyte::ChoreoConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => spotlyte::ChoreoConfig::default(),
    };

    let size = spotlyte::ViewportSize::new(args.width, args.height)?;
    let device = match args.device {
        Some(Device::Compact) => spotlyte::DeviceClass::Compact,
        Some(Device::Standard) => spotlyte::DeviceClass::Standard,
        None => spotlyte::DeviceClass::from_width(size.width, cfg.compact_breakpoint),
    };

    let mut segmenter = spotlyte::WhitespaceSegmenter::new();
    let word_count =
        spotlyte::TextSegmenter::segment(&mut segmenter, &cfg.headline).len();
    let choreo = spotlyte::Choreography::new(&cfg, size, device, word_count)?;

    let progresses = spotlyte::progress_range(args.from, args.to, args.steps)?;
    let frames = spotlyte::sample_frames(
        &choreo,
        &progresses,
        spotlyte::SampleOpts {
            parallel: args.parallel,
            threads: args.threads,
        },
    )?;

    let json = serde_json::to_string_pretty(&frames).context("serialize frames")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {} frames to {}", frames.len(), out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&spotlyte::ChoreoConfig::default())
        .context("serialize config")?;
    println!("{json}");
    Ok(())
}
