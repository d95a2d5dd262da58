use std::path::PathBuf;

use clap::Parser;
use siglab_cli::config::LabConfig;
use siglab_cli::export::{
    write_probability_csv, write_samples_csv, write_summary_json, RunSummary,
};
use siglab_cli::pipeline::{run, Stage};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Synthetic signal pipeline: generate, combine, histogram, entropy"
)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for CSV tables and the run summary
    #[arg(long, default_value = "output-siglab")]
    output: PathBuf,

    /// Stage whose histogram and entropy are reported
    #[arg(long, default_value = "sum")]
    stage: Stage,

    /// Number of waveform samples (also sizes the noise unless --noise-count is given)
    #[arg(long)]
    count: Option<usize>,

    /// Number of noise samples
    #[arg(long)]
    noise_count: Option<usize>,

    /// Spacing between consecutive sample points
    #[arg(long)]
    step: Option<f64>,

    /// Scale of the waveform's Gaussian envelope
    #[arg(long)]
    amplitude: Option<f64>,

    /// Standard deviation of the envelope
    #[arg(long)]
    spread: Option<f64>,

    /// Center of the envelope
    #[arg(long)]
    location: Option<f64>,

    /// Mean of the noise distribution
    #[arg(long)]
    mean: Option<f64>,

    /// Standard deviation of the noise distribution
    #[arg(long)]
    stddev: Option<f64>,

    /// Lower acceptance bound for noise draws
    #[arg(long, requires = "high_bound")]
    low_bound: Option<f64>,

    /// Upper acceptance bound for noise draws
    #[arg(long, requires = "low_bound")]
    high_bound: Option<f64>,

    /// Nominal histogram bin count
    #[arg(long)]
    bins: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => LabConfig::load(path)?,
        None => LabConfig::default(),
    };

    if let Some(v) = cli.count {
        cfg.signal_count = v;
        cfg.noise_count = v;
    }
    if let Some(v) = cli.noise_count {
        cfg.noise_count = v;
    }
    if let Some(v) = cli.step {
        cfg.signal_step = v;
    }
    if let Some(v) = cli.amplitude {
        cfg.signal_amplitude = v;
    }
    if let Some(v) = cli.spread {
        cfg.signal_spread = v;
    }
    if let Some(v) = cli.location {
        cfg.signal_location = v;
    }
    if let Some(v) = cli.mean {
        cfg.noise_mean = v;
    }
    if let Some(v) = cli.stddev {
        cfg.noise_stddev = v;
    }
    if let (Some(low), Some(high)) = (cli.low_bound, cli.high_bound) {
        cfg.noise_bounds = Some((low, high));
    }
    if let Some(v) = cli.bins {
        cfg.bins = v;
    }
    if let Some(v) = cli.seed {
        cfg.seed = v;
    }

    let lab = run(&cfg)?;

    for stage in Stage::ALL {
        let path = cli.output.join(format!("{}.csv", stage));
        write_samples_csv(&path, lab.stage(stage))?;
    }

    let histogram = lab.histogram(cli.stage, cfg.bins)?;
    let probability_path = cli.output.join(format!("{}_probability.csv", cli.stage));
    write_probability_csv(&probability_path, &histogram)?;

    let summary = RunSummary {
        config: cfg,
        stage: cli.stage.to_string(),
        bins_emitted: histogram.len(),
        bin_width: histogram.bin_width(),
        entropy_bits: histogram.entropy(),
    };
    let summary_path = cli.output.join("summary.json");
    write_summary_json(&summary_path, &summary)?;

    println!(
        "Run complete. Samples: {} signal | {} noise | {} sum | {} convolution",
        lab.signal.len(),
        lab.noise.len(),
        lab.sum.len(),
        lab.convolution.len()
    );
    println!(
        "Stage {}: {:.6} bits of entropy over {} bins",
        cli.stage, summary.entropy_bits, summary.bins_emitted
    );
    println!("Tables: {}", cli.output.display());
    println!("Summary: {}", summary_path.display());

    Ok(())
}
