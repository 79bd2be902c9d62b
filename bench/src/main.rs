//! Compile-time benchmark for declenum
//!
//! Measures how the time to build `declenum-harness`
//! (ten enums, each with N values, plus their compile-time assertions)
//! grows with N.
//!
//! Usage:
//!   cargo run -p declenum-bench -- --samples 64 --time-per-n 5 --plot bench.svg

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

mod logging;
mod output;
mod runner;
mod values;

use output::{Sample, SampleWriter};
use runner::Harness;

#[derive(Parser, Debug)]
#[command(name = "declenum-bench")]
#[command(about = "Time declenum builds against the number of values", long_about = None)]
struct Args {
    /// Number of different enum sizes to measure
    #[arg(long, default_value_t = 256)]
    samples: usize,

    /// Enum sizes are multiples of this
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
    )]
    step: usize,

    /// Seconds to spend rebuilding at each size
    #[arg(long, default_value_t = 10.0)]
    time_per_n: f64,

    /// CSV output file
    #[arg(long, default_value = "bench-data.csv")]
    output: PathBuf,

    /// Also draw the samples, as SVG, to this file
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Manifest of the declenum workspace
    #[arg(long, default_value = "Cargo.toml")]
    manifest_path: PathBuf,

    /// Give every value but the first an explicit discriminant
    #[arg(long)]
    explicit_values: bool,

    /// Cargo to run (default: $CARGO, or `cargo`)
    #[arg(long)]
    cargo: Option<OsString>,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = Args::parse();

    let cargo = args
        .cargo
        .clone()
        .or_else(|| std::env::var_os("CARGO"))
        .unwrap_or_else(|| "cargo".into());
    let harness = Harness::new(cargo, args.manifest_path.clone())?;
    let time_per_n = Duration::try_from_secs_f64(args.time_per_n)
        .context("bad --time-per-n")?;

    let mut writer = SampleWriter::create(&args.output)?;
    let samples = run(&args, &harness, time_per_n, &mut writer)?;
    info!(
        samples = samples.len(),
        output = %args.output.display(),
        "benchmark complete"
    );

    if let Some(plot) = &args.plot {
        output::plot(plot, &samples)?;
        info!(plot = %plot.display(), "plot written");
    }
    Ok(())
}

fn run(
    args: &Args,
    harness: &Harness,
    time_per_n: Duration,
    writer: &mut SampleWriter<std::fs::File>,
) -> Result<Vec<Sample>> {
    let t0 = Instant::now();
    let planned = time_per_n.mul_f64(args.samples as f64);

    let bar = ProgressBar::new(1000);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(concat!(
                "Timing declenum builds... {spinner}\n",
                "{msg}\n",
                "Elapsed / Remaining: {elapsed_precise} / {eta_precise}\n",
                "{wide_bar}"
            ))
            .context("progress bar template")?,
    );

    let mut samples = vec![];
    for num_values in values::sizes(args.samples, args.step) {
        let test_values = values::test_values(num_values, args.explicit_values);
        info!(num_values, "timing");

        let builds = runner::repeat_timed(|| {
            harness.build_once(num_values, &test_values)
        });
        for (time, result) in runner::take_for(time_per_n, builds) {
            result?;
            let sample = Sample { num_values, time };
            writer.write(&sample)?;
            samples.push(sample);

            let portion = t0.elapsed().as_secs_f64() / planned.as_secs_f64();
            bar.set_position((portion.min(1.0) * 1000.0) as u64);
            bar.set_message(format!(
                "Timing enums with {} values (most recent time: {:?})",
                num_values, time
            ));
        }
    }
    bar.finish();

    Ok(samples)
}
