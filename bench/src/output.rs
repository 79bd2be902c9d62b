//! Recording samples: CSV, and an optional SVG plot

use std::fs::File;
use std::io;
use std::ops::Range;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use plotters::prelude::*;

/// One timed build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub num_values: usize,
    pub time: Duration,
}

/// Appends samples to a CSV file, flushing after each one
///
/// So that an interrupted run still leaves usable data.
pub struct SampleWriter<W: io::Write> {
    writer: csv::Writer<W>,
}

impl SampleWriter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let writer = csv::Writer::from_path(path)
            .with_context(|| format!("create {}", path.display()))?;
        SampleWriter::new(writer)
    }
}

impl<W: io::Write> SampleWriter<W> {
    fn new(mut writer: csv::Writer<W>) -> Result<Self> {
        writer.write_record(["num_values", "seconds"])?;
        writer.flush()?;
        Ok(SampleWriter { writer })
    }

    pub fn write(&mut self, sample: &Sample) -> Result<()> {
        self.writer
            .serialize((sample.num_values, sample.time.as_secs_f64()))?;
        self.writer.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("flush csv: {}", e.error()))
    }
}

/// The ranges covered by `data`, `(x, y)`
///
/// Empty data gives empty ranges.
pub fn bounds(
    data: impl Iterator<Item = (f64, f64)>,
) -> (Range<f64>, Range<f64>) {
    let ((x_min, x_max), (y_min, y_max)) = data.fold(
        (
            (f64::INFINITY, f64::NEG_INFINITY),
            (f64::INFINITY, f64::NEG_INFINITY),
        ),
        |((x_min, x_max), (y_min, y_max)), (x, y)| {
            ((x_min.min(x), x_max.max(x)), (y_min.min(y), y_max.max(y)))
        },
    );
    if x_min > x_max {
        return (0.0..0.0, 0.0..0.0);
    }
    (x_min..x_max, y_min..y_max)
}

/// Draw the samples as a scatter plot, in SVG
pub fn plot(path: &Path, samples: &[Sample]) -> Result<()> {
    let data: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.num_values as f64, s.time.as_secs_f64()))
        .collect();

    let root = SVGBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_bounds, y_bounds) = bounds(data.iter().copied());
    let mut chart = ChartBuilder::on(&root)
        .caption("declenum compile time", ("sans-serif", 40).into_font())
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_bounds, y_bounds)?;

    chart
        .configure_mesh()
        .x_desc("values per enum")
        .y_desc("build time (s)")
        .draw()?;

    chart.draw_series(
        data.iter()
            .map(|(x, y)| Circle::new((*x, *y), 3, RED.filled())),
    )?;

    root.present()
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
