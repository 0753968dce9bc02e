use anyhow::Result;
use plotters::prelude::*;
use polars::prelude::*;
use std::path::Path;
use tracing::{info, warn};

pub const YEAR_BINS: usize = 40;

/// Equal-width bucketing of the non-null release years.
#[derive(Debug, PartialEq)]
pub struct YearHistogram {
    pub min_year: i32,
    pub max_year: i32,
    pub counts: Vec<u32>,
}

impl YearHistogram {
    pub fn bin_width(&self) -> f64 {
        if self.max_year > self.min_year {
            (self.max_year - self.min_year) as f64 / self.counts.len() as f64
        } else {
            1.0
        }
    }
}

/// Buckets the cleaned `Release_Date` years into `bins` equal-width bins.
/// Returns None when every year is null.
pub fn year_histogram(df: &DataFrame, bins: usize) -> PolarsResult<Option<YearHistogram>> {
    let years: Vec<i32> = df
        .column("Release_Date")?
        .i32()?
        .into_iter()
        .flatten()
        .collect();
    let (Some(&min_year), Some(&max_year)) = (years.iter().min(), years.iter().max()) else {
        return Ok(None);
    };

    let hist = {
        let mut hist = YearHistogram {
            min_year,
            max_year,
            counts: vec![0; bins],
        };
        let width = hist.bin_width();
        for year in years {
            let idx = (((year - min_year) as f64 / width) as usize).min(bins - 1);
            hist.counts[idx] += 1;
        }
        hist
    };
    Ok(Some(hist))
}

pub fn render(df: &DataFrame, path: &Path) -> Result<()> {
    let Some(hist) = year_histogram(df, YEAR_BINS)? else {
        warn!("no parseable release years, skipping histogram");
        return Ok(());
    };

    let root = BitMapBackend::new(path, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let width = hist.bin_width();
    let x_min = hist.min_year as f64;
    let x_max = x_min + width * hist.counts.len() as f64;
    let y_max = hist.counts.iter().copied().max().unwrap_or(1).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of Movies by Release Year", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0u32..y_max + y_max / 10 + 1)?;
    chart
        .configure_mesh()
        .x_desc("Release Year")
        .y_desc("Number of Movies")
        .draw()?;

    chart.draw_series(hist.counts.iter().enumerate().map(|(i, &count)| {
        let x0 = x_min + width * i as f64;
        Rectangle::new([(x0, 0), (x0 + width, count)], RGBColor(135, 206, 235).filled())
    }))?;

    root.present()?;
    info!(
        bins = hist.counts.len(),
        years = format!("{}..={}", hist.min_year, hist.max_year),
        path = %path.display(),
        "wrote release year histogram"
    );
    Ok(())
}
