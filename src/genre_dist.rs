use crate::chart;
use ahash::HashMap;
use anyhow::Result;
use polars::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// Counts rows per genre over the exploded table, descending by count with
/// ties broken by genre name.
pub fn genre_counts(df: &DataFrame) -> PolarsResult<Vec<(String, u32)>> {
    let mut counts: HashMap<String, u32> = HashMap::default();
    for genre in df.column("Genre")?.categorical()?.iter_str().flatten() {
        *counts.entry(genre.to_string()).or_default() += 1;
    }
    let mut rows: Vec<(String, u32)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(rows)
}

pub fn render(df: &DataFrame, path: &Path) -> Result<()> {
    let rows: Vec<(String, f64)> = genre_counts(df)?
        .into_iter()
        .map(|(genre, count)| (genre, count as f64))
        .collect();
    if rows.is_empty() {
        warn!("no genre rows, skipping genre distribution chart");
        return Ok(());
    }
    chart::horizontal_bars(path, "Genre Column Distribution", "Count", &rows, |v| {
        format!("{v:.0}")
    })?;
    info!(genres = rows.len(), path = %path.display(), "wrote genre distribution chart");
    Ok(())
}
