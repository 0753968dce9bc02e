use crate::chart;
use ahash::HashSet;
use anyhow::Result;
use polars::prelude::*;
use std::path::Path;
use tracing::{info, warn};

pub const TOP_K: usize = 10;

/// Ranks distinct titles by `Popularity`, descending, with ties broken by
/// title so runs are deterministic. Returns at most `k` entries; the exploded
/// table repeats a movie once per genre, so only the first occurrence of a
/// title is considered.
pub fn top_by_popularity(df: &DataFrame, k: usize) -> PolarsResult<Vec<(String, f64)>> {
    let mut seen: HashSet<&str> = HashSet::default();
    let mut ranked: Vec<(&str, f64)> = Vec::new();
    for (title, popularity) in df
        .column("Title")?
        .str()?
        .into_iter()
        .zip(df.column("Popularity")?.f64()?.into_iter())
    {
        if let (Some(title), Some(popularity)) = (title, popularity)
            && seen.insert(title)
        {
            ranked.push((title, popularity));
        }
    }
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(k);
    Ok(ranked
        .into_iter()
        .map(|(title, popularity)| (title.to_string(), popularity))
        .collect())
}

pub fn render(df: &DataFrame, path: &Path) -> Result<()> {
    let rows = top_by_popularity(df, TOP_K)?;
    if rows.is_empty() {
        warn!("no ranked titles, skipping top movies chart");
        return Ok(());
    }
    chart::horizontal_bars(
        path,
        "Top 10 Most Popular Movies",
        "Popularity Score",
        &rows,
        |v| format!("{v:.1}"),
    )?;
    info!(movies = rows.len(), path = %path.display(), "wrote top movies chart");
    Ok(())
}
