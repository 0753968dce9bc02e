use crate::chart;
use ahash::{HashMap, HashSet};
use anyhow::Result;
use polars::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// Counts movies per vote label, descending by count. The exploded table
/// repeats a movie once per genre, so each title is counted only on its first
/// occurrence. Rows with a null label are skipped.
pub fn label_counts(df: &DataFrame) -> PolarsResult<Vec<(String, u32)>> {
    let mut seen: HashSet<&str> = HashSet::default();
    let mut counts: HashMap<&str, u32> = HashMap::default();
    for (title, label) in df
        .column("Title")?
        .str()?
        .into_iter()
        .zip(df.column("Vote_Label")?.str()?.into_iter())
    {
        if let Some(title) = title {
            if seen.insert(title)
                && let Some(label) = label
            {
                *counts.entry(label).or_default() += 1;
            }
        }
    }
    let mut rows: Vec<(String, u32)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(rows)
}

pub fn render(df: &DataFrame, path: &Path) -> Result<()> {
    let rows: Vec<(String, f64)> = label_counts(df)?
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .collect();
    if rows.is_empty() {
        warn!("no labeled titles, skipping vote label chart");
        return Ok(());
    }
    chart::vertical_bars(
        path,
        "Movie Distribution by Vote Label",
        "Vote Label",
        "Count",
        &rows,
        |v| format!("{v:.0}"),
    )?;
    info!(labels = rows.len(), path = %path.display(), "wrote vote label distribution chart");
    Ok(())
}

#[cfg(test)]
mod test_label_dist {
    use super::*;
    use crate::genres::explode_genres;
    use crate::label::apply_vote_labels;

    #[test]
    fn counts_each_title_once() -> PolarsResult<()> {
        let df = df!(
            "Title" => ["A", "B", "C"],
            "Vote_Average" => [7.2, 6.0, 5.0],
            "Genre" => ["Action, Comedy", "Drama", "Action"],
        )?;
        let df = explode_genres(apply_vote_labels(df)?)?;
        assert_eq!(df.height(), 4);
        let rows = label_counts(&df)?;
        assert_eq!(
            rows,
            vec![
                ("Average".to_string(), 1),
                ("Below Average".to_string(), 1),
                ("Popular".to_string(), 1),
            ]
        );
        Ok(())
    }

    #[test]
    fn empty_table_skips_chart() -> anyhow::Result<()> {
        let df = df!(
            "Title" => Vec::<&str>::new(),
            "Vote_Label" => Vec::<&str>::new(),
        )?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("labels.png");
        render(&df, &path)?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn null_labels_are_skipped() -> PolarsResult<()> {
        let df = df!(
            "Title" => ["A", "B"],
            "Vote_Average" => [Some(7.2), None],
            "Genre" => ["Action", "Drama"],
        )?;
        let df = explode_genres(apply_vote_labels(df)?)?;
        let rows = label_counts(&df)?;
        assert_eq!(rows, vec![("Popular".to_string(), 1)]);
        Ok(())
    }
}
