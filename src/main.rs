use anyhow::Context;
use std::path::Path;
use tracing::info;

use mcharts::*;

const CATALOG_PATH: &str = "Netflix.csv";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = Path::new(CATALOG_PATH);
    let df = data::load_catalog(path)
        .with_context(|| format!("loading catalog from {}", path.display()))?;
    info!(rows = df.height(), "loaded catalog");

    let df = clean::normalize_release_year(df)?;
    let df = clean::drop_unused_columns(df)?;
    let df = label::apply_vote_labels(df)?;
    let df = genres::explode_genres(df)?;
    info!(rows = df.height(), "cleaned, labeled and exploded catalog");

    genre_dist::render(&df, Path::new("genre_column.png"))?;
    label_dist::render(&df, Path::new("movie_popularity.png"))?;
    top_movies::render(&df, Path::new("top_10_movies.png"))?;
    year_hist::render(&df, Path::new("movies_by_year.png"))?;

    Ok(())
}
