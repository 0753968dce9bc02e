use polars::prelude::*;

/// Splits the comma-separated `Genre` strings and explodes the table to one
/// row per (movie, genre), leaving every other field untouched. The exploded
/// column is cast to Categorical since the genre domain is small and fixed.
/// A row with a single or empty genre string still yields exactly one row.
pub fn explode_genres(df: DataFrame) -> PolarsResult<DataFrame> {
    let mut df = df
        .lazy()
        .with_column(col("Genre").str().split(lit(", ")))
        .collect()?
        .explode(["Genre"])?;
    let genre = df
        .column("Genre")?
        .cast(&DataType::Categorical(None, Default::default()))?;
    df.with_column(genre)?;
    Ok(df)
}

#[cfg(test)]
mod test_genres {
    use super::*;
    use ahash::HashMap;

    #[test]
    fn one_row_per_genre() -> PolarsResult<()> {
        let df = df!(
            "Title" => ["A", "B", "C"],
            "Genre" => ["Action, Comedy", "Drama", "Action"],
            "Popularity" => [3.0, 2.0, 1.0],
        )?;
        let df = explode_genres(df)?;
        assert_eq!(df.height(), 4);
        let titles: Vec<Option<&str>> = df.column("Title")?.str()?.into_iter().collect();
        assert_eq!(titles, vec![Some("A"), Some("A"), Some("B"), Some("C")]);
        Ok(())
    }

    #[test]
    fn split_explode_round_trips() -> PolarsResult<()> {
        let df = df!(
            "Title" => ["A", "B", "C"],
            "Genre" => ["Action, Comedy, Family", "Drama", "Action, Drama"],
        )?;
        let exploded = explode_genres(df)?;

        let mut regrouped: HashMap<&str, Vec<String>> = HashMap::default();
        for (title, genre) in exploded
            .column("Title")?
            .str()?
            .into_iter()
            .zip(exploded.column("Genre")?.categorical()?.iter_str())
        {
            if let (Some(title), Some(genre)) = (title, genre) {
                regrouped.entry(title).or_default().push(genre.to_string());
            }
        }
        assert_eq!(regrouped["A"].join(", "), "Action, Comedy, Family");
        assert_eq!(regrouped["B"].join(", "), "Drama");
        assert_eq!(regrouped["C"].join(", "), "Action, Drama");
        Ok(())
    }

    #[test]
    fn empty_genre_keeps_its_row() -> PolarsResult<()> {
        let df = df!(
            "Title" => ["A"],
            "Genre" => [""],
        )?;
        let df = explode_genres(df)?;
        assert_eq!(df.height(), 1);
        Ok(())
    }
}
