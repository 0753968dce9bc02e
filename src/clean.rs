use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

// Layouts seen in catalog exports; anything else becomes a null year.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Columns that add nothing to the analysis and are pruned right after loading.
pub const UNUSED_COLUMNS: [&str; 3] = ["Overview", "Original_Language", "Poster_Url"];

/// Replaces the `Release_Date` date strings with just the year as Int32.
/// Values that do not parse as a calendar date become null.
pub fn normalize_release_year(mut df: DataFrame) -> PolarsResult<DataFrame> {
    let years: Vec<Option<i32>> = df
        .column("Release_Date")?
        .str()?
        .into_iter()
        .map(|date| date.and_then(parse_release_date).map(|d| d.year()))
        .collect();
    df.replace("Release_Date", Series::new("Release_Date".into(), years))?;
    Ok(df)
}

fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Drops the unused columns. Dropping a column that is already absent is an
/// error: the pruning runs once on freshly loaded data, so an absent column
/// means the input schema is wrong.
pub fn drop_unused_columns(df: DataFrame) -> PolarsResult<DataFrame> {
    let mut df = df;
    for column in UNUSED_COLUMNS {
        df = df.drop(column)?;
    }
    Ok(df)
}
