use polars::prelude::*;
use std::path::Path;

/// Columns the pipeline depends on. Extra columns in the input are carried
/// through untouched.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Title",
    "Release_Date",
    "Overview",
    "Popularity",
    "Vote_Average",
    "Original_Language",
    "Genre",
    "Poster_Url",
];

const FLOAT_COLUMNS: [&str; 2] = ["Vote_Average", "Popularity"];
const STRING_COLUMNS: [&str; 3] = ["Title", "Release_Date", "Genre"];

/// Reads the movie catalog CSV into a DataFrame. Unreadable files, malformed
/// encoding and rows that do not parse are all fatal.
pub fn load_catalog(path: &Path) -> PolarsResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    validate_schema(&df)?;
    normalize_dtypes(df)
}

/// Pins the dtypes the pipeline works on. CSV inference types a score column
/// whose values happen to be whole numbers as Int64; the labeler and the
/// popularity ranking read Float64, and the cleaner reads string dates.
pub fn normalize_dtypes(mut df: DataFrame) -> PolarsResult<DataFrame> {
    for name in FLOAT_COLUMNS {
        let column = df.column(name)?.cast(&DataType::Float64)?;
        df.with_column(column)?;
    }
    for name in STRING_COLUMNS {
        let column = df.column(name)?.cast(&DataType::String)?;
        df.with_column(column)?;
    }
    Ok(df)
}

pub fn validate_schema(df: &DataFrame) -> PolarsResult<()> {
    for required in REQUIRED_COLUMNS {
        if df.get_column_index(required).is_none() {
            return Err(PolarsError::SchemaMismatch(
                format!("input catalog is missing required column {required:?}").into(),
            ));
        }
    }
    Ok(())
}
