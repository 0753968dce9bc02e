use polars::prelude::*;

/// Ordinal rating category derived from `Vote_Average`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteLabel {
    Popular,
    AboveAverage,
    Average,
    BelowAverage,
}

impl VoteLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            VoteLabel::Popular => "Popular",
            VoteLabel::AboveAverage => "Above Average",
            VoteLabel::Average => "Average",
            VoteLabel::BelowAverage => "Below Average",
        }
    }
}

/// Maps a vote average to its category. Each band is closed on its lower
/// bound: 7.1 is Popular, 6.5 is Above Average, 5.9 is Average.
pub fn label_rating(score: f64) -> VoteLabel {
    if score >= 7.1 {
        VoteLabel::Popular
    } else if score >= 6.5 {
        VoteLabel::AboveAverage
    } else if score >= 5.9 {
        VoteLabel::Average
    } else {
        VoteLabel::BelowAverage
    }
}

/// Derives `Vote_Label` from `Vote_Average` and inserts it immediately after
/// the source column. Null and NaN scores get a null label.
pub fn apply_vote_labels(mut df: DataFrame) -> PolarsResult<DataFrame> {
    let labels: Vec<Option<&'static str>> = df
        .column("Vote_Average")?
        .f64()?
        .into_iter()
        .map(|score| match score {
            Some(s) if !s.is_nan() => Some(label_rating(s).as_str()),
            _ => None,
        })
        .collect();
    let idx = df
        .get_column_index("Vote_Average")
        .ok_or_else(|| PolarsError::ColumnNotFound("Vote_Average".into()))?;
    df.insert_column(idx + 1, Series::new("Vote_Label".into(), labels))?;
    Ok(df)
}
