//! Workspace analytics aggregation.

use serde::Serialize;

use crate::progress::rounded_percentage;

/// Inclusive progress ranges used by the progress distribution.
pub const PROGRESS_BUCKETS: [(i32, i32); 4] = [(0, 25), (26, 50), (51, 75), (76, 100)];

/// Number of projects whose progress falls in one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBucket {
    pub range: String,
    pub count: i64,
}

/// Count progress values per [`PROGRESS_BUCKETS`] range.
///
/// Out-of-range values are ignored.
pub fn progress_distribution<I>(values: I) -> Vec<ProgressBucket>
where
    I: IntoIterator<Item = i32>,
{
    let mut counts = [0_i64; PROGRESS_BUCKETS.len()];
    for value in values {
        if let Some(idx) = PROGRESS_BUCKETS
            .iter()
            .position(|(min, max)| (*min..=*max).contains(&value))
        {
            counts[idx] += 1;
        }
    }
    PROGRESS_BUCKETS
        .iter()
        .zip(counts)
        .map(|((min, max), count)| ProgressBucket {
            range: format!("{min}-{max}"),
            count,
        })
        .collect()
}

/// Percentage of `part` over `whole`, `0` when `whole` is zero.
pub fn completion_rate(part: i64, whole: i64) -> i32 {
    rounded_percentage(part, whole).unwrap_or(0)
}

/// Mean of the given values rounded to one decimal place, `0.0` when empty.
pub fn average_progress(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i64 = values.iter().map(|v| i64::from(*v)).sum();
    let mean = sum as f64 / values.len() as f64;
    (mean * 10.0).round() / 10.0
}
