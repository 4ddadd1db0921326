use chrono::{Duration, NaiveDate};

// Spaced repetition intervals (in days), indexed by completion count
pub const INTERVALS: [i64; 7] = [1, 3, 7, 14, 30, 60, 90];

/// Interval in days for a problem that has been completed `count` times.
/// Counts past the end of the table stay at the longest interval.
pub fn interval_for(count: u32) -> i64 {
    INTERVALS
        .get(count as usize)
        .copied()
        .unwrap_or(INTERVALS[INTERVALS.len() - 1])
}

/// Next revisit date for a problem completed `count` times before today's completion.
pub fn next_revisit_date(count: u32, today: NaiveDate) -> NaiveDate {
    today + Duration::days(interval_for(count))
}

/// A problem is due on its scheduled day and every day after.
/// Unattempted problems (no date) are never due.
pub fn is_due(revisit_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    match revisit_date {
        Some(date) => date <= today,
        None => false,
    }
}
