pub mod dashboard;
pub mod problem_detail;
pub mod problems;

use chrono::NaiveDate;

pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub(crate) fn format_revisit(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %d").to_string(),
        None => "Not set".to_string(),
    }
}

// One block per completion, capped at the length of the interval table
pub(crate) fn progress_bar(count: u32) -> String {
    let slots = crate::schedule::INTERVALS.len();
    let filled = (count as usize).min(slots);
    format!("{}{}", "█".repeat(filled), "░".repeat(slots - filled))
}
