use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const URL_PREFIX: &str = "https://leetcode.com/problems/";

/// One tracked problem. The problem name is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub url: String,
    pub tag: String,
    pub count: u32,
    #[serde(alias = "updatedAt")]
    pub updated_datetime: NaiveDateTime,
    #[serde(alias = "revisitDate", default)]
    pub revisit_date: Option<NaiveDate>,
}

impl ProblemRecord {
    /// A fresh, unattempted record.
    pub fn new(name: &str, tag: &str, now: NaiveDateTime) -> Self {
        Self {
            url: problem_url(name),
            tag: tag.to_string(),
            count: 0,
            updated_datetime: now,
            revisit_date: None,
        }
    }

    pub fn is_attempted(&self) -> bool {
        self.revisit_date.is_some()
    }

    pub fn status_label(&self, today: NaiveDate) -> &'static str {
        match self.revisit_date {
            None => "New",
            Some(d) if d <= today => "Due",
            Some(_) => "Scheduled",
        }
    }
}

// "Two Sum II" -> https://leetcode.com/problems/two-sum-ii
pub fn problem_url(name: &str) -> String {
    format!("{}{}", URL_PREFIX, name.to_lowercase().split(' ').collect::<Vec<_>>().join("-"))
}

/// A record paired with its name, for JSON output.
#[derive(Debug, Serialize)]
pub struct ProblemEntry<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub record: &'a ProblemRecord,
}

/// Outcome of looking a problem up by a user-typed name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "names", rename_all = "snake_case")]
pub enum Match {
    /// Exact or normalized hit on a stored name.
    Found(String),
    /// Approximate hits, shortest name first.
    Candidates(Vec<String>),
    NoMatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    pub tag: String,
    pub problems: usize,
    pub attempted: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_problems: usize,
    pub attempted: usize,
    pub unattempted: usize,
    pub due_now: usize,
    pub scheduled: usize,
    pub total_completions: u64,
    pub tags: Vec<TagSummary>,
}

impl Stats {
    pub fn completion_rate(&self) -> f64 {
        if self.total_problems == 0 {
            0.0
        } else {
            (self.attempted as f64 / self.total_problems as f64) * 100.0
        }
    }
}

// JSON output wrapper for CLI responses
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    mod url_tests {
        use super::*;

        #[test]
        fn url_lowercases_and_hyphenates() {
            assert_eq!(
                problem_url("Two Sum II Input Array Is Sorted"),
                "https://leetcode.com/problems/two-sum-ii-input-array-is-sorted"
            );
        }

        #[test]
        fn url_single_word() {
            assert_eq!(problem_url("3Sum"), "https://leetcode.com/problems/3sum");
        }

        #[test]
        fn url_is_deterministic() {
            assert_eq!(problem_url("LRU Cache"), problem_url("LRU Cache"));
        }
    }

    mod record_tests {
        use super::*;

        #[test]
        fn new_record_is_unattempted() {
            let r = ProblemRecord::new("Two Sum", "Arrays & Hashing", now());
            assert_eq!(r.url, "https://leetcode.com/problems/two-sum");
            assert_eq!(r.tag, "Arrays & Hashing");
            assert_eq!(r.count, 0);
            assert_eq!(r.updated_datetime, now());
            assert!(r.revisit_date.is_none());
            assert!(!r.is_attempted());
        }

        #[test]
        fn status_labels() {
            let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
            let mut r = ProblemRecord::new("Two Sum", "t", now());
            assert_eq!(r.status_label(today), "New");

            r.revisit_date = Some(today);
            assert_eq!(r.status_label(today), "Due");

            r.revisit_date = NaiveDate::from_ymd_opt(2024, 1, 6);
            assert_eq!(r.status_label(today), "Scheduled");
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_with_storage_field_names() {
            let r = ProblemRecord::new("Two Sum", "Arrays", now());
            let v = serde_json::to_value(&r).unwrap();
            assert_eq!(v["url"], "https://leetcode.com/problems/two-sum");
            assert_eq!(v["tag"], "Arrays");
            assert_eq!(v["count"], 0);
            assert_eq!(v["updated_datetime"], "2024-01-05T09:30:00");
            assert!(v["revisit_date"].is_null());
        }

        #[test]
        fn reads_fractional_second_datetime() {
            let raw = r#"{
                "url": "https://leetcode.com/problems/two-sum",
                "updated_datetime": "2024-01-05T09:30:00.123456",
                "revisit_date": "2024-01-06",
                "count": 1,
                "tag": "Arrays & Hashing"
            }"#;
            let r: ProblemRecord = serde_json::from_str(raw).unwrap();
            assert_eq!(r.count, 1);
            assert_eq!(r.revisit_date, NaiveDate::from_ymd_opt(2024, 1, 6));
        }

        #[test]
        fn accepts_camel_case_aliases() {
            let raw = r#"{
                "url": "u",
                "tag": "t",
                "count": 2,
                "updatedAt": "2024-01-05T09:30:00",
                "revisitDate": null
            }"#;
            let r: ProblemRecord = serde_json::from_str(raw).unwrap();
            assert_eq!(r.count, 2);
            assert!(r.revisit_date.is_none());
        }

        #[test]
        fn missing_revisit_date_defaults_to_none() {
            let raw = r#"{"url": "u", "tag": "t", "count": 0, "updated_datetime": "2024-01-05T09:30:00"}"#;
            let r: ProblemRecord = serde_json::from_str(raw).unwrap();
            assert!(r.revisit_date.is_none());
        }

        #[test]
        fn negative_count_is_rejected() {
            let raw = r#"{"url": "u", "tag": "t", "count": -1, "updated_datetime": "2024-01-05T09:30:00"}"#;
            assert!(serde_json::from_str::<ProblemRecord>(raw).is_err());
        }

        #[test]
        fn match_serializes_tagged() {
            let v = serde_json::to_value(Match::Found("Two Sum".into())).unwrap();
            assert_eq!(v["kind"], "found");
            assert_eq!(v["names"], "Two Sum");

            let v = serde_json::to_value(Match::NoMatch).unwrap();
            assert_eq!(v["kind"], "no_match");
        }
    }

    mod stats_tests {
        use super::*;

        #[test]
        fn completion_rate_empty() {
            assert_eq!(Stats::default().completion_rate(), 0.0);
        }

        #[test]
        fn completion_rate_partial() {
            let s = Stats {
                total_problems: 4,
                attempted: 1,
                ..Default::default()
            };
            assert!((s.completion_rate() - 25.0).abs() < 0.001);
        }
    }

    mod json_output_tests {
        use super::*;

        #[test]
        fn ok_wraps_data() {
            let output = JsonOutput::ok(3);
            assert!(output.success);
            assert_eq!(output.data, Some(3));
            assert!(output.error.is_none());
        }

        #[test]
        fn err_carries_message() {
            let output = JsonOutput::<()>::err("Problem not found");
            assert!(!output.success);
            assert!(output.data.is_none());
            assert_eq!(output.error, Some("Problem not found".to_string()));
        }

        #[test]
        fn serializes_shape() {
            let json = serde_json::to_string(&JsonOutput::ok("x")).unwrap();
            assert_eq!(json, r#"{"success":true,"data":"x","error":null}"#);
        }
    }
}
