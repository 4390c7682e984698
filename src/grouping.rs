//! Semester grouping and letter-grade distribution bucketing for dashboard
//! charts.

use serde::Serialize;
use std::collections::HashMap;

use crate::model::EnrollmentRecord;
use crate::score::round_half_away_2;

/// Sentinel label for an empty distribution on record-less dashboards.
pub const NO_DATA: &str = "No Data";
/// Sentinel label used by the teacher/class views instead of [`NO_DATA`].
pub const NO_GRADES: &str = "No Grades";

/// Letter buckets in emission order, each with its upper bound on the 0-10
/// scale. The last bucket has no bound: the classification chain ends in A.
const GRADE_BUCKETS: [(&str, f64); 4] = [("F", 5.0), ("D", 6.0), ("C", 7.0), ("B", 8.0)];

/// One slice of a pie/bar chart payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    pub label: String,
    /// Percentage, rounded to 2 decimals.
    pub value: f64,
}

/// Records grouped under one semester label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterGroup {
    pub semester: String,
    /// Credit hours summed over enrolled/completed members only.
    pub credit_hours: f64,
    pub records: Vec<EnrollmentRecord>,
}

/// Groups records by semester label, preserving the order in which each label
/// first appears. Dropped enrollments stay in their group but are excluded
/// from the credit-hour sum.
pub fn group_by_semester(records: &[EnrollmentRecord]) -> Vec<SemesterGroup> {
    let mut groups: Vec<SemesterGroup> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for record in records {
        let idx = match index_by_label.get(&record.semester) {
            Some(i) => *i,
            None => {
                index_by_label.insert(record.semester.clone(), groups.len());
                groups.push(SemesterGroup {
                    semester: record.semester.clone(),
                    credit_hours: 0.0,
                    records: Vec::new(),
                });
                groups.len() - 1
            }
        };
        if record.status.counts_for_aggregation() {
            groups[idx].credit_hours += record.credit_hours;
        }
        groups[idx].records.push(record.clone());
    }

    groups
}

/// The caller-side filter feeding [`grade_distribution`]: averages of
/// enrolled/completed records whose cached average is strictly positive.
pub fn countable_averages(records: &[EnrollmentRecord]) -> Vec<f64> {
    records
        .iter()
        .filter(|r| r.status.counts_for_aggregation() && r.scores.average() > 0.0)
        .map(|r| r.scores.average())
        .collect()
}

/// Classifies averages into letter buckets (F `[0,5)`, D `[5,6)`, C `[6,7)`,
/// B `[7,8)`, A from 8 up) and returns percentage slices in fixed F-to-A
/// order, omitting empty buckets.
///
/// Percentages are rounded independently and may not sum to exactly 100.
/// An empty input yields a single 100% slice carrying `empty_label`
/// ([`NO_DATA`] or [`NO_GRADES`] depending on the dashboard).
pub fn grade_distribution(averages: &[f64], empty_label: &str) -> Vec<ChartSlice> {
    if averages.is_empty() {
        return vec![ChartSlice {
            label: empty_label.to_string(),
            value: 100.0,
        }];
    }

    let mut counts = [0_usize; 5];
    for avg in averages {
        let bucket = GRADE_BUCKETS
            .iter()
            .position(|(_, upper)| *avg < *upper)
            .unwrap_or(GRADE_BUCKETS.len());
        counts[bucket] += 1;
    }

    let total = averages.len() as f64;
    let labels = ["F", "D", "C", "B", "A"];
    labels
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| ChartSlice {
            label: (*label).to_string(),
            value: round_half_away_2(count as f64 / total * 100.0),
        })
        .collect()
}
