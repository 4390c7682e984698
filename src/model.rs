//! Data model handed in by the persistence layer. Everything here is
//! read-only to the aggregation core except the cached average inside
//! [`ScoreVector`], which this crate owns.

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::score::{compute_average, WEIGHTS};

/// Fixed slot of a component score inside a [`ScoreVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorePosition {
    Coursework,
    Lab,
    Midterm,
    FinalExam,
}

impl ScorePosition {
    pub fn index(self) -> usize {
        match self {
            ScorePosition::Coursework => 0,
            ScorePosition::Lab => 1,
            ScorePosition::Midterm => 2,
            ScorePosition::FinalExam => 3,
        }
    }

    pub fn weight(self) -> f64 {
        WEIGHTS[self.index()]
    }
}

/// Fixed-position score array: up to four component scores plus a derived,
/// cached average in the fifth slot.
///
/// The average is recomputed on every [`set`](ScoreVector::set); nothing else
/// writes it. Serializes as the raw array form the original records use,
/// `[coursework, lab, midterm, final_exam, average]`, truncated to the
/// components actually stored (the average is appended only when at least one
/// component exists).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreVector {
    components: Vec<f64>,
    average: f64,
}

impl ScoreVector {
    /// Builds a vector from up to four component scores; extra elements are
    /// dropped. The cached average is computed immediately.
    pub fn from_components(components: &[f64]) -> Self {
        let components: Vec<f64> = components.iter().copied().take(WEIGHTS.len()).collect();
        let average = compute_average(&components);
        Self {
            components,
            average,
        }
    }

    /// The stored component scores (no cached average), length 0..=4.
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// The cached weighted average.
    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Writes one component and recomputes the cached average. Intervening
    /// slots that were never scored are filled with the `-1` placeholder the
    /// weighting rule treats as absent.
    pub fn set(&mut self, position: ScorePosition, value: f64) {
        let idx = position.index();
        while self.components.len() <= idx {
            self.components.push(-1.0);
        }
        self.components[idx] = value;
        self.average = compute_average(&self.components);
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(!self.components.is_empty());
        let mut seq = serializer.serialize_seq(Some(self.components.len() + extra))?;
        for v in &self.components {
            seq.serialize_element(v)?;
        }
        if extra == 1 {
            seq.serialize_element(&self.average)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ScoreVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VecVisitor;

        impl<'de> Visitor<'de> for VecVisitor {
            type Value = ScoreVector;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a score array of up to 5 numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut raw: Vec<f64> = Vec::with_capacity(5);
                while let Some(v) = seq.next_element::<f64>()? {
                    raw.push(v);
                }
                // A full 5-element row carries a stale-able cached average in
                // the last slot; recompute from the components either way.
                Ok(ScoreVector::from_components(
                    &raw[..raw.len().min(WEIGHTS.len())],
                ))
            }
        }

        deserializer.deserialize_seq(VecVisitor)
    }
}

/// Enrollment lifecycle state as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Enrolled,
    Dropped,
    Completed,
}

impl EnrollmentStatus {
    /// Whether this enrollment contributes to GPA and credit-hour
    /// aggregations. Dropped classes do not.
    pub fn counts_for_aggregation(self) -> bool {
        matches!(self, EnrollmentStatus::Enrolled | EnrollmentStatus::Completed)
    }
}

/// One student-class enrollment, already joined and authorization-filtered by
/// the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    pub student_id: String,
    pub class_id: String,
    /// Opaque grouping key, e.g. "Fall 2024".
    pub semester: String,
    pub credit_hours: f64,
    pub status: EnrollmentStatus,
    pub scores: ScoreVector,
}

/// A class's weekly recurrence descriptor. Dates are inclusive `YYYY-MM-DD`
/// strings; the times are display-only and never enter date math.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassScheduleSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Weekday name, e.g. "Monday".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}
