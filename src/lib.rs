//! Aggregation core of the school-management backend: weighted score
//! averaging, semester/letter-grade bucketing for dashboard charts, and
//! weekly recurring-date generation for class schedules.
//!
//! Everything here is a pure, synchronous function over in-memory records.
//! Persistence, routing, and auth live in the calling services; they hand in
//! fully formed [`model::EnrollmentRecord`] and [`model::ClassScheduleSpec`]
//! values and shape the outputs into response payloads.

pub mod grouping;
pub mod model;
pub mod schedule;
pub mod score;

pub use grouping::{
    countable_averages, grade_distribution, group_by_semester, ChartSlice, SemesterGroup,
};
pub use model::{ClassScheduleSpec, EnrollmentRecord, EnrollmentStatus, ScorePosition, ScoreVector};
pub use schedule::{
    generate_recurring_dates, next_occurrence, occurrences_in_window, validate_week_dates,
    ScheduleError,
};
pub use score::{compute_average, round_half_away_2};
