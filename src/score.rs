//! Weighted score averaging.
//!
//! An enrollment carries up to four component scores in fixed positions
//! (coursework, lab, midterm, final exam). The average weights whichever
//! components are present and divides by the weight actually covered, so a
//! student with only coursework entered sees that coursework mark, not a
//! quarter of it.

/// Fixed component weights, indexed by [`crate::model::ScorePosition`].
pub const WEIGHTS: [f64; 4] = [0.10, 0.20, 0.30, 0.40];

/// Rounds to 2 decimal places, half away from zero:
/// `floor(100*|x| + 0.5) / 100`, sign restored.
pub fn round_half_away_2(x: f64) -> f64 {
    let rounded = ((100.0 * x.abs()) + 0.5).floor() / 100.0;
    if x < 0.0 {
        -rounded
    } else {
        rounded
    }
}

/// Weighted average of the present components of a score vector.
///
/// Position `i` is present when the slice has an element there and its value
/// is `>= 0`. A value of exactly 0 is present and weighs in as a zero mark;
/// absence is only ever truncation or a negative placeholder. Elements past
/// the fourth position are ignored.
///
/// Returns 0 when nothing is present. Total over any input.
pub fn compute_average(scores: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut denom = 0.0_f64;
    for (value, weight) in scores.iter().take(WEIGHTS.len()).zip(WEIGHTS) {
        if *value >= 0.0 {
            sum += value * weight;
            denom += weight;
        }
    }
    if denom > 0.0 {
        round_half_away_2(sum / denom)
    } else {
        0.0
    }
}
