//! Report rounding. Halves round to even, so `0.125` becomes `0.12`.

/// Rounds to two decimals, used for every monetary report field.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Rounds to one decimal, used for percentages and hours.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Divides by `denominator`, treating a zero denominator as one.
pub fn ratio_or_neutral(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        numerator
    } else {
        numerator / denominator
    }
}
