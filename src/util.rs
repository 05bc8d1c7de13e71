/// Round to two decimal places, halves away from zero.
///
/// Every reported percentage goes through this so the three readers
/// agree on the rounding rule.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
