/// Fractions of the maximum value that receive a horizontal grid line.
pub const Y_TICK_RATIOS: [f64; 6] = [1.0, 0.8, 0.6, 0.4, 0.2, 0.0];

/// Integer y-axis tick values, descending from the maximum to zero.
///
/// A missing or non-positive maximum yields the single tick `0`.
#[must_use]
pub fn y_ticks(max_value: Option<f64>) -> Vec<f64> {
    match max_value {
        Some(max) if max.is_finite() && max > 0.0 => Y_TICK_RATIOS
            .iter()
            .map(|ratio| (max * ratio).round())
            .collect(),
        _ => vec![0.0],
    }
}
