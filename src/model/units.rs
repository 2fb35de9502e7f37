//! Line height is stored as a multiplier and shown to people as a percentage.

const PERCENT: f64 = 100.0;

/// `1.2` becomes `120.0`. Snaps to the nearest whole percentage only when
/// that percentage converts back to exactly `multiplier`.
pub fn line_height_to_percentage(multiplier: f64) -> f64 {
    let percentage = multiplier * PERCENT;
    let whole = percentage.round();
    if line_height_from_percentage(whole) == multiplier {
        whole
    } else {
        percentage
    }
}

/// `120.0` becomes `1.2`.
pub fn line_height_from_percentage(percentage: f64) -> f64 {
    percentage / PERCENT
}
