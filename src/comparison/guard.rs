//! Division guard for ratio metrics

use log::warn;

/// `numerator / denominator`, or `None` (with a warning) if the divisor is
/// zero or the quotient is not finite
pub fn ratio(numerator: f64, denominator: f64, metric: &str) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        warn!("division guard: {metric} has divisor {denominator}, reporting N/A");
        return None;
    }
    let value = numerator / denominator;
    if value.is_finite() {
        Some(value)
    } else {
        warn!("division guard: {metric} produced {value}, reporting N/A");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(10.0, 4.0, "test"), Some(2.5));
        assert_eq!(ratio(10.0, 0.0, "test"), None);
        assert_eq!(ratio(10.0, -0.0, "test"), None);
        assert_eq!(ratio(f64::NAN, 1.0, "test"), None);
        assert_eq!(ratio(1.0, f64::INFINITY, "test"), None);
    }
}
