//! Segment momentum: how the recent part of a series moves relative to
//! the part before it.

use crate::{MathError, Result};

/// Minimum series length for the thirds-based momentum calculation.
/// Below this there are fewer than 3 observations per segment and the
/// calculation falls back to the relative delta of the last two values.
pub const THIRDS_MIN_LEN: usize = 9;

/// Relative change between the mean of the most recent third of the
/// series and the mean of the third before it.
///
/// For series shorter than [`THIRDS_MIN_LEN`] the segments would hold
/// fewer than 3 observations each, so the value degrades to the relative
/// change between the last two observations. When the reference segment
/// (or observation) is zero the relative change is undefined and the
/// momentum is reported as 0.
pub fn segment_momentum(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(MathError::InsufficientData(
            "Need at least 2 observations for momentum".to_string(),
        ));
    }

    if values.len() < THIRDS_MIN_LEN {
        let last = values[values.len() - 1];
        let reference = values[values.len() - 2];
        return Ok(relative_change(last, reference));
    }

    let segment = values.len() / 3;
    let recent = &values[values.len() - segment..];
    let prior = &values[values.len() - 2 * segment..values.len() - segment];

    let recent_mean = recent.iter().sum::<f64>() / segment as f64;
    let prior_mean = prior.iter().sum::<f64>() / segment as f64;

    Ok(relative_change(recent_mean, prior_mean))
}

fn relative_change(value: f64, reference: f64) -> f64 {
    if reference.abs() < f64::EPSILON {
        return 0.0;
    }
    (value - reference) / reference.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirds_momentum() {
        // 12 observations, last third [112, 114, 116, 118] vs prior third
        // [104, 106, 108, 110]: (115 - 107) / 107
        let values = [
            96.0, 98.0, 100.0, 102.0, 104.0, 106.0, 108.0, 110.0, 112.0, 114.0, 116.0, 118.0,
        ];
        let momentum = segment_momentum(&values).unwrap();
        assert!((momentum - 8.0 / 107.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_point_fallback() {
        let values = [100.0, 102.0, 105.0, 108.0, 112.0, 118.0];
        let momentum = segment_momentum(&values).unwrap();
        assert!((momentum - 6.0 / 112.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series_has_zero_momentum() {
        let values = [50.0; 12];
        assert!(segment_momentum(&values).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_zero_reference_reports_zero() {
        let values = [5.0, 0.0];
        assert!(segment_momentum(&values).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_too_short() {
        assert!(segment_momentum(&[1.0]).is_err());
    }
}
