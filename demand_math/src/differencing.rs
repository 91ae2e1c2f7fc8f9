//! Series differencing and re-integration for trend removal

use crate::{MathError, Result};

/// Difference a series `order` times.
///
/// Each pass replaces the series with consecutive deltas, shortening it
/// by one. Requires `values.len() > order`.
pub fn difference(values: &[f64], order: usize) -> Result<Vec<f64>> {
    if values.len() <= order {
        return Err(MathError::InsufficientData(format!(
            "Cannot difference {} observations {} times",
            values.len(),
            order
        )));
    }

    let mut current = values.to_vec();
    for _ in 0..order {
        current = current.windows(2).map(|w| w[1] - w[0]).collect();
    }

    Ok(current)
}

/// Undo `order`-fold differencing for a block of forecast values.
///
/// `history` is the original (undifferenced) series the forecasts extend;
/// its tail values at every differencing level seed the reconstruction.
/// Returns the forecasts on the original scale.
pub fn integrate(history: &[f64], forecasts: &[f64], order: usize) -> Result<Vec<f64>> {
    if order == 0 {
        return Ok(forecasts.to_vec());
    }

    if history.len() <= order {
        return Err(MathError::InsufficientData(format!(
            "Need more than {} observations to integrate order {}",
            order, order
        )));
    }

    // Last value of the series at each differencing level 0..order-1
    let mut level_tails = Vec::with_capacity(order);
    let mut current = history.to_vec();
    for _ in 0..order {
        level_tails.push(*current.last().ok_or_else(|| {
            MathError::CalculationError("Differencing produced an empty series".to_string())
        })?);
        current = difference(&current, 1)?;
    }

    let mut out = Vec::with_capacity(forecasts.len());
    for &value in forecasts {
        let mut increment = value;
        for level in (0..order).rev() {
            level_tails[level] += increment;
            increment = level_tails[level];
        }
        out.push(level_tails[0]);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_difference() {
        let diffs = difference(&[1.0, 4.0, 9.0, 16.0], 1).unwrap();
        assert_eq!(diffs, vec![3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_second_difference() {
        let diffs = difference(&[1.0, 4.0, 9.0, 16.0], 2).unwrap();
        assert_eq!(diffs, vec![2.0, 2.0]);
    }

    #[test]
    fn test_difference_too_short() {
        assert!(difference(&[1.0, 2.0], 2).is_err());
    }

    #[test]
    fn test_integrate_inverts_first_difference() {
        let history = [10.0, 12.0, 15.0];
        // Forecast deltas of +2 each
        let restored = integrate(&history, &[2.0, 2.0], 1).unwrap();
        assert_eq!(restored, vec![17.0, 19.0]);
    }

    #[test]
    fn test_integrate_second_order_extends_quadratic() {
        // Squares: second difference is constantly 2, so integrating
        // [2.0, 2.0] after [1, 4, 9, 16] must give [25, 36]
        let history = [1.0, 4.0, 9.0, 16.0];
        let restored = integrate(&history, &[2.0, 2.0], 2).unwrap();
        assert_eq!(restored, vec![25.0, 36.0]);
    }

    #[test]
    fn test_integrate_order_zero_is_identity() {
        let restored = integrate(&[1.0], &[7.0, 8.0], 0).unwrap();
        assert_eq!(restored, vec![7.0, 8.0]);
    }
}
