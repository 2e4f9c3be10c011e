use num_traits::ToPrimitive;

use crate::{Result, WintersError};

/// Convert a slice of numeric observations to `Vec<f64>`.
///
/// Returns `NonNumeric` if any value cannot be represented as a finite f64.
pub fn to_f64s<T: ToPrimitive>(values: &[T]) -> Result<Vec<f64>> {
    let mut result = Vec::with_capacity(values.len());
    for (index, v) in values.iter().enumerate() {
        match v.to_f64() {
            Some(f) if f.is_finite() => result.push(f),
            _ => return Err(WintersError::NonNumeric { index }),
        }
    }
    Ok(result)
}
