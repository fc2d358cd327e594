//! This module implements utility functions without enough context to
//! warrant their own modules.

/// Decodes a floating-point field from solver output. Lenient about the
/// exponent marker: Fortran-built codes sometimes emit `D` or `d` where
/// standard notation has `e`.
pub(crate) fn decode_fortfloat(s: &str) -> Option<f64> {
  if let Ok(x) = s.parse::<f64>() {
    return Some(x);
  }
  if s.contains(['D', 'd']) {
    return s.replace(['D', 'd'], "e").parse::<f64>().ok();
  }
  return None;
}
