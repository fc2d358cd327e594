//! Contains the error type for tensor extraction. Every variant is terminal:
//! the moduli block either parses whole or the run fails, there is no
//! fallback strategy and nothing to retry.

use std::error::Error;
use std::fmt::Display;
use std::io;

use crate::elastic::VOIGT_DIM;
use crate::parser::MODULI_MARKER;

/// The kinds of failure when extracting the elastic tensor from an OUTCAR.
#[derive(Debug)]
pub enum ParseError {
  /// The file has no moduli marker line at all -- this output does not
  /// contain an elastic tensor report.
  MarkerNotFound,
  /// The marker was found but the file ended before six data rows did.
  TruncatedBlock {
    /// How many data rows we did get.
    got: usize
  },
  /// A data row had too few whitespace-separated fields.
  ShortRow {
    /// The 1-based line number of the offending row.
    line: usize,
    /// How many fields it had.
    found: usize
  },
  /// A field that should have been numeric failed to decode.
  BadNumber {
    /// The 1-based line number of the offending row.
    line: usize,
    /// The field text as found.
    field: String
  },
  /// An I/O error while reading the file.
  Io(io::Error)
}

impl Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return match self {
      Self::MarkerNotFound => write!(
        f,
        "elastic tensor not found (no \"{}\" line)",
        MODULI_MARKER
      ),
      Self::TruncatedBlock { got } => write!(
        f,
        "moduli block truncated ({} of {} data rows present)",
        got,
        VOIGT_DIM
      ),
      Self::ShortRow { line, found } => write!(
        f,
        "malformed data row on line {} ({} fields, expected at least {})",
        line,
        found,
        VOIGT_DIM + 1
      ),
      Self::BadNumber { line, field } => write!(
        f,
        "bad numeric field \"{}\" on line {}",
        field,
        line
      ),
      Self::Io(e) => e.fmt(f)
    };
  }
}

impl Error for ParseError {}

impl From<io::Error> for ParseError {
  fn from(e: io::Error) -> Self {
    return Self::Io(e);
  }
}
