//! This module implements the scanner that locates the elastic moduli block
//! in an OUTCAR and decodes its six data rows.
//!
//! It is one-pass and single-thread, and doesn't care how lines are fed into
//! it -- `consume` takes them one at a time, and the `parse_bufread` and
//! `parse_file` helpers do the feeding for the common cases.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use nalgebra::RowVector6;

use crate::elastic::{ElasticTensor, KBAR_TO_GPA, VOIGT_DIM};
use crate::errors::ParseError;
use crate::util::decode_fortfloat;

/// The literal line content that marks the start of the moduli report.
pub const MODULI_MARKER: &str = "TOTAL ELASTIC MODULI (kBar)";

/// Number of header lines between the marker line and the first data row
/// (a dash rule and a column-label line in the solver's layout).
pub const HEADER_LINES: usize = 2;

/// What the scanner made of a line it was given.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanResponse {
  /// The line was useless.
  Useless,
  /// The line was the moduli marker.
  Marker,
  /// The line was a header line between the marker and the data.
  Skipped,
  /// The line was a data row; this many rows have been read so far.
  Row(usize),
  /// The line completed the block; the scanner is done.
  Done
}

/// Where the scanner currently is relative to the moduli block.
#[derive(Copy, Clone, Debug)]
enum ScanState {
  /// Still looking for the marker line.
  Searching,
  /// Found the marker; this many header lines left to skip.
  Skipping(usize),
  /// Inside the data block, reading rows.
  Reading,
  /// All six rows read; every further line is ignored.
  Finished
}

/// The moduli block scanner. Feed it lines; it locks onto the first marker
/// occurrence and decodes the fixed-size block that follows.
pub struct TensorScanner {
  /// Current position relative to the block.
  state: ScanState,
  /// Data rows decoded so far, already converted to GPa.
  rows: Vec<RowVector6<f64>>,
  /// Total number of consumed lines, for error reporting.
  total_lines: usize
}

impl Default for TensorScanner {
  fn default() -> Self {
    return Self::new();
  }
}

impl TensorScanner {
  /// Instantiates a new scanner.
  pub fn new() -> Self {
    return Self {
      state: ScanState::Searching,
      rows: Vec::with_capacity(VOIGT_DIM),
      total_lines: 0
    };
  }

  /// Decodes one data row: a label field followed by at least six numeric
  /// fields, of which exactly the first six are taken, in kBar.
  fn decode_row(&self, line: &str) -> Result<RowVector6<f64>, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < VOIGT_DIM + 1 {
      return Err(ParseError::ShortRow {
        line: self.total_lines,
        found: fields.len()
      });
    }
    let mut vals = [0.0; VOIGT_DIM];
    for (i, field) in fields[1..=VOIGT_DIM].iter().enumerate() {
      let raw = decode_fortfloat(field).ok_or_else(|| ParseError::BadNumber {
        line: self.total_lines,
        field: field.to_string()
      })?;
      vals[i] = raw * KBAR_TO_GPA;
    }
    return Ok(RowVector6::from_row_slice(&vals));
  }

  /// Consumes a line into the scanner.
  pub fn consume(&mut self, line: &str) -> Result<ScanResponse, ParseError> {
    self.total_lines += 1;
    match self.state {
      ScanState::Searching => {
        if line.contains(MODULI_MARKER) {
          debug!("Found moduli marker on line {}.", self.total_lines);
          self.state = ScanState::Skipping(HEADER_LINES);
          return Ok(ScanResponse::Marker);
        }
        return Ok(ScanResponse::Useless);
      },
      ScanState::Skipping(left) => {
        self.state = if left > 1 {
          ScanState::Skipping(left - 1)
        } else {
          ScanState::Reading
        };
        return Ok(ScanResponse::Skipped);
      },
      ScanState::Reading => {
        let row = self.decode_row(line)?;
        self.rows.push(row);
        if self.rows.len() == VOIGT_DIM {
          debug!("Finished the moduli block on line {}.", self.total_lines);
          self.state = ScanState::Finished;
          return Ok(ScanResponse::Done);
        }
        return Ok(ScanResponse::Row(self.rows.len()));
      },
      ScanState::Finished => return Ok(ScanResponse::Useless)
    }
  }

  /// Finishes up and returns the tensor, or the error describing what the
  /// input was missing.
  pub fn finish(self) -> Result<ElasticTensor, ParseError> {
    return match self.state {
      ScanState::Searching => Err(ParseError::MarkerNotFound),
      ScanState::Skipping(_) | ScanState::Reading => {
        Err(ParseError::TruncatedBlock { got: self.rows.len() })
      },
      ScanState::Finished => Ok(ElasticTensor::from_rows(&self.rows))
    };
  }

  /// Parses from a BufRead instance. Stops pulling lines once the block is
  /// complete; the first marker occurrence wins.
  pub fn parse_bufread<R: BufRead>(reader: R) -> Result<ElasticTensor, ParseError> {
    let mut scanner = Self::new();
    for line in reader.lines() {
      if scanner.consume(&line?)? == ScanResponse::Done {
        break;
      }
    }
    return scanner.finish();
  }

  /// Utility method -- opens and parses a file. The handle is dropped on
  /// every exit path, error or not.
  pub fn parse_file<S: AsRef<Path>>(p: S) -> Result<ElasticTensor, ParseError> {
    let file = File::open(p.as_ref())?;
    return Self::parse_bufread(BufReader::new(file));
  }
}
