//! This module defines the matrix types the parser produces: the elastic
//! stiffness tensor as read from the solver output, and its Voigt-ordered
//! form ready for printing.
//!
//! Both are fixed 6x6 matrices -- elastic moduli don't grow -- so they sit
//! on top of statically-sized nalgebra storage.

use std::fmt::Display;

use itertools::Itertools;
use nalgebra::{Matrix6, RowVector6};
use serde::{Deserialize, Serialize};

/// The order of the stiffness matrix: six independent stress/strain
/// components (xx, yy, zz, yz, xz, xy).
pub const VOIGT_DIM: usize = 6;

/// Conversion factor from the solver's pressure unit to giga-Pascal.
pub const KBAR_TO_GPA: f64 = 0.1;

/// A 6x6 elastic stiffness tensor, entries in GPa, rows and columns ordered
/// as reported by the solver.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElasticTensor {
  /// The stiffness coefficients.
  pub data: Matrix6<f64>,
}

impl ElasticTensor {
  /// Assembles a tensor from exactly six rows. Panics on any other count,
  /// so callers must have checked the row count beforehand.
  pub fn from_rows(rows: &[RowVector6<f64>]) -> Self {
    assert_eq!(rows.len(), VOIGT_DIM, "elastic tensor takes six rows");
    return Self { data: Matrix6::from_rows(rows) };
  }

  /// Re-emits the tensor in Voigt-ordered form. Row 0 of the output is the
  /// diagonal of the input; rows 1 through 5 carry over verbatim. This is
  /// the layout downstream scripts consume -- it is not a symmetrizing
  /// Voigt transform, and the shear rows are deliberately left untouched.
  pub fn to_voigt(&self) -> VoigtMatrix {
    let mut data = self.data;
    let diag = self.data.diagonal();
    for j in 0..VOIGT_DIM {
      data[(0, j)] = diag[j];
    }
    return VoigtMatrix { data };
  }
}

/// The Voigt-ordered 6x6 output matrix, entries in GPa.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoigtMatrix {
  /// The re-ordered coefficients.
  pub data: Matrix6<f64>,
}

impl Display for VoigtMatrix {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for i in 0..VOIGT_DIM {
      let row = self.data
        .row(i)
        .iter()
        .map(|v| format!("{:10.3}", v))
        .join(" ");
      writeln!(f, "{}", row)?;
    }
    return Ok(());
  }
}
