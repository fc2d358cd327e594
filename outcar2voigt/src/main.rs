//! Reads the elastic tensor out of the OUTCAR file in the working directory
//! and prints it in Voigt format, converted to GPa.

#![allow(clippy::needless_return)] // i'll never forgive rust for this

use log::{error, LevelFilter};
use outcar::prelude::*;

/// The fixed input filename, as the solver writes it.
const INPUT_FILE: &str = "OUTCAR";

fn main() {
  env_logger::builder().filter_level(LevelFilter::Info).init();
  let tensor = match TensorScanner::parse_file(INPUT_FILE) {
    Ok(t) => t,
    Err(e) => {
      error!("{}: {}", INPUT_FILE, e);
      std::process::exit(1);
    }
  };
  println!("#Elastic Tensor in Voigt Format (GPa):");
  print!("{}", tensor.to_voigt());
}
