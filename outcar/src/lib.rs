//! This library implements types and functions to locate and extract the
//! elastic stiffness tensor reported in the formatted text output of
//! VASP-like ab-initio solvers (the OUTCAR file), convert it from kBar to
//! GPa, and re-emit it in Voigt-ordered form.
//!
//! The parser is a one-pass line scanner: feed it lines however you like,
//! or use the convenience readers that take a `BufRead` or a path. The
//! solver reports the moduli once, so the scanner locks onto the first
//! marker occurrence and ignores everything after the block.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::needless_return)]

pub mod elastic;
pub mod errors;
pub mod parser;
pub mod prelude;
pub(crate) mod util;
