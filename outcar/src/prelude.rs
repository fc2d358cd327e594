//! Re-exports the types most users of this library will want in scope.

pub use crate::elastic::*;
pub use crate::errors::*;
pub use crate::parser::*;
