//! Dense matrix types and linear algebra operations.
//!
//! The owned matrix type is [`Matrix`].  Most operations are inherent
//! methods on [`Matrix`]; elementwise helpers on slices are provided
//! through the [`VectorMath`] trait, and matrix scaling through
//! [`MatrixMath`].  The standard arithmetic operators are implemented
//! for owned matrices and references.

mod adjoint;
mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;

pub use dense::EQ_TOLERANCE;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
