//! __densemat__ is a small dense matrix library for real-valued matrices.
//!
//! The core type is [`Matrix`](crate::algebra::Matrix), a row-major dense
//! matrix that owns its data.  It supports
//!
//! * element access with bounds checking,
//! * approximate equality with an absolute tolerance (default `1e-7`),
//! * in-place addition, subtraction, scalar and matrix multiplication,
//! * transpose (owned or as a lazy [`Adjoint`](crate::algebra::Adjoint) view),
//! * minors, cofactors, the adjugate, the determinant and the inverse,
//! * resizing of either dimension with preservation of the overlapping block.
//!
//! The determinant is computed by Laplace (cofactor) expansion along the
//! first row:
//!
//! $$
//! \det(A) = \sum_{j} (-1)^{j} a_{0j} \det(M_{0j})
//! $$
//!
//! where $M_{ij}$ is the minor of $A$ with row $i$ and column $j$ removed.
//! This is exponential in the matrix dimension and is intended for
//! small matrices only.
//!
//! ## Example
//!
//! ```
//! use densemat::algebra::*;
//!
//! let A = Matrix::from(&[
//!     [2., 5., 7.], //
//!     [6., 3., 4.], //
//!     [5., -2., -3.],
//! ]);
//!
//! let Ainv = A.inverse().unwrap();
//! let I = &A * &Ainv;
//! assert!(I.approx_eq_tol(&Matrix::identity(3), 1e-6));
//! ```
//!
//! # Features
//!
//! * `serde` (default): serialization of matrices and settings, and
//!   reading / writing of matrices as JSON via [`io`](crate::io).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]
#![allow(non_snake_case)]

pub mod algebra;
pub mod settings;

#[cfg(feature = "serde")]
pub mod io;
