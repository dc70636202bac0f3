// All matrices here are dense and stored in row major
// format, i.e. element (i,j) lives at data[i*n + j].

/// Dense matrix in row major format
///
/// A `Matrix` exclusively owns its data.  Cloning makes a deep copy.
/// The "null" matrix has `m == n == 0` and no data; it is produced by
/// [`Default`] and is left behind by [`Matrix::take`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound = "T: serde::Serialize + serde::de::DeserializeOwned",
        try_from = "MatrixData<T>"
    )
)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// vector of data in row major format
    pub(crate) data: Vec<T>,
}

#[cfg(feature = "serde")]
use serde_shadow::MatrixData;

// Deserialization goes through an unchecked shadow of the matrix,
// so that every deserialized matrix has m*n == data.len()
#[cfg(feature = "serde")]
mod serde_shadow {
    use super::Matrix;
    use crate::algebra::MatrixError;

    #[derive(serde::Deserialize)]
    #[serde(bound = "T: serde::de::DeserializeOwned")]
    pub struct MatrixData<T> {
        pub m: usize,
        pub n: usize,
        pub data: Vec<T>,
    }

    impl<T> TryFrom<MatrixData<T>> for Matrix<T> {
        type Error = MatrixError;

        fn try_from(raw: MatrixData<T>) -> Result<Self, Self::Error> {
            let MatrixData { m, n, data } = raw;
            if m.checked_mul(n) != Some(data.len()) {
                log::debug!("serialized matrix has size {m}x{n} but {} values", data.len());
                return Err(MatrixError::IncompatibleDimension);
            }
            Ok(Matrix { m, n, data })
        }
    }
}

/// Adjoint (transposed) view of a matrix
///
/// This is a read only view that swaps row and column indices
/// of its source.  See [`Matrix::t`].
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}
