use super::core::{checked_len, to_dimension};
use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Change the number of rows, keeping the column count.
    ///
    /// Rows that survive the resize keep their values and new rows are
    /// zero filled.  Returns [`InvalidDimension`](MatrixError::InvalidDimension)
    /// for a negative row count, or one that overflows the number of
    /// entries.  A count of zero is accepted and leaves
    /// an empty matrix with the column count unchanged.
    pub fn resize_rows<I>(&mut self, rows: I) -> Result<&mut Self, MatrixError>
    where
        I: TryInto<usize>,
    {
        let rows = to_dimension(rows)?;
        let len = checked_len(rows, self.n)?;
        log::trace!("resize rows {} -> {}", self.m, rows);

        // row major storage, so rows are a contiguous prefix
        self.data.resize(len, T::zero());
        self.m = rows;
        Ok(self)
    }

    /// Change the number of columns, keeping the row count.
    ///
    /// The overlapping columns keep their values and new columns are
    /// zero filled.  Returns [`InvalidDimension`](MatrixError::InvalidDimension)
    /// for a negative column count, or one that overflows the number
    /// of entries.
    pub fn resize_cols<I>(&mut self, cols: I) -> Result<&mut Self, MatrixError>
    where
        I: TryInto<usize>,
    {
        let cols = to_dimension(cols)?;
        let len = checked_len(self.m, cols)?;
        log::trace!("resize cols {} -> {}", self.n, cols);

        let keep = usize::min(cols, self.n);
        let mut data = vec![T::zero(); len];
        for (i, row) in data.chunks_exact_mut(cols.max(1)).enumerate().take(self.m) {
            row[..keep].copy_from(&self.row_slice(i)[..keep]);
        }
        self.data = data;
        self.n = cols;
        Ok(self)
    }

    /// Resize both dimensions.  Equivalent to `resize_rows` followed
    /// by `resize_cols`, but fails before making any change if either
    /// dimension is invalid.
    pub fn set_size<I>(&mut self, size: (I, I)) -> Result<&mut Self, MatrixError>
    where
        I: TryInto<usize>,
    {
        let rows = to_dimension(size.0)?;
        let cols = to_dimension(size.1)?;
        checked_len(rows, cols)?;

        // shrink columns first, so the intermediate buffer is never
        // larger than the bigger of the old and new sizes
        if cols <= self.n {
            self.resize_cols(cols)?;
            self.resize_rows(rows)
        } else {
            self.resize_rows(rows)?;
            self.resize_cols(cols)
        }
    }
}

#[test]
fn test_resize_rows() {
    let mut A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    A.resize_rows(3).unwrap();
    assert_eq!(A.size(), (3, 2));
    assert_eq!(A.data(), &[1., 2., 3., 4., 0., 0.]);

    A.resize_rows(1).unwrap();
    assert_eq!(A.size(), (1, 2));
    assert_eq!(A.data(), &[1., 2.]);

    assert_eq!(A.resize_rows(-2).unwrap_err(), MatrixError::InvalidDimension);
    assert_eq!(A.size(), (1, 2));

    A.resize_rows(0).unwrap();
    assert_eq!(A.size(), (0, 2));
    assert!(A.data().is_empty());
}

#[test]
fn test_resize_cols() {
    let mut A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    A.resize_cols(3).unwrap();
    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.data(), &[1., 2., 0., 3., 4., 0.]);

    A.resize_cols(1).unwrap();
    assert_eq!(A.size(), (2, 1));
    assert_eq!(A.data(), &[1., 3.]);

    assert!(A.resize_cols(-1).is_err());

    A.resize_cols(0).unwrap();
    assert_eq!(A.size(), (2, 0));
    assert!(A.data().is_empty());

    // and back again, zero filled
    A.resize_cols(2).unwrap();
    assert_eq!(A.data(), &[0., 0., 0., 0.]);
}

#[test]
fn test_set_size() {
    let mut A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);
    A.set_size((3, 2)).unwrap();
    assert_eq!(A.data(), &[1., 2., 4., 5., 0., 0.]);

    assert!(A.set_size((-1, 2)).is_err());
    assert!(A.set_size((2, -1)).is_err());
    assert_eq!(A.size(), (3, 2));

    let mut B = Matrix::<f64>::null();
    B.set_size((2usize, 2usize)).unwrap();
    assert_eq!(B, Matrix::zeros((2, 2)));
}

#[test]
fn test_resize_size_overflow() {
    let mut A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    assert_eq!(
        A.resize_rows(usize::MAX).unwrap_err(),
        MatrixError::InvalidDimension
    );
    assert_eq!(
        A.resize_cols(usize::MAX).unwrap_err(),
        MatrixError::InvalidDimension
    );
    assert!(A.set_size((usize::MAX, 2)).is_err());

    // failed resizes leave the matrix untouched
    assert_eq!(A.size(), (2, 2));
    assert_eq!(A.data(), &[1., 2., 3., 4.]);
}
