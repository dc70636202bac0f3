use crate::algebra::{
    Adjoint, DenseMatrix, FloatT, Matrix, MatrixError, MatrixShape, ShapedMatrix, VectorMath,
};
use std::ops::{Index, IndexMut};

impl<T> DenseMatrix for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T> DenseMatrix for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        &self.src.data
    }
}

// converts a user supplied dimension, rejecting negative values
pub(crate) fn to_dimension<I>(dim: I) -> Result<usize, MatrixError>
where
    I: TryInto<usize>,
{
    dim.try_into().map_err(|_| {
        log::debug!("rejected negative or unrepresentable matrix dimension");
        MatrixError::InvalidDimension
    })
}

// number of entries of an m x n matrix, rejecting sizes that overflow usize
pub(crate) fn checked_len(m: usize, n: usize) -> Result<usize, MatrixError> {
    m.checked_mul(n).ok_or_else(|| {
        log::debug!("matrix size {m}x{n} overflows usize");
        MatrixError::InvalidDimension
    })
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// The null (0x0) matrix.  Does not allocate.
    pub fn null() -> Self {
        Self {
            m: 0,
            n: 0,
            data: Vec::new(),
        }
    }

    /// Zero initialized `rows x cols` matrix.
    ///
    /// Dimensions may be of any integer type.  Returns
    /// [`InvalidDimension`](MatrixError::InvalidDimension) if either
    /// dimension is negative or less than 1, or if the number of
    /// entries would overflow `usize`.
    ///
    /// ```
    /// use densemat::algebra::*;
    ///
    /// let A: Matrix = Matrix::new(2, 3).unwrap();
    /// assert_eq!(A.size(), (2, 3));
    /// assert_eq!(Matrix::<f64>::new(-1, 3).unwrap_err(), MatrixError::InvalidDimension);
    /// ```
    pub fn new<I>(rows: I, cols: I) -> Result<Self, MatrixError>
    where
        I: TryInto<usize>,
    {
        let m = to_dimension(rows)?;
        let n = to_dimension(cols)?;
        if m < 1 || n < 1 {
            log::debug!("matrix size {m}x{n} is less than 1x1");
            return Err(MatrixError::InvalidDimension);
        }
        let len = checked_len(m, n)?;
        Ok(Self {
            m,
            n,
            data: vec![T::zero(); len],
        })
    }

    /// Zero initialized matrix of known size.
    ///
    /// # Panics
    /// Panics if `m*n` overflows `usize`.  Use [`new`](Matrix::new)
    /// for sizes that are not known to be valid.
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let Some(len) = m.checked_mul(n) else {
            panic!("matrix size {m}x{n} overflows usize");
        };
        Self {
            m,
            n,
            data: vec![T::zero(); len],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data.set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Matrix from a slice of data in row major order.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Result<Self, MatrixError> {
        let (m, n) = size;
        if m.checked_mul(n) != Some(src.len()) {
            return Err(MatrixError::IncompatibleDimension);
        }
        Ok(Self {
            m,
            n,
            data: src.to_vec(),
        })
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning its row major data
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// True for the 0x0 matrix with no data.
    pub fn is_null(&self) -> bool {
        self.m == 0 && self.n == 0 && self.data.is_empty()
    }

    /// Lazily transposed view of the matrix
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.m);
        &self.data[(row * self.n)..(row + 1) * self.n]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.m);
        &mut self.data[(row * self.n)..(row + 1) * self.n]
    }

    /// Bounds checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_index(row, col)?;
        Ok(self[(row, col)])
    }

    /// Bounds checked mutable element reference.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        self.check_index(row, col)?;
        Ok(&mut self[(row, col)])
    }

    /// Bounds checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.data.set(value);
        self
    }

    /// Move the contents out, leaving the null matrix behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Exchange dimensions and data with `other`.
    pub fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Release the data and reset to the null matrix.
    pub fn clear(&mut self) {
        *self = Self::null();
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.m || col >= self.n {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                nrows: self.m,
                ncols: self.n,
            });
        }
        Ok(())
    }
}

impl<T> Default for Matrix<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::null()
    }
}

impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        if M == 0 || N == 0 {
            return Self::null();
        }
        let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self { m: M, n: N, data }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n, "index out of range");
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n, "index out of range");
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> Index<(usize, usize)> for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.src[(idx.1, idx.0)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

fn display_matrix<M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix,
    M::T: FloatT,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m.data()[m.index_linear((i, j))])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_indexing_matrix() -> Matrix<f64> {
        // Create a 3x3 matrix in row-major order:
        // [ 1.0  2.0  3.0 ]
        // [ 4.0  5.0  6.0 ]
        // [ 7.0  8.0  9.0 ]
        Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    }

    #[test]
    fn test_matrix_indexing() {
        let matrix = create_indexing_matrix();

        // Test direct indexing
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix[(0, 2)], 3.0);
        assert_eq!(matrix[(1, 0)], 4.0);
        assert_eq!(matrix[(2, 2)], 9.0);

        // Test linear indexing
        assert_eq!(matrix.index_linear((0, 0)), 0);
        assert_eq!(matrix.index_linear((0, 1)), 1);
        assert_eq!(matrix.index_linear((0, 2)), 2);
        assert_eq!(matrix.index_linear((1, 0)), 3);
        assert_eq!(matrix.index_linear((2, 1)), 7);
        assert_eq!(matrix.index_linear((2, 2)), 8);
    }

    #[test]
    fn test_adjoint_indexing() {
        let matrix = create_indexing_matrix();
        let adjoint = matrix.t();

        // Test direct indexing (transposed)
        assert_eq!(adjoint[(0, 0)], 1.0);
        assert_eq!(adjoint[(0, 1)], 4.0);
        assert_eq!(adjoint[(0, 2)], 7.0);
        assert_eq!(adjoint[(1, 0)], 2.0);
        assert_eq!(adjoint[(2, 1)], 6.0);

        // Test linear indexing (transposed)
        assert_eq!(adjoint.index_linear((0, 1)), 3);
        assert_eq!(adjoint.index_linear((1, 0)), 1);
        assert_eq!(adjoint.shape(), MatrixShape::T);
    }

    #[test]
    fn test_adjoint_size() {
        let A = Matrix::<f64>::zeros((2, 5));
        assert_eq!(A.t().size(), (5, 2));
        assert!(!A.t().is_square());
    }

    #[test]
    fn test_checked_access() {
        let mut A = create_indexing_matrix();
        assert_eq!(A.get(1, 2), Ok(6.0));
        assert_eq!(
            A.get(5, 0),
            Err(MatrixError::OutOfRange {
                row: 5,
                col: 0,
                nrows: 3,
                ncols: 3
            })
        );
        assert!(A.get(0, 3).is_err());

        A.set(2, 0, -1.5).unwrap();
        assert_eq!(A[(2, 0)], -1.5);
        *A.get_mut(0, 0).unwrap() += 10.;
        assert_eq!(A[(0, 0)], 11.);
        assert!(A.set(3, 3, 0.).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let A = create_indexing_matrix();
        let _ = A[(0, 3)];
    }

    #[test]
    fn test_new_dimensions() {
        let A: Matrix = Matrix::new(3, 2).unwrap();
        assert_eq!(A.size(), (3, 2));
        assert!(A.data().iter().all(|&x| x == 0.));

        assert_eq!(
            Matrix::<f64>::new(-1, 3).unwrap_err(),
            MatrixError::InvalidDimension
        );
        assert_eq!(
            Matrix::<f64>::new(3, -1).unwrap_err(),
            MatrixError::InvalidDimension
        );
        assert_eq!(
            Matrix::<f64>::new(0, 3).unwrap_err(),
            MatrixError::InvalidDimension
        );
        assert!(Matrix::<f64>::new(1usize, 1usize).is_ok());
    }

    #[test]
    fn test_new_size_overflow() {
        assert_eq!(
            Matrix::<f64>::new(usize::MAX, 2).unwrap_err(),
            MatrixError::InvalidDimension
        );
        assert_eq!(
            Matrix::<f64>::new_from_slice((usize::MAX / 2 + 1, 2), &[]).unwrap_err(),
            MatrixError::IncompatibleDimension
        );
    }

    #[test]
    #[should_panic]
    fn test_zeros_size_overflow_panics() {
        let _ = Matrix::<f64>::zeros((usize::MAX, 2));
    }

    #[test]
    fn test_null_and_take() {
        let A = Matrix::<f64>::default();
        assert!(A.is_null());
        assert_eq!(A.size(), (0, 0));

        let mut B = create_indexing_matrix();
        let C = B.take();
        assert!(B.is_null());
        assert_eq!(C.size(), (3, 3));
        assert_eq!(C[(1, 1)], 5.0);

        let mut D = C.clone();
        D.clear();
        assert!(D.is_null());
        assert!(!C.is_null());
    }

    #[test]
    fn test_swap_with() {
        let mut A = create_indexing_matrix();
        let mut B = Matrix::from(&[[1., 2.]]);
        A.swap_with(&mut B);
        assert_eq!(A.size(), (1, 2));
        assert_eq!(B.size(), (3, 3));
        assert_eq!(B[(2, 2)], 9.0);
    }

    #[test]
    fn test_from_slice_and_identity() {
        let A = Matrix::new_from_slice((2, 2), &[1., 2., 3., 4.]).unwrap();
        assert_eq!(A[(1, 0)], 3.);
        assert_eq!(
            Matrix::new_from_slice((2, 2), &[1., 2., 3.]).unwrap_err(),
            MatrixError::IncompatibleDimension
        );

        let I = Matrix::<f64>::identity(3);
        assert_eq!(I.data(), &[1., 0., 0., 0., 1., 0., 0., 0., 1.]);
    }

    #[test]
    fn test_fill_and_rows() {
        let mut A = Matrix::<f64>::zeros((2, 3));
        A.fill(2.5);
        assert_eq!(A.row_slice(1), &[2.5, 2.5, 2.5]);
        A.row_slice_mut(0).copy_from(&[1., 2., 3.]);
        assert_eq!(A.into_vec(), vec![1., 2., 3., 2.5, 2.5, 2.5]);
    }

    #[test]
    fn test_display() {
        let A = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        let s = format!("{}", A);
        assert_eq!(s, "\n[  1.0 2.0]\n[  3.0 4.0]\n\n");
    }
}
