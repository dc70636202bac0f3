#![allow(non_snake_case)]
use crate::algebra::*;
use crate::settings::MatrixSettings;

/// Default absolute tolerance for approximate matrix equality
pub const EQ_TOLERANCE: f64 = 1e-7;

impl<T: FloatT> MatrixMath for Matrix<T> {
    type T = T;

    //scalar mut operations
    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Approximate equality at the default tolerance.
    ///
    /// Matrices are equal if they have the same size and every pair of
    /// entries differs by strictly less than `1e-7`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_tol(other, EQ_TOLERANCE.as_T())
    }

    /// Approximate equality at the tolerance held in `settings`.
    pub fn approx_eq_with(&self, other: &Self, settings: &MatrixSettings<T>) -> bool {
        self.approx_eq_tol(other, settings.eq_tolerance)
    }

    /// Approximate equality with an explicit absolute tolerance.
    pub fn approx_eq_tol(&self, other: &Self, tol: T) -> bool {
        self.size() == other.size() && self.data.all_close(&other.data, tol)
    }

    /// Elementwise `self += B`.
    ///
    /// Returns [`ShapeMismatch`](MatrixError::ShapeMismatch) and leaves
    /// `self` untouched if the sizes differ.
    pub fn add_matrix(&mut self, B: &Self) -> Result<&mut Self, MatrixError> {
        check_same_size("add", &*self, B)?;
        self.data.axpby(T::one(), &B.data, T::one());
        Ok(self)
    }

    /// Elementwise `self -= B`.
    ///
    /// Returns [`ShapeMismatch`](MatrixError::ShapeMismatch) and leaves
    /// `self` untouched if the sizes differ.
    pub fn subtract(&mut self, B: &Self) -> Result<&mut Self, MatrixError> {
        check_same_size("subtract", &*self, B)?;
        self.data.axpby(-T::one(), &B.data, T::one());
        Ok(self)
    }

    /// Matrix product `self = self * B`.
    ///
    /// `B` can be a matrix or a transposed view of one.  Returns
    /// [`ShapeMismatch`](MatrixError::ShapeMismatch) and leaves `self`
    /// untouched unless `self.ncols() == B.nrows()`.
    pub fn multiply<MATB>(&mut self, B: &MATB) -> Result<&mut Self, MatrixError>
    where
        MATB: DenseMatrix<T = T>,
    {
        check_inner_dims("multiply", &*self, B)?;
        let mut C = Matrix::zeros((self.nrows(), B.ncols()));
        C.gemm(&*self, B, T::one(), T::zero());
        *self = C;
        Ok(self)
    }

    /// General matrix-matrix multiply, `self = αA*B + βself`.
    ///
    /// `B` can be a matrix or a transposed view of one.
    ///
    /// # Panics
    /// Panics if the dimensions of `A`, `B` and `self` are incompatible.
    pub fn gemm<MATB>(&mut self, A: &Self, B: &MATB, α: T, β: T) -> &Self
    where
        MATB: DenseMatrix<T = T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        if self.nrows() == 0 || self.ncols() == 0 {
            return self;
        }

        // each column of B is gathered once, then dotted with the rows of A
        let Bdata = B.data();
        let mut bcol = vec![T::zero(); B.nrows()];
        for j in 0..self.ncols() {
            for (k, b) in bcol.iter_mut().enumerate() {
                *b = Bdata[B.index_linear((k, j))];
            }
            for i in 0..self.nrows() {
                let acc = A.row_slice(i).dot(&bcol);
                let c = &mut self[(i, j)];
                *c = if β == T::zero() {
                    α * acc
                } else {
                    α * acc + β * (*c)
                };
            }
        }
        self
    }

    /// Owned transpose.  See also [`t`](Matrix::t) for a lazy view.
    pub fn transpose(&self) -> Self {
        let mut At = Matrix::zeros((self.n, self.m));
        for i in 0..self.m {
            for (j, &v) in self.row_slice(i).iter().enumerate() {
                At[(j, i)] = v;
            }
        }
        At
    }
}

#[test]
fn test_approx_eq() {
    let A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let mut B = A.clone();
    assert!(A.approx_eq(&A));
    assert!(A.approx_eq(&B));

    B[(1, 1)] += 5e-8;
    assert!(A.approx_eq(&B));

    B[(1, 1)] = 4. + 2e-7;
    assert!(!A.approx_eq(&B));
    assert!(A.approx_eq_tol(&B, 1e-6));

    let C = Matrix::from(&[[1., 2., 0.], [3., 4., 0.]]);
    assert!(!A.approx_eq(&C));
}

#[test]
fn test_add_subtract() {
    let mut A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let B = Matrix::from(&[
        [0.5, -2.], //
        [10., 0.], //
    ]);
    A.add_matrix(&B).unwrap();
    assert_eq!(A.data(), &[1.5, 0., 13., 4.]);
    A.subtract(&B).unwrap();
    assert_eq!(A.data(), &[1., 2., 3., 4.]);

    // mismatched sizes leave the matrix untouched
    let C = Matrix::<f64>::zeros((2, 3));
    assert!(matches!(
        A.add_matrix(&C),
        Err(MatrixError::ShapeMismatch { op: "add", .. })
    ));
    assert!(A.subtract(&C).is_err());
    assert_eq!(A.data(), &[1., 2., 3., 4.]);
}

#[test]
fn test_multiply() {
    let mut A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);
    let B = Matrix::from(&[
        [1., 0.], //
        [0., 1.], //
        [2., -1.], //
    ]);
    A.multiply(&B).unwrap();
    assert_eq!(A.size(), (2, 2));
    assert_eq!(A.data(), &[7., -1., 16., -1.]);

    // incompatible inner dimensions
    let C = Matrix::<f64>::zeros((3, 3));
    assert!(A.multiply(&C).is_err());
    assert_eq!(A.size(), (2, 2));
}

#[test]
fn test_multiply_adjoint() {
    let mut A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let B = Matrix::from(&[
        [1., 1.], //
        [0., 2.], //
    ]);
    // A * B' with B' = [1 0; 1 2]
    A.multiply(&B.t()).unwrap();
    assert_eq!(A.data(), &[3., 4., 7., 8.]);
}

#[test]
fn test_gemm() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);
    let B = Matrix::from(&[
        [1., 5., 9., 4.],  //
        [2., 6., 10., 8.], //
        [3., 7., 11., 12.],
    ]);
    let mut C = Matrix::from(&[
        [2., 6., 0., 4.], //
        [7., 2., 7., 2.], //
    ]);
    C.gemm(&A, &B, 1., 1.);
    let expected = Matrix::from(&[
        [16., 44., 62., 60.], //
        [39., 94., 159., 130.],
    ]);
    assert_eq!(C, expected);

    // scaled product through a transposed view, discarding the output
    let Bt = B.transpose();
    let mut D = Matrix::from(&[[1.; 4]; 2]);
    D.gemm(&A, &Bt.t(), 2., 0.);
    let expected = Matrix::from(&[
        [28., 76., 124., 112.], //
        [64., 184., 304., 256.],
    ]);
    assert_eq!(D, expected);
}

#[test]
fn test_transpose() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);
    let At = A.transpose();
    assert_eq!(At.size(), (3, 2));
    assert_eq!(At.data(), &[1., 4., 2., 5., 3., 6.]);
    assert_eq!(At.transpose(), A);
}

#[test]
fn test_scale_negate() {
    let mut A = Matrix::from(&[
        [1., -2.], //
        [3., 4.], //
    ]);
    A.scale(2.);
    assert_eq!(A.data(), &[2., -4., 6., 8.]);
    A.negate();
    assert_eq!(A.data(), &[-2., 4., -6., -8.]);
}
