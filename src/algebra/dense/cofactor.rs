#![allow(non_snake_case)]
use crate::algebra::*;
use crate::settings::MatrixSettings;
use itertools::iproduct;

// Determinants, cofactors and inverses by Laplace expansion.
// Exponential in the dimension, so intended for small matrices.

impl<T> Matrix<T>
where
    T: FloatT,
{
    // (m-1)x(n-1) submatrix with `row` and `col` removed
    pub(crate) fn minor(&self, row: usize, col: usize) -> Self {
        let (m, n) = self.size();
        debug_assert!(row < m && col < n);

        let data = iproduct!(0..m, 0..n)
            .filter(|&(i, j)| i != row && j != col)
            .map(|(i, j)| self[(i, j)])
            .collect();

        Self {
            m: m - 1,
            n: n - 1,
            data,
        }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Returns [`NotSquare`](MatrixError::NotSquare) for non-square input.
    /// The determinant of the null matrix is 1.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        check_square("determinant", self)?;
        Ok(self.det_laplace())
    }

    fn det_laplace(&self) -> T {
        match self.n {
            0 => T::one(),
            1 => self[(0, 0)],
            2 => self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)],
            n => {
                log::trace!("determinant expansion on {n}x{n} matrix");
                let mut det = T::zero();
                let mut sign = T::one();
                for j in 0..n {
                    det += self[(0, j)] * sign * self.minor(0, j).det_laplace();
                    sign = -sign;
                }
                det
            }
        }
    }

    /// Matrix of cofactors, with entry `(i,j)` equal to `(-1)^(i+j)`
    /// times the determinant of the minor at `(i,j)`.
    pub fn cofactors(&self) -> Result<Self, MatrixError> {
        check_square("cofactors", self)?;

        let mut C = Matrix::zeros(self.size());
        for (i, j) in iproduct!(0..self.m, 0..self.n) {
            let sign = if (i + j) % 2 == 0 { T::one() } else { -T::one() };
            C[(i, j)] = sign * self.minor(i, j).det_laplace();
        }
        Ok(C)
    }

    /// Adjugate, i.e. the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Self, MatrixError> {
        Ok(self.cofactors()?.transpose())
    }

    /// Inverse, singular below the default tolerance of `1e-7`
    /// on the absolute value of the determinant.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        self.inverse_with(&MatrixSettings::default())
    }

    /// Inverse using the singularity tolerance held in `settings`.
    ///
    /// Returns [`NotSquare`](MatrixError::NotSquare) for non-square input
    /// and [`Singular`](MatrixError::Singular) if `|det| < singular_tolerance`.
    pub fn inverse_with(&self, settings: &MatrixSettings<T>) -> Result<Self, MatrixError> {
        let det = self.determinant()?;
        if det.abs() < settings.singular_tolerance {
            log::debug!("inverse: determinant {det:e} is below singular tolerance");
            return Err(MatrixError::Singular);
        }

        if self.n == 1 {
            return Ok(Matrix {
                m: 1,
                n: 1,
                data: vec![T::recip(self[(0, 0)])],
            });
        }

        let mut Ainv = self.adjugate()?;
        Ainv.scale(T::recip(det));
        Ok(Ainv)
    }
}

#[test]
fn test_minor() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
        [7., 8., 9.], //
    ]);
    assert_eq!(A.minor(0, 0).data(), &[5., 6., 8., 9.]);
    assert_eq!(A.minor(1, 1).data(), &[1., 3., 7., 9.]);
    assert_eq!(A.minor(2, 0).data(), &[2., 3., 5., 6.]);

    let B = Matrix::from(&[[4.]]);
    assert!(B.minor(0, 0).is_null());
}

#[test]
fn test_determinant_small() {
    assert_eq!(Matrix::from(&[[5.]]).determinant(), Ok(5.));

    let A = Matrix::from(&[
        [3., 8.], //
        [4., 6.], //
    ]);
    assert_eq!(A.determinant(), Ok(-14.));

    assert_eq!(Matrix::<f64>::null().determinant(), Ok(1.));
}

#[test]
fn test_determinant_laplace() {
    let A = Matrix::from(&[
        [2., 5., 7.],  //
        [6., 3., 4.],  //
        [5., -2., -3.],
    ]);
    assert_eq!(A.determinant(), Ok(-1.));

    let B = Matrix::from(&[
        [1., 2., 3., 4.],  //
        [5., 6., 7., 8.],  //
        [9., 10., 11., 12.],
        [13., 14., 15., 16.],
    ]);
    assert_eq!(B.determinant(), Ok(0.));

    // triangular, so the product of the diagonal
    let C = Matrix::from(&[
        [2., 1., 7., 3., 4.],  //
        [0., 3., 5., 1., 2.],  //
        [0., 0., -1., 8., 6.], //
        [0., 0., 0., 4., 9.],  //
        [0., 0., 0., 0., 0.5], //
    ]);
    assert_eq!(C.determinant(), Ok(-12.));
}

#[test]
fn test_determinant_not_square() {
    let A = Matrix::<f64>::zeros((2, 3));
    assert_eq!(
        A.determinant(),
        Err(MatrixError::NotSquare { nrows: 2, ncols: 3 })
    );
    assert!(A.cofactors().is_err());
    assert!(A.inverse().is_err());
}

#[test]
fn test_cofactors() {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [0., 4., 2.], //
        [5., 2., 1.], //
    ]);
    let expected = Matrix::from(&[
        [0., 10., -20.], //
        [4., -14., 8.],  //
        [-8., -2., 4.],  //
    ]);
    assert_eq!(A.cofactors().unwrap(), expected);
    assert_eq!(A.adjugate().unwrap(), expected.transpose());

    // the single cofactor of a 1x1 matrix is det of the null minor
    assert_eq!(Matrix::from(&[[7.]]).cofactors().unwrap().data(), &[1.]);
}

#[test]
fn test_inverse() {
    let A = Matrix::from(&[
        [2., 5., 7.],  //
        [6., 3., 4.],  //
        [5., -2., -3.],
    ]);
    let expected = Matrix::from(&[
        [1., -1., 1.],     //
        [-38., 41., -34.], //
        [27., -29., 24.],  //
    ]);
    assert_eq!(A.inverse().unwrap(), expected);

    let B = Matrix::from(&[[4.]]);
    assert_eq!(B.inverse().unwrap().data(), &[0.25]);
}

#[test]
fn test_inverse_singular() {
    let A = Matrix::from(&[
        [1., 1.], //
        [1., 1.], //
    ]);
    assert_eq!(A.inverse(), Err(MatrixError::Singular));
    assert_eq!(Matrix::from(&[[0.]]).inverse(), Err(MatrixError::Singular));

    // nearly singular, but above a relaxed tolerance
    let B = Matrix::from(&[
        [1e-4, 0.], //
        [0., 1e-4], //
    ]);
    assert_eq!(B.inverse(), Err(MatrixError::Singular));
    let settings = crate::settings::MatrixSettingsBuilder::default()
        .singular_tolerance(1e-9)
        .build()
        .unwrap();
    let Binv = B.inverse_with(&settings).unwrap();
    assert!(Binv.approx_eq_tol(&Matrix::from(&[[1e4, 0.], [0., 1e4]]), 1e-6));
}
