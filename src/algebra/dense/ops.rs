#![allow(non_snake_case)]
use crate::algebra::*;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Operator forms of the matrix arithmetic.  These follow the usual
// operator conventions and panic on incompatible dimensions, where
// the named methods return a MatrixError instead.

/// Approximate equality at the default tolerance of `1e-7`.
///
/// Note that this is not transitive.  See [`Matrix::approx_eq_tol`].
impl<T: FloatT> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

fn unwrap_or_panic<T>(res: Result<T, MatrixError>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

// ---------------------------------
// addition and subtraction
// ---------------------------------

macro_rules! impl_additive_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $method:ident) => {
        /// # Panics
        /// Panics if the matrix sizes differ.
        impl<T: FloatT> $OpAssign<&Matrix<T>> for Matrix<T> {
            fn $op_assign(&mut self, B: &Matrix<T>) {
                unwrap_or_panic(self.$method(B));
            }
        }

        impl<T: FloatT> $OpAssign<Matrix<T>> for Matrix<T> {
            fn $op_assign(&mut self, B: Matrix<T>) {
                self.$op_assign(&B);
            }
        }

        impl<T: FloatT> $Op<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $op(self, B: &Matrix<T>) -> Matrix<T> {
                let mut C = self.clone();
                C.$op_assign(B);
                C
            }
        }

        impl<T: FloatT> $Op<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;
            fn $op(mut self, B: &Matrix<T>) -> Matrix<T> {
                self.$op_assign(B);
                self
            }
        }

        impl<T: FloatT> $Op<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;
            fn $op(mut self, B: Matrix<T>) -> Matrix<T> {
                self.$op_assign(&B);
                self
            }
        }
    };
}

impl_additive_op!(Add, add, AddAssign, add_assign, add_matrix);
impl_additive_op!(Sub, sub, SubAssign, sub_assign, subtract);

// ---------------------------------
// matrix products
// ---------------------------------

/// # Panics
/// Panics unless `self.ncols() == B.nrows()`.
impl<T: FloatT> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, B: &Matrix<T>) {
        unwrap_or_panic(self.multiply(B));
    }
}

impl<T: FloatT> MulAssign<Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, B: Matrix<T>) {
        *self *= &B;
    }
}

impl<T: FloatT> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, B: &Matrix<T>) -> Matrix<T> {
        unwrap_or_panic(check_inner_dims("multiply", self, B));
        let mut C = Matrix::zeros((self.nrows(), B.ncols()));
        C.gemm(self, B, T::one(), T::zero());
        C
    }
}

impl<T: FloatT> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, B: &Matrix<T>) -> Matrix<T> {
        &self * B
    }
}

impl<T: FloatT> Mul<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, B: Matrix<T>) -> Matrix<T> {
        &self * &B
    }
}

// ---------------------------------
// scalar products
// ---------------------------------

impl<T: FloatT> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, c: T) {
        self.scale(c);
    }
}

impl<T: FloatT> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(mut self, c: T) -> Matrix<T> {
        self.scale(c);
        self
    }
}

impl<T: FloatT> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, c: T) -> Matrix<T> {
        self.clone() * c
    }
}

// scalar on the left, i.e. c * A.  Can't be done
// generically over T, so implement for primitives
macro_rules! impl_left_scalar_mul {
    ($ty:ty) => {
        impl Mul<Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;
            fn mul(self, A: Matrix<$ty>) -> Matrix<$ty> {
                A * self
            }
        }

        impl Mul<&Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;
            fn mul(self, A: &Matrix<$ty>) -> Matrix<$ty> {
                A * self
            }
        }
    };
}
impl_left_scalar_mul!(f32);
impl_left_scalar_mul!(f64);

impl<T: FloatT> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(mut self) -> Matrix<T> {
        self.negate();
        self
    }
}

impl<T: FloatT> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_matrix_2x2() -> Matrix<f64> {
        Matrix::from(&[
            [1., 2.], //
            [3., 4.], //
        ])
    }

    #[test]
    fn test_additive_operators() {
        let A = test_matrix_2x2();
        let B = Matrix::from(&[[1., 1.], [1., 1.]]);

        assert_eq!(&A + &B, Matrix::from(&[[2., 3.], [4., 5.]]));
        assert_eq!(&A - &B, Matrix::from(&[[0., 1.], [2., 3.]]));
        assert_eq!(A.clone() + B.clone() - &B, A);

        let mut C = A.clone();
        C += &B;
        C -= B;
        assert_eq!(C, A);
    }

    #[test]
    #[should_panic]
    fn test_add_operator_size_mismatch() {
        let _ = &test_matrix_2x2() + &Matrix::zeros((2, 3));
    }

    #[test]
    fn test_matrix_product_operators() {
        let A = test_matrix_2x2();
        let I = Matrix::identity(2);
        assert_eq!(&A * &I, A);
        assert_eq!(&A * &A, Matrix::from(&[[7., 10.], [15., 22.]]));

        let mut B = A.clone();
        B *= &A;
        assert_eq!(B, &A * &A);
        assert_eq!(A.clone() * A.clone(), B);
    }

    #[test]
    #[should_panic]
    fn test_mul_operator_size_mismatch() {
        let _ = &test_matrix_2x2() * &Matrix::zeros((3, 2));
    }

    #[test]
    fn test_scalar_operators() {
        let A = test_matrix_2x2();
        let expected = Matrix::from(&[[2., 4.], [6., 8.]]);
        assert_eq!(&A * 2., expected);
        assert_eq!(2. * &A, expected);
        assert_eq!(2. * A.clone(), A.clone() * 2.);

        let mut B = A.clone();
        B *= 2.;
        assert_eq!(B, expected);

        assert_eq!(-&A, Matrix::from(&[[-1., -2.], [-3., -4.]]));
        assert_eq!(-(-A.clone()), A);
    }

    #[test]
    fn test_scalar_operators_f32() {
        let A = Matrix::<f32>::from(&[[1., 2.]]);
        assert_eq!(3f32 * &A, Matrix::from(&[[3f32, 6f32]]));
    }

    #[test]
    fn test_partial_eq_tolerance() {
        let A = test_matrix_2x2();
        let mut B = A.clone();
        B[(0, 1)] += 1e-8;
        assert_eq!(A, B);
        B[(0, 1)] += 1e-6;
        assert_ne!(A, B);
    }
}
