use std::ops::Index;

use crate::algebra::{MatrixError, MatrixShape};

/// Dimension queries shared by all matrix-like types
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn shape(&self) -> MatrixShape;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

//NB: the concrete dense type is just called "Matrix".  The "DenseMatrix" trait
//is implemented on Matrix and Adjoint to allow for indexing of values in
//either format, so that products can be taken against a transposed view
//without materializing it.
pub trait DenseMatrix: ShapedMatrix + Index<(usize, usize)> {
    type T;
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    fn data(&self) -> &[Self::T];
}

pub(crate) fn check_same_size<MA, MB>(op: &'static str, A: &MA, B: &MB) -> Result<(), MatrixError>
where
    MA: ShapedMatrix,
    MB: ShapedMatrix,
{
    if A.size() != B.size() {
        log::debug!("{op}: size mismatch {:?} vs {:?}", A.size(), B.size());
        return Err(MatrixError::ShapeMismatch {
            op,
            left: A.size(),
            right: B.size(),
        });
    }
    Ok(())
}

pub(crate) fn check_inner_dims<MA, MB>(op: &'static str, A: &MA, B: &MB) -> Result<(), MatrixError>
where
    MA: ShapedMatrix,
    MB: ShapedMatrix,
{
    if A.ncols() != B.nrows() {
        log::debug!("{op}: inner dimension mismatch {:?} * {:?}", A.size(), B.size());
        return Err(MatrixError::ShapeMismatch {
            op,
            left: A.size(),
            right: B.size(),
        });
    }
    Ok(())
}

pub(crate) fn check_square<MA>(op: &'static str, A: &MA) -> Result<(), MatrixError>
where
    MA: ShapedMatrix,
{
    if !A.is_square() {
        log::debug!("{op}: matrix is not square {:?}", A.size());
        return Err(MatrixError::NotSquare {
            nrows: A.nrows(),
            ncols: A.ncols(),
        });
    }
    Ok(())
}

#[test]
fn test_shape_checks() {
    use crate::algebra::Matrix;

    let A = Matrix::<f64>::zeros((2, 3));
    let B = Matrix::<f64>::zeros((3, 2));

    assert!(check_same_size("test", &A, &A).is_ok());
    assert_eq!(
        check_same_size("test", &A, &B),
        Err(MatrixError::ShapeMismatch {
            op: "test",
            left: (2, 3),
            right: (3, 2)
        })
    );
    assert!(check_inner_dims("test", &A, &B).is_ok());
    assert!(check_inner_dims("test", &A, &A).is_err());
    assert_eq!(
        check_square("test", &A),
        Err(MatrixError::NotSquare { nrows: 2, ncols: 3 })
    );
}
