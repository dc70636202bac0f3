#![allow(non_snake_case)]
use densemat::algebra::*;

// a collection of tests to ensure that operations on data of
// incompatible dimension are rejected and leave the matrix intact

fn api_dim_check_data() -> (Matrix<f64>, Matrix<f64>, Matrix<f64>) {
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);
    let B = Matrix::from(&[
        [1., 0.], //
        [0., 1.], //
    ]);
    let C = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
        [5., 6.], //
    ]);
    (A, B, C)
}

#[test]
fn api_dim_check_add() {
    let (mut A, B, _) = api_dim_check_data();
    let before = A.clone();
    assert_eq!(
        A.add_matrix(&B).unwrap_err(),
        MatrixError::ShapeMismatch {
            op: "add",
            left: (2, 3),
            right: (2, 2)
        }
    );
    assert_eq!(A, before);
}

#[test]
fn api_dim_check_subtract() {
    let (mut A, _, C) = api_dim_check_data();
    let before = A.clone();
    assert!(A.subtract(&C).is_err());
    assert_eq!(A, before);
}

#[test]
fn api_dim_check_multiply() {
    let (mut A, B, C) = api_dim_check_data();
    let before = A.clone();

    // 2x3 * 2x2 is not defined
    assert!(matches!(
        A.multiply(&B),
        Err(MatrixError::ShapeMismatch { op: "multiply", .. })
    ));
    assert_eq!(A, before);

    // 2x3 * 3x2 is
    A.multiply(&C).unwrap();
    assert_eq!(A, Matrix::from(&[[22., 28.], [49., 64.]]));
}

#[test]
fn api_dim_check_square_only() {
    let (A, _, _) = api_dim_check_data();
    let err = MatrixError::NotSquare { nrows: 2, ncols: 3 };
    assert_eq!(A.determinant().unwrap_err(), err);
    assert_eq!(A.cofactors().unwrap_err(), err);
    assert_eq!(A.adjugate().unwrap_err(), err);
    assert_eq!(A.inverse().unwrap_err(), err);
}

#[test]
fn api_dim_check_out_of_range() {
    let (mut A, _, _) = api_dim_check_data();
    assert!(A.get(2, 0).is_err());
    assert!(A.get(0, 3).is_err());
    assert!(A.set(5, 0, 1.).is_err());
    assert!(A.get_mut(1, 2).is_ok());
}

#[test]
fn api_dim_check_resize() {
    let (mut A, _, _) = api_dim_check_data();
    assert_eq!(A.resize_rows(-1).unwrap_err(), MatrixError::InvalidDimension);
    assert_eq!(A.resize_cols(-3).unwrap_err(), MatrixError::InvalidDimension);
    assert_eq!(A.size(), (2, 3));
}

#[test]
#[should_panic]
fn api_dim_check_sub_operator() {
    let (A, B, _) = api_dim_check_data();
    let _ = A - B;
}

#[test]
#[should_panic]
fn api_dim_check_mul_assign_operator() {
    let (mut A, B, _) = api_dim_check_data();
    A *= &B;
}
