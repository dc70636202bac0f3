#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use densemat::{algebra::*, io::*};
    use std::io::{Seek, SeekFrom};

    let A = Matrix::from(&[
        [2., 5., 7.],  //
        [6., 3., 4.],  //
        [5., -2., -3.],
    ]);

    // write the matrix to a file
    let mut file = tempfile::tempfile().unwrap();
    A.write_to_file(&mut file).unwrap();

    // read the matrix from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let B = Matrix::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(A, B);
    assert_eq!(B.inverse().unwrap()[(1, 0)], -38.);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_settings() {
    use densemat::settings::*;

    let settings = MatrixSettingsBuilder::<f64>::default()
        .singular_tolerance(1e-10)
        .build()
        .unwrap();
    let json = serde_json::to_string(&settings).unwrap();
    let settings2: MatrixSettings<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, settings2);

    // missing fields take their defaults
    let settings3: MatrixSettings<f64> = serde_json::from_str("{}").unwrap();
    assert_eq!(settings3, MatrixSettings::default());
}
