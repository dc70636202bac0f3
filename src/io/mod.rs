//! Reading and writing of matrices as JSON.
//!
//! A matrix is stored as an object with its row and column counts and
//! its data in row major order, e.g. `{"m":2,"n":2,"data":[1.0,2.0,3.0,4.0]}`.

use crate::algebra::*;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{self, Read, Write};

/// JSON file input and output
pub trait MatrixJSONReadWrite: Sized {
    /// Write to a JSON file
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;

    /// Read from a JSON file.  Returns an `InvalidData` error if the
    /// contents do not describe a well formed matrix.
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

impl<T> MatrixJSONReadWrite for Matrix<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        // size is checked against the data during deserialization
        let mat: Matrix<T> = serde_json::from_str(&buffer)?;
        Ok(mat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom};

    #[test]
    fn test_json_roundtrip() {
        let A = Matrix::from(&[
            [1., -2.5, 3.], //
            [4e-9, 5., 6.00003],
        ]);

        let mut file = tempfile::tempfile().unwrap();
        A.write_to_file(&mut file).unwrap();

        file.seek(SeekFrom::Start(0)).unwrap();
        let B = Matrix::<f64>::read_from_file(&mut file).unwrap();
        assert_eq!(B.size(), (2, 3));
        assert_eq!(A.data(), B.data());
    }

    #[test]
    fn test_json_rejects_bad_length() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(br#"{"m":2,"n":2,"data":[1.0,2.0,3.0]}"#)
            .unwrap();

        file.seek(SeekFrom::Start(0)).unwrap();
        let err = Matrix::<f64>::read_from_file(&mut file).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_json_rejects_overflowing_size() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(br#"{"m":9223372036854775808,"n":2,"data":[]}"#)
            .unwrap();

        file.seek(SeekFrom::Start(0)).unwrap();
        let err = Matrix::<f64>::read_from_file(&mut file).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_deserialize_checks_size() {
        let res = serde_json::from_str::<Matrix<f64>>(r#"{"m":3,"n":3,"data":[1.0]}"#);
        assert!(res.is_err());

        let A: Matrix<f64> = serde_json::from_str(r#"{"m":1,"n":2,"data":[1.0,2.0]}"#).unwrap();
        assert_eq!(A.size(), (1, 2));

        // a resize to zero rows serializes and loads back
        let mut B = Matrix::from(&[[1., 2.]]);
        B.resize_rows(0).unwrap();
        let json = serde_json::to_string(&B).unwrap();
        let C: Matrix<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(C.size(), (0, 2));
    }

    #[test]
    fn test_json_rejects_garbage() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"not a matrix").unwrap();

        file.seek(SeekFrom::Start(0)).unwrap();
        assert!(Matrix::<f64>::read_from_file(&mut file).is_err());
    }
}
