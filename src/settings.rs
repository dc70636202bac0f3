//! Numerical tolerances used by matrix comparison and inversion.
//!
//! Settings are built with [`MatrixSettingsBuilder`]:
//!
//! ```
//! use densemat::settings::*;
//!
//! let settings = MatrixSettingsBuilder::<f64>::default()
//!     .singular_tolerance(1e-12)
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.eq_tolerance, 1e-7);
//! ```

use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Tolerances for approximate equality and singularity detection

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixSettings<T: FloatT> {
    ///absolute elementwise tolerance for matrix equality
    #[builder(default = "EQ_TOLERANCE.as_T()")]
    pub eq_tolerance: T,

    ///inverse fails if |det| is below this value
    #[builder(default = "(1e-7).as_T()")]
    pub singular_tolerance: T,
}

impl<T> Default for MatrixSettings<T>
where
    T: FloatT,
{
    fn default() -> MatrixSettings<T> {
        MatrixSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> MatrixSettings<T>
where
    T: FloatT,
{
    /// Checks that all tolerances are finite and non-negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_tolerance("eq_tolerance", self.eq_tolerance)?;
        validate_tolerance("singular_tolerance", self.singular_tolerance)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for MatrixSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        MatrixSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> MatrixSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.eq_tolerance {
            validate_tolerance("eq_tolerance", tol)?;
        }
        if let Some(tol) = self.singular_tolerance {
            validate_tolerance("singular_tolerance", tol)?;
        }
        Ok(())
    }
}

fn validate_tolerance<T: FloatT>(field: &'static str, tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

#[test]
fn test_settings_defaults() {
    let settings = MatrixSettings::<f64>::default();
    assert_eq!(settings.eq_tolerance, 1e-7);
    assert_eq!(settings.singular_tolerance, 1e-7);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validate() {
    let settings = MatrixSettingsBuilder::<f64>::default()
        .eq_tolerance(-1.)
        .build();
    assert!(settings.is_err());

    let settings = MatrixSettingsBuilder::<f64>::default()
        .singular_tolerance(f64::NAN)
        .build();
    assert!(settings.is_err());

    let mut settings = MatrixSettings::<f64>::default();
    settings.eq_tolerance = f64::INFINITY;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("eq_tolerance"))
    );
}

#[test]
fn test_settings_used_by_approx_eq() {
    let A = Matrix::from(&[[1., 2.]]);
    let B = Matrix::from(&[[1., 2. + 1e-4]]);
    let loose = MatrixSettingsBuilder::default()
        .eq_tolerance(1e-3)
        .build()
        .unwrap();
    assert!(!A.approx_eq(&B));
    assert!(A.approx_eq_with(&B, &loose));
}
