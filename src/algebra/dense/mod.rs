mod cofactor;
mod core;
mod matrix_math;
mod ops;
mod resize;

pub use self::matrix_math::EQ_TOLERANCE;
