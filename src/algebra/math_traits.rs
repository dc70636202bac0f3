use super::FloatT;

// All elementwise matrix arithmetic goes through these core
// traits, which are implemented generically for floats of type FloatT.

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise negation of entries.
    fn negate(&mut self) -> &mut Self;

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// True if every elementwise difference is strictly smaller than `tol`
    /// in absolute value.  False for vectors of different length.
    fn all_close(&self, y: &Self, tol: Self::T) -> bool;
}

/// Matrix operations for matrices of [`FloatT`](crate::algebra::FloatT)

pub trait MatrixMath {
    type T: FloatT;

    /// Scale a matrix by a constant, in place
    fn scale(&mut self, c: Self::T);

    /// Negate all entries of a matrix, in place
    fn negate(&mut self);
}
