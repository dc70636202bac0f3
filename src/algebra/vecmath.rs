use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;
    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        zip(&mut *self, x).for_each(|(y, x)| *y = a * (*x) + b * (*y));
        self
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());

        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn all_close(&self, y: &[T], tol: T) -> bool {
        if self.len() != y.len() {
            return false;
        }
        // NB: a NaN difference compares false, so NaNs are never close
        zip(self, y).all(|(&x, &y)| (x - y).abs() < tol)
    }
}
