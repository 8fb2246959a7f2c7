use crate::math::{Matrix, Point, Real, Vector};

/// Extra operations with homogeneous matrices assumed to be affine.
///
/// The last row of the matrix is ignored, so blended matrices (whose last
/// row may not be `(0, 0, 0, 1)`) still transform points without any
/// projective division.
pub trait AffineOps {
    /// Computes `self * (p, 1)`, keeping the first three components.
    fn transform_point_affine(&self, p: &Point<Real>) -> Point<Real>;
    /// Computes `self * (v, 0)`, keeping the first three components.
    fn transform_vector_affine(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl AffineOps for Matrix<Real> {
    #[inline]
    fn transform_point_affine(&self, p: &Point<Real>) -> Point<Real> {
        let linear = self.fixed_view::<3, 3>(0, 0);
        let translation = self.fixed_view::<3, 1>(0, 3);
        Point::from(linear * p.coords + translation)
    }

    #[inline]
    fn transform_vector_affine(&self, v: &Vector<Real>) -> Vector<Real> {
        self.fixed_view::<3, 3>(0, 0) * v
    }
}
