//! Half-space plane used to clip convex polygons.
use crate::math::{Point, Real, Vector, Vector4};

/// A half-space bounding a decal projection volume.
///
/// The plane is stored as the coefficients `(a, b, c, d)` of
/// `a * x + b * y + c * z + d`. A point is inside of the half-space if this
/// expression is non-negative.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ClipPlane {
    /// The plane coefficients `(a, b, c, d)`.
    pub coeffs: Vector4<Real>,
}

impl ClipPlane {
    /// Builds a clip plane from its four coefficients.
    #[inline]
    pub fn new(a: Real, b: Real, c: Real, d: Real) -> Self {
        Self {
            coeffs: Vector4::new(a, b, c, d),
        }
    }

    /// Builds the clip plane going through `point` and keeping the side `inward_normal` points to.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, inward_normal: &Vector<Real>) -> Self {
        let d = -inward_normal.dot(&point.coords);
        Self::new(inward_normal.x, inward_normal.y, inward_normal.z, d)
    }

    /// The `(a, b, c)` part of the coefficients.
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        self.coeffs.xyz()
    }

    /// Evaluates the plane equation at `pt`, i.e., `dot(coeffs, (pt, 1))`.
    ///
    /// This is a signed distance only if the normal is unit-length.
    #[inline]
    pub fn eval_point(&self, pt: &Point<Real>) -> Real {
        self.coeffs.dot(&pt.to_homogeneous())
    }

    /// Evaluates the plane equation on a direction, i.e., `dot(coeffs, (dir, 0))`.
    #[inline]
    pub fn eval_vector(&self, dir: &Vector<Real>) -> Real {
        self.coeffs.dot(&dir.to_homogeneous())
    }

    /// Is `pt` inside of this half-space?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.eval_point(pt) >= 0.0
    }

    /// The six inward-facing planes of a box centered at `center`.
    ///
    /// The box axes are the columns of `axes` (assumed orthonormal) and its
    /// half-extents along them are `half_extents`.
    pub fn box_planes(
        center: &Point<Real>,
        axes: &[Vector<Real>; 3],
        half_extents: &Vector<Real>,
    ) -> [Self; 6] {
        let plane = |axis: usize, sign: Real| {
            let outward = axes[axis] * sign;
            Self::from_point_and_normal(&(center + outward * half_extents[axis]), &-outward)
        };

        [
            plane(0, 1.0),
            plane(0, -1.0),
            plane(1, 1.0),
            plane(1, -1.0),
            plane(2, 1.0),
            plane(2, -1.0),
        ]
    }
}
