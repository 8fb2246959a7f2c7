use crate::math::{Point, Real, Vector};
use crate::shape::{PolygonVertex, SkinWeight};

/// A directed edge of a [`ConvexPolygon`](crate::shape::ConvexPolygon).
///
/// The edge stores both endpoints' attributes so a new vertex can be
/// interpolated on it without going back to the polygon.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Edge {
    /// Position of the first endpoint.
    pub start_pos: Point<Real>,
    /// Position of the second endpoint.
    pub end_pos: Point<Real>,
    /// Normal at the first endpoint.
    pub start_normal: Vector<Real>,
    /// Normal at the second endpoint.
    pub end_normal: Vector<Real>,
    /// Skin weight of the first endpoint.
    pub start_weight: SkinWeight,
    /// Skin weight of the second endpoint.
    pub end_weight: SkinWeight,
    /// `end_pos - start_pos`.
    pub start_to_end: Vector<Real>,
}

impl Edge {
    /// Builds the edge going from `start` to `end`.
    #[inline]
    pub fn new(start: &PolygonVertex, end: &PolygonVertex) -> Self {
        Self {
            start_pos: start.position,
            end_pos: end.position,
            start_normal: start.normal,
            end_normal: end.normal,
            start_weight: start.weight,
            end_weight: end.weight,
            start_to_end: end.position - start.position,
        }
    }

    /// The first endpoint of this edge.
    #[inline]
    pub fn start(&self) -> PolygonVertex {
        PolygonVertex::new(self.start_pos, self.start_normal, self.start_weight)
    }

    /// The second endpoint of this edge.
    #[inline]
    pub fn end(&self) -> PolygonVertex {
        PolygonVertex::new(self.end_pos, self.end_normal, self.end_weight)
    }

    /// The length of this edge.
    #[inline]
    pub fn length(&self) -> Real {
        self.start_to_end.norm()
    }
}
