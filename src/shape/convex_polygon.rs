use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{Edge, PolygonVertex, ReceiverId, VertexRing, MAX_VERTICES};
use arrayvec::ArrayVec;

/// A planar convex polygon extracted from a receiver mesh.
///
/// It starts its life as one triangle of the receiver and is then clipped
/// in place by the planes of a decal volume (see
/// [`ConvexPolygon::split_and_remove_by_plane`]). It holds at most
/// [`MAX_VERTICES`] vertices.
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolygon {
    pub(crate) ring: VertexRing,
    pub(crate) edges: ArrayVec<Edge, MAX_VERTICES>,
    face_normal: Vector<Real>,
    receiver: ReceiverId,
}

impl ConvexPolygon {
    /// Creates a convex polygon from a triangle.
    ///
    /// The face normal is computed from the counter-clockwise winding `a, b, c`.
    pub fn from_triangle(vertices: [PolygonVertex; 3], receiver: ReceiverId) -> Self {
        let mut ring = VertexRing::new();
        for v in vertices {
            // Can't fail: three vertices always fit.
            let _ = ring.push(v);
        }

        Self::from_ring(ring, receiver)
    }

    /// Creates a convex polygon from a counter-clockwise convex vertex loop.
    ///
    /// Convexity and planarity are not checked. The face normal is computed
    /// from the first three vertices.
    /// Returns `None` if there are less than 3 vertices or more than [`MAX_VERTICES`].
    pub fn from_convex_vertices(vertices: &[PolygonVertex], receiver: ReceiverId) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        let ring = VertexRing::from_slice(vertices).ok()?;
        Some(Self::from_ring(ring, receiver))
    }

    fn from_ring(ring: VertexRing, receiver: ReceiverId) -> Self {
        let [a, b, c] = [ring.wrapped(0), ring.wrapped(1), ring.wrapped(2)].map(|v| v.position);
        let face_normal = (b - a)
            .cross(&(c - a))
            .try_normalize(DEFAULT_EPSILON)
            .unwrap_or_else(Vector::zeros);

        let mut result = Self {
            ring,
            edges: ArrayVec::new(),
            face_normal,
            receiver,
        };
        result.rebuild_edges();
        result
    }

    /// Recomputes every edge from the current vertex ring.
    pub(crate) fn rebuild_edges(&mut self) {
        self.edges.clear();

        for i in 0..self.ring.len() {
            self.edges
                .push(Edge::new(self.ring.wrapped(i), self.ring.wrapped(i + 1)));
        }
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.ring.len()
    }

    /// The vertices of this polygon, in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> &[PolygonVertex] {
        self.ring.as_slice()
    }

    /// The vertex at index `i`.
    #[inline]
    pub fn vertex(&self, i: usize) -> &PolygonVertex {
        &self.ring.as_slice()[i]
    }

    /// The positions of the vertices of this polygon.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.ring.as_slice().iter().map(|v| v.position)
    }

    /// The edges of this polygon.
    ///
    /// The edge `i` goes from the vertex `i` to the vertex `(i + 1) % self.vertex_count()`.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The normal of the triangle this polygon was created from.
    ///
    /// It is not recomputed by clipping. It is zero if the original triangle was degenerate.
    #[inline]
    pub fn face_normal(&self) -> Vector<Real> {
        self.face_normal
    }

    /// The receiver surface this polygon was extracted from.
    #[inline]
    pub fn receiver(&self) -> ReceiverId {
        self.receiver
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        let vertices = self.ring.as_slice();
        let origin = vertices[0].position;

        vertices[1..]
            .windows(2)
            .map(|w| (w[0].position - origin).cross(&(w[1].position - origin)).norm())
            .sum::<Real>()
            * 0.5
    }

    /// The barycenter of the vertices of this polygon.
    pub fn center(&self) -> Point<Real> {
        let sum = self
            .positions()
            .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
        Point::from(sum / self.vertex_count() as Real)
    }
}
