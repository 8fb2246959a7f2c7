use crate::math::{Point, Real, Vector};
use crate::shape::SkinWeight;
use arrayvec::{ArrayVec, CapacityError};

/// The maximum number of vertices a [`ConvexPolygon`](crate::shape::ConvexPolygon) can hold.
pub const MAX_VERTICES: usize = 64;

/// A vertex of a convex polygon.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct PolygonVertex {
    /// The world-space position.
    pub position: Point<Real>,
    /// The world-space normal.
    pub normal: Vector<Real>,
    /// How this vertex follows the receiver's skeleton.
    pub weight: SkinWeight,
}

impl PolygonVertex {
    /// Creates a new vertex.
    #[inline]
    pub fn new(position: Point<Real>, normal: Vector<Real>, weight: SkinWeight) -> Self {
        Self {
            position,
            normal,
            weight,
        }
    }
}

/// An ordered, fixed-capacity ring of polygon vertices.
///
/// Indices passed to [`VertexRing::wrapped`] are taken modulo the ring
/// length. The other operations take plain (non-wrapping) indices.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct VertexRing {
    vertices: ArrayVec<PolygonVertex, MAX_VERTICES>,
}

impl VertexRing {
    /// An empty ring.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ring from the given vertices.
    ///
    /// Fails if there are more than [`MAX_VERTICES`] vertices.
    pub fn from_slice(vertices: &[PolygonVertex]) -> Result<Self, CapacityError> {
        let mut ring = Self::new();
        ring.vertices.try_extend_from_slice(vertices)?;
        Ok(ring)
    }

    /// The number of vertices in this ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Is this ring empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The number of vertices that can still be added to this ring.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.vertices.remaining_capacity()
    }

    /// The vertices, in ring order.
    #[inline]
    pub fn as_slice(&self) -> &[PolygonVertex] {
        &self.vertices
    }

    /// The vertex at `i` modulo the ring length.
    ///
    /// Panics if the ring is empty.
    #[inline]
    pub fn wrapped(&self, i: usize) -> &PolygonVertex {
        &self.vertices[i % self.vertices.len()]
    }

    /// Appends a vertex at the end of the ring.
    #[inline]
    pub fn push(&mut self, vertex: PolygonVertex) -> Result<(), CapacityError<PolygonVertex>> {
        self.vertices.try_push(vertex)
    }

    /// Inserts a vertex at `index`, shifting all the subsequent vertices by one.
    #[inline]
    pub fn insert_at(
        &mut self,
        index: usize,
        vertex: PolygonVertex,
    ) -> Result<(), CapacityError<PolygonVertex>> {
        self.vertices.try_insert(index, vertex)
    }

    /// Removes `count` vertices starting at `start`, shifting the subsequent vertices back.
    #[inline]
    pub fn remove_range(&mut self, start: usize, count: usize) {
        let _ = self.vertices.drain(start..start + count);
    }

    /// Rotates the ring so the vertex currently at `start` becomes the first one.
    ///
    /// The cyclic order of the vertices is unchanged.
    #[inline]
    pub fn rotate_to_start(&mut self, start: usize) {
        if !self.vertices.is_empty() {
            let len = self.vertices.len();
            self.vertices.rotate_left(start % len);
        }
    }

    /// Keeps only the first `len` vertices.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.vertices.truncate(len);
    }
}
