use crate::math::Real;
use crate::query::ClipError;
use crate::shape::{ClipPlane, ConvexPolygon, Edge, PolygonVertex, MAX_VERTICES};
use num::Zero;

/// The outcome of clipping a convex polygon by a half-space.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClipResult {
    /// Every vertex was inside of the half-space: the polygon was not modified.
    Unchanged,
    /// The polygon crossed the plane and its outside part was removed.
    Clipped,
    /// Every vertex was outside of the half-space: the polygon was not modified
    /// and should be discarded by the caller.
    AllOutside,
}

impl ClipResult {
    /// Was the polygon entirely outside of the half-space?
    #[inline]
    pub fn all_vertices_outside(self) -> bool {
        self == ClipResult::AllOutside
    }
}

impl ConvexPolygon {
    /// Removes the part of this polygon lying outside of `plane`.
    ///
    /// A point `p` is inside of the plane if `plane.eval_point(p) >= 0.0`. The
    /// outside vertices are replaced by two new vertices interpolated on the
    /// edges crossing the plane, so the vertex count changes by
    /// `2 - number_of_outside_vertices`.
    ///
    /// If every vertex is outside, the polygon is left untouched and
    /// [`ClipResult::AllOutside`] is returned. If the result would not fit
    /// into a convex polygon, the polygon is left untouched and an error is
    /// returned.
    pub fn split_and_remove_by_plane(
        &mut self,
        plane: &ClipPlane,
    ) -> Result<ClipResult, ClipError> {
        let n = self.vertex_count();
        let mut outside = [false; MAX_VERTICES];
        let mut num_outside = 0;

        for (i, vertex) in self.vertices().iter().enumerate() {
            if plane.eval_point(&vertex.position) < 0.0 {
                outside[i] = true;
                num_outside += 1;
            }
        }

        if num_outside == n {
            return Ok(ClipResult::AllOutside);
        }

        if num_outside == 0 {
            return Ok(ClipResult::Unchanged);
        }

        let new_len = n + 2 - num_outside;
        if new_len > MAX_VERTICES {
            log::debug!(
                "Polygon clipping needs {} vertices, more than the supported {}.",
                new_len,
                MAX_VERTICES
            );
            return Err(ClipError::CapacityExceeded {
                required: new_len,
                capacity: MAX_VERTICES,
            });
        }

        // The polygon is convex so the outside vertices form a single run.
        // Find the first vertex of that run.
        let remove_start = (0..n)
            .find(|&i| outside[i] && !outside[(i + n - 1) % n])
            .unwrap_or(0);
        let remove_end = (remove_start + num_outside - 1) % n;

        let entering = self.edges[(remove_start + n - 1) % n];
        let exiting = self.edges[remove_end];
        let new_start = split_entering_edge(plane, &entering);
        let new_end = split_exiting_edge(plane, &exiting);

        // NOTE: the capacity was checked above so none of the ring insertions can fail.
        if remove_start + num_outside > n {
            // The outside run wraps through the index 0: move the remaining
            // vertices to the front and append the new ones.
            let remain_start = remove_end + 1;
            self.ring.rotate_to_start(remain_start);
            self.ring.truncate(n - num_outside);
            let _ = self.ring.push(new_start);
            let _ = self.ring.push(new_end);
        } else {
            self.ring.remove_range(remove_start, num_outside);
            let _ = self.ring.insert_at(remove_start, new_end);
            let _ = self.ring.insert_at(remove_start, new_start);
        }

        self.rebuild_edges();
        Ok(ClipResult::Clipped)
    }
}

/// The new vertex on an edge going from an inside vertex to an outside vertex.
fn split_entering_edge(plane: &ClipPlane, edge: &Edge) -> PolygonVertex {
    let t = crossing_parameter(
        plane.eval_point(&edge.end_pos),
        plane.eval_vector(&edge.start_to_end),
    );
    interpolate_vertex(&edge.end(), &edge.start(), t)
}

/// The new vertex on an edge going from an outside vertex to an inside vertex.
fn split_exiting_edge(plane: &ClipPlane, edge: &Edge) -> PolygonVertex {
    let t = crossing_parameter(
        plane.eval_point(&edge.start_pos),
        plane.eval_vector(&-edge.start_to_end),
    );
    interpolate_vertex(&edge.start(), &edge.end(), t)
}

/// The interpolation parameter where the plane is crossed.
///
/// An edge (numerically) parallel to the plane yields the outside endpoint.
#[inline]
fn crossing_parameter(outside_dist: Real, edge_dist: Real) -> Real {
    if edge_dist.is_zero() {
        0.0
    } else {
        outside_dist / edge_dist
    }
}

/// Interpolates from `base` toward `other`.
///
/// The skin weight keeps the bone indices of `base`.
fn interpolate_vertex(base: &PolygonVertex, other: &PolygonVertex, t: Real) -> PolygonVertex {
    let position = base.position.lerp(&other.position, t);
    let normal = base.normal.lerp(&other.normal, t);
    let normal = normal.try_normalize(0.0).unwrap_or(normal);
    let weight = base.weight.interpolate(&other.weight, t);

    PolygonVertex::new(position, normal, weight)
}
