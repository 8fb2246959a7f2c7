use crate::math::{Point, Real};
use crate::shape::ConvexPolygon;

impl ConvexPolygon {
    /// Intersects the segment `[ray_start, ray_end]` with this polygon, if it is still a triangle.
    ///
    /// Returns `None` if this polygon does not have exactly 3 vertices.
    ///
    /// This is a fast approximate test meant for picking:
    /// - the segment crosses the triangle plane if its endpoints are on
    ///   opposite sides of it, relative to the face normal;
    /// - the crossing point is interpolated from the endpoints' distances to the plane;
    /// - the crossing point is inside of the triangle if it is on the inner
    ///   side of each edge. Points exactly on an edge are considered inside.
    ///
    /// Use [`ConvexPolygon::cast_segment_exact`] when accuracy near the
    /// triangle edges matters.
    pub fn is_intersect_ray_to_triangle(
        &self,
        ray_start: &Point<Real>,
        ray_end: &Point<Real>,
    ) -> Option<Point<Real>> {
        if self.vertex_count() != 3 {
            return None;
        }

        let v0 = self.vertex(0).position;
        let normal = self.face_normal();
        let side = |pt: &Point<Real>| {
            (pt - v0)
                .try_normalize(0.0)
                .map(|dir| dir.dot(&normal))
                .unwrap_or(0.0)
        };

        if side(ray_start) * side(ray_end) >= 0.0 {
            return None;
        }

        let start_dist = (ray_start - v0).dot(&normal).abs();
        let end_dist = (ray_end - v0).dot(&normal).abs();
        let hit = ray_start + (ray_end - ray_start) * (start_dist / (start_dist + end_dist));

        for (vertex, edge) in self.vertices().iter().zip(self.edges()) {
            let edge_side = edge.start_to_end.cross(&(hit - vertex.position));

            if let Some(edge_side) = edge_side.try_normalize(0.0) {
                if edge_side.dot(&normal) < 0.0 {
                    return None;
                }
            }
        }

        Some(hit)
    }

    /// Computes the intersection between the segment `[start, end]` and this
    /// polygon, if it is still a triangle, using barycentric coordinates.
    ///
    /// Returns `None` if this polygon does not have exactly 3 vertices, if
    /// the segment is parallel to the triangle, or if it does not reach it.
    /// Both faces of the triangle are considered.
    pub fn cast_segment_exact(
        &self,
        start: &Point<Real>,
        end: &Point<Real>,
    ) -> Option<Point<Real>> {
        if self.vertex_count() != 3 {
            return None;
        }

        let a = self.vertex(0).position;
        let b = self.vertex(1).position;
        let c = self.vertex(2).position;
        let dir = end - start;

        let ab = b - a;
        let ac = c - a;

        // normal
        let n = ab.cross(&ac);
        let d = n.dot(&dir);

        // the normal and the segment direction are orthogonal
        if d == 0.0 {
            return None;
        }

        let ap = start - a;
        let t = ap.dot(&n);

        // the segment points away from the triangle plane
        if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
            return None;
        }

        let d = d.abs();

        //
        // intersection: compute barycentric coordinates
        //
        let e = -dir.cross(&ap);
        let (v, w) = if t < 0.0 {
            (-ac.dot(&e), ab.dot(&e))
        } else {
            (ac.dot(&e), -ab.dot(&e))
        };

        if v < 0.0 || v > d || w < 0.0 || v + w > d {
            return None;
        }

        let toi = t.abs() / d;

        if toi > 1.0 {
            None
        } else {
            Some(start + dir * toi)
        }
    }
}
