use crate::shape::ConvexPolygon;

/// A convex polygon with the bookkeeping needed while a decal volume is applied.
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolygonInfo {
    /// The polygon being clipped.
    pub polygon: ConvexPolygon,
    /// Set once the polygon has been fully clipped away by one of the volume planes.
    pub is_outside_clip_space: bool,
}

impl ConvexPolygonInfo {
    /// Wraps a polygon that has not been clipped away yet.
    #[inline]
    pub fn new(polygon: ConvexPolygon) -> Self {
        Self {
            polygon,
            is_outside_clip_space: false,
        }
    }
}

impl From<ConvexPolygon> for ConvexPolygonInfo {
    fn from(polygon: ConvexPolygon) -> Self {
        Self::new(polygon)
    }
}
