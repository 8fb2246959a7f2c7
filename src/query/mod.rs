//! Non-persistent geometric queries on convex polygons.
//!
//! * [`ConvexPolygon::split_and_remove_by_plane`] clips a polygon by a half-space, in place.
//! * [`clip_polygon_infos`] applies every plane of a decal volume to a set of polygons.
//! * [`ConvexPolygon::is_intersect_ray_to_triangle`] and
//!   [`ConvexPolygon::cast_segment_exact`] intersect a segment with a triangle.
//!
//! [`ConvexPolygon::split_and_remove_by_plane`]: crate::shape::ConvexPolygon::split_and_remove_by_plane
//! [`ConvexPolygon::is_intersect_ray_to_triangle`]: crate::shape::ConvexPolygon::is_intersect_ray_to_triangle
//! [`ConvexPolygon::cast_segment_exact`]: crate::shape::ConvexPolygon::cast_segment_exact

pub use self::clip::{clip_polygon_infos, ClipResult};
pub use self::error::ClipError;

mod clip;
mod error;
mod ray;
