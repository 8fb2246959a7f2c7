pub use self::clip_halfspace_polygon::ClipResult;
pub use self::clip_polygon_infos::clip_polygon_infos;

mod clip_halfspace_polygon;
mod clip_polygon_infos;
