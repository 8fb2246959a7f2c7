use crate::query::ClipError;
use crate::shape::{ClipPlane, ConvexPolygonInfo};

/// Clips every polygon of `infos` by each plane of `planes`, in order.
///
/// Polygons already flagged as outside of the clip space are skipped. A
/// polygon that ends up entirely outside of one of the planes gets its
/// `is_outside_clip_space` flag set and is not clipped by the remaining
/// planes. Returns the number of polygons still inside of the clip space.
///
/// Stops at the first polygon that cannot be clipped without exceeding its
/// vertex capacity. Polygons before it have been fully processed.
pub fn clip_polygon_infos(
    infos: &mut [ConvexPolygonInfo],
    planes: &[ClipPlane],
) -> Result<usize, ClipError> {
    let mut num_inside = 0;

    for info in infos.iter_mut().filter(|info| !info.is_outside_clip_space) {
        for plane in planes {
            if info
                .polygon
                .split_and_remove_by_plane(plane)?
                .all_vertices_outside()
            {
                info.is_outside_clip_space = true;
                break;
            }
        }

        if !info.is_outside_clip_space {
            num_inside += 1;
        }
    }

    Ok(num_inside)
}
