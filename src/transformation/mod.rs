//! Conversion of receiver meshes into convex polygons.

pub use self::polygon_factory::{BuildConfig, BuildStatus, ConvexPolygonFactory};
pub use self::skinning::{blend_bone_matrices, compute_bone_palette};

mod polygon_factory;
mod skinning;
