/*!
decal3d
========

**decal3d** computes decal footprints on static and skinned receiver meshes
by clipping the receiver's triangles against the bounding planes of a decal
projection volume.

The pipeline is:

1. [`transformation::ConvexPolygonFactory`] turns receiver meshes into one
   [`shape::ConvexPolygon`] per triangle, in world-space, blending bone
   matrices for skinned receivers. The build is resumable so the host can
   spread it over several frames.
2. Each polygon is clipped in place by every [`shape::ClipPlane`] of the
   decal volume with [`shape::ConvexPolygon::split_and_remove_by_plane`].
3. Whatever survives is the decal footprint.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate arrayvec;
pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix4, Point3, Vector3, Vector4};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The homogeneous transformation matrix type.
    pub use Matrix4 as Matrix;
}
