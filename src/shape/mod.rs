//! Shapes manipulated while building decal footprints.

pub use self::clip_plane::ClipPlane;
pub use self::convex_polygon::ConvexPolygon;
pub use self::convex_polygon_info::ConvexPolygonInfo;
pub use self::edge::Edge;
pub use self::receiver_mesh::{
    MeshSkin, ReceiverId, ReceiverMesh, ReceiverMeshError, SkinnedReceiver, StaticReceiver,
};
pub use self::skin_weight::{SkinWeight, MAX_BONE_INFLUENCES};
pub use self::vertex_ring::{PolygonVertex, VertexRing, MAX_VERTICES};

mod clip_plane;
mod convex_polygon;
mod convex_polygon_info;
mod edge;
mod receiver_mesh;
mod skin_weight;
mod vertex_ring;
