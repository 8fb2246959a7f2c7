//! Receiver surfaces: the meshes decals are projected on.

use crate::math::{Matrix, Point, Real, Vector};
use crate::shape::SkinWeight;

/// Opaque handle to the receiver surface a polygon was extracted from.
///
/// The crate never interprets it: it is up to the caller to map it back to
/// its own renderer or entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ReceiverId(pub u32);

/// Indicates an inconsistency in the data of a receiver mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReceiverMeshError {
    /// The number of normals does not match the number of vertices.
    #[error("the mesh has {vertices} vertices but {normals} normals.")]
    NormalCountMismatch {
        /// The number of vertex positions.
        vertices: usize,
        /// The number of vertex normals.
        normals: usize,
    },
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} but there are only {vertices} vertices.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices.
        vertices: usize,
    },
    /// The number of skin weights does not match the number of vertices.
    #[error("the mesh has {vertices} vertices but {weights} skin weights.")]
    SkinWeightCountMismatch {
        /// The number of vertex positions.
        vertices: usize,
        /// The number of skin weights.
        weights: usize,
    },
    /// A skin weight references a bone without bind pose.
    #[error("the vertex {vertex} is influenced by the bone {bone} but there are only {bones} bind poses.")]
    BoneIndexOutOfBounds {
        /// The offending vertex.
        vertex: u32,
        /// The out-of-bounds bone index.
        bone: u32,
        /// The number of bind poses.
        bones: usize,
    },
    /// The number of bone transforms does not match the number of bind poses.
    #[error("the receiver has {transforms} bone transforms but its mesh has {bind_poses} bind poses.")]
    BoneCountMismatch {
        /// The number of bone transforms.
        transforms: usize,
        /// The number of bind poses.
        bind_poses: usize,
    },
    /// A skinned receiver with bones was given a mesh without skinning data.
    #[error("the receiver has bones but its mesh has no skinning data.")]
    MissingSkin,
}

/// The skinning data of a mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshSkin {
    weights: Vec<SkinWeight>,
    bind_poses: Vec<Matrix<Real>>,
}

impl MeshSkin {
    /// Creates skinning data from per-vertex weights and per-bone inverse bind matrices.
    ///
    /// Every influence with a non-zero weight must reference an existing bind pose.
    pub fn new(
        weights: Vec<SkinWeight>,
        bind_poses: Vec<Matrix<Real>>,
    ) -> Result<Self, ReceiverMeshError> {
        for (vertex, weight) in weights.iter().enumerate() {
            for (bone, w) in weight.bone_indices.iter().zip(weight.weights.iter()) {
                if *w != 0.0 && *bone as usize >= bind_poses.len() {
                    return Err(ReceiverMeshError::BoneIndexOutOfBounds {
                        vertex: vertex as u32,
                        bone: *bone,
                        bones: bind_poses.len(),
                    });
                }
            }
        }

        Ok(Self {
            weights,
            bind_poses,
        })
    }

    /// The skin weight of each vertex.
    #[inline]
    pub fn weights(&self) -> &[SkinWeight] {
        &self.weights
    }

    /// The inverse bind matrix of each bone.
    #[inline]
    pub fn bind_poses(&self) -> &[Matrix<Real>] {
        &self.bind_poses
    }
}

/// The geometry of a receiver surface, in its local space.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiverMesh {
    positions: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    indices: Vec<[u32; 3]>,
    skin: Option<MeshSkin>,
}

impl ReceiverMesh {
    /// Creates a receiver mesh from its vertices and counter-clockwise triangles.
    pub fn new(
        positions: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, ReceiverMeshError> {
        if positions.len() != normals.len() {
            return Err(ReceiverMeshError::NormalCountMismatch {
                vertices: positions.len(),
                normals: normals.len(),
            });
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= positions.len()) {
                return Err(ReceiverMeshError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    index: *index,
                    vertices: positions.len(),
                });
            }
        }

        Ok(Self {
            positions,
            normals,
            indices,
            skin: None,
        })
    }

    /// Attaches skinning data to this mesh.
    pub fn with_skin(mut self, skin: MeshSkin) -> Result<Self, ReceiverMeshError> {
        if skin.weights.len() != self.positions.len() {
            return Err(ReceiverMeshError::SkinWeightCountMismatch {
                vertices: self.positions.len(),
                weights: skin.weights.len(),
            });
        }

        self.skin = Some(skin);
        Ok(self)
    }

    /// The vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point<Real>] {
        &self.positions
    }

    /// The vertex normals.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The triangles.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The skinning data, if any.
    #[inline]
    pub fn skin(&self) -> Option<&MeshSkin> {
        self.skin.as_ref()
    }

    /// The number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

/// A mesh rendered rigidly with a local-to-world transform.
#[derive(Clone, Debug)]
pub struct StaticReceiver<'a> {
    mesh: &'a ReceiverMesh,
    local_to_world: Matrix<Real>,
    id: ReceiverId,
}

impl<'a> StaticReceiver<'a> {
    /// Creates a static receiver.
    pub fn new(mesh: &'a ReceiverMesh, local_to_world: Matrix<Real>, id: ReceiverId) -> Self {
        Self {
            mesh,
            local_to_world,
            id,
        }
    }

    /// The mesh geometry.
    #[inline]
    pub fn mesh(&self) -> &'a ReceiverMesh {
        self.mesh
    }

    /// The current local-to-world transform of the renderer.
    #[inline]
    pub fn local_to_world(&self) -> &Matrix<Real> {
        &self.local_to_world
    }

    /// The handle copied into every generated polygon.
    #[inline]
    pub fn id(&self) -> ReceiverId {
        self.id
    }
}

/// A mesh deformed by a skeleton.
#[derive(Clone, Debug)]
pub struct SkinnedReceiver<'a> {
    mesh: &'a ReceiverMesh,
    local_to_world: Matrix<Real>,
    bone_transforms: Option<Vec<Matrix<Real>>>,
    id: ReceiverId,
}

impl<'a> SkinnedReceiver<'a> {
    /// A skinned receiver without root bone.
    ///
    /// It is treated as a rigid mesh placed with `local_to_world` and its
    /// polygons get zero skin weights.
    pub fn without_root_bone(
        mesh: &'a ReceiverMesh,
        local_to_world: Matrix<Real>,
        id: ReceiverId,
    ) -> Self {
        Self {
            mesh,
            local_to_world,
            bone_transforms: None,
            id,
        }
    }

    /// A skinned receiver with the current local-to-world transform of each bone.
    ///
    /// There must be one bone transform per bind pose of the mesh skin.
    pub fn new(
        mesh: &'a ReceiverMesh,
        local_to_world: Matrix<Real>,
        bone_transforms: Vec<Matrix<Real>>,
        id: ReceiverId,
    ) -> Result<Self, ReceiverMeshError> {
        let skin = mesh.skin().ok_or(ReceiverMeshError::MissingSkin)?;

        if skin.bind_poses().len() != bone_transforms.len() {
            return Err(ReceiverMeshError::BoneCountMismatch {
                transforms: bone_transforms.len(),
                bind_poses: skin.bind_poses().len(),
            });
        }

        Ok(Self {
            mesh,
            local_to_world,
            bone_transforms: Some(bone_transforms),
            id,
        })
    }

    /// The mesh geometry.
    #[inline]
    pub fn mesh(&self) -> &'a ReceiverMesh {
        self.mesh
    }

    /// The local-to-world transform of the renderer.
    #[inline]
    pub fn local_to_world(&self) -> &Matrix<Real> {
        &self.local_to_world
    }

    /// The bone transforms, or `None` if this receiver has no root bone.
    #[inline]
    pub fn bone_transforms(&self) -> Option<&[Matrix<Real>]> {
        self.bone_transforms.as_deref()
    }

    /// The handle copied into every generated polygon.
    #[inline]
    pub fn id(&self) -> ReceiverId {
        self.id
    }
}
