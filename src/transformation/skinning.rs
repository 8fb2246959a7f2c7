use crate::math::{Matrix, Real};
use crate::shape::SkinWeight;

/// Computes the world-space matrix of each bone, i.e., `bone_transforms[i] * bind_poses[i]`.
///
/// `bind_poses` are the inverse bind matrices of the mesh. The result is
/// written into `out`, which is cleared first.
pub fn compute_bone_palette(
    bone_transforms: &[Matrix<Real>],
    bind_poses: &[Matrix<Real>],
    out: &mut Vec<Matrix<Real>>,
) {
    out.clear();
    out.extend(
        bone_transforms
            .iter()
            .zip(bind_poses.iter())
            .map(|(bone, bind_pose)| bone * bind_pose),
    );
}

/// Blends the palette matrices referenced by `weight`.
///
/// This is a plain weighted sum of the matrices (linear blend skinning).
/// Influences with a zero weight, or referencing a bone missing from the
/// palette, are ignored.
pub fn blend_bone_matrices(palette: &[Matrix<Real>], weight: &SkinWeight) -> Matrix<Real> {
    let mut result = Matrix::zeros();

    for (bone, w) in weight.bone_indices.iter().zip(weight.weights.iter()) {
        if *w == 0.0 {
            continue;
        }

        if let Some(bone_matrix) = palette.get(*bone as usize) {
            result += bone_matrix * *w;
        }
    }

    result
}
