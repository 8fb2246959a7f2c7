use crate::math::Real;

/// Number of bone influences stored per vertex.
pub const MAX_BONE_INFLUENCES: usize = 4;

/// Up to four (bone index, weight) pairs describing how a vertex follows a skeleton.
///
/// Static receivers use [`SkinWeight::default()`], where every weight is zero.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct SkinWeight {
    /// The bone index of each influence.
    pub bone_indices: [u32; MAX_BONE_INFLUENCES],
    /// The weight of each influence.
    pub weights: [Real; MAX_BONE_INFLUENCES],
}

impl SkinWeight {
    /// Creates a skin weight from its four influences.
    #[inline]
    pub fn new(
        bone_indices: [u32; MAX_BONE_INFLUENCES],
        weights: [Real; MAX_BONE_INFLUENCES],
    ) -> Self {
        Self {
            bone_indices,
            weights,
        }
    }

    /// A skin weight fully bound to the single bone `bone`.
    #[inline]
    pub fn single(bone: u32) -> Self {
        Self {
            bone_indices: [bone, 0, 0, 0],
            weights: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// The sum of the four weights.
    #[inline]
    pub fn weight_sum(&self) -> Real {
        self.weights.iter().sum()
    }

    /// Does the weights sum to one (up to floating-point errors)?
    pub fn is_normalized(&self) -> bool {
        relative_eq!(self.weight_sum(), 1.0, epsilon = 1.0e-5)
    }

    /// Rescales the weights so they sum to one.
    ///
    /// Weights summing to zero (or less) are left untouched.
    pub fn normalize(&mut self) {
        let sum = self.weight_sum();

        if sum > 0.0 {
            let inv_sum = 1.0 / sum;
            self.weights.iter_mut().for_each(|w| *w *= inv_sum);
        }
    }

    /// Interpolates from `self` toward `other` by the factor `t`.
    ///
    /// `self` is the base: the result always carries its bone indices. A slot
    /// is blended only if both weights reference the same bone at that slot,
    /// otherwise the base weight is kept as-is. The result is renormalized.
    pub fn interpolate(&self, other: &Self, t: Real) -> Self {
        let mut result = *self;

        for k in 0..MAX_BONE_INFLUENCES {
            if self.bone_indices[k] == other.bone_indices[k] {
                result.weights[k] = self.weights[k] + (other.weights[k] - self.weights[k]) * t;
            }
        }

        result.normalize();
        result
    }
}
