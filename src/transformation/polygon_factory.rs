use crate::math::{Matrix, Real, Vector};
use crate::shape::{
    ConvexPolygon, PolygonVertex, ReceiverId, ReceiverMesh, SkinWeight, SkinnedReceiver,
    StaticReceiver,
};
use crate::transformation::{blend_bone_matrices, compute_bone_palette};
use crate::utils::AffineOps;

/// Parameters of a resumable polygon build.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// The maximum number of polygons generated by one call to
    /// [`ConvexPolygonFactory::step`] before it suspends.
    ///
    /// A value of zero is treated as one.
    pub max_generated_polygons_per_step: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_generated_polygons_per_step: Self::DEFAULT_MAX_GENERATED_POLYGONS_PER_STEP,
        }
    }
}

impl BuildConfig {
    /// The default number of polygons generated per step.
    pub const DEFAULT_MAX_GENERATED_POLYGONS_PER_STEP: usize = 100;

    /// A configuration generating at most `max_generated_polygons_per_step` polygons per step.
    pub fn new(max_generated_polygons_per_step: usize) -> Self {
        Self {
            max_generated_polygons_per_step,
        }
    }

    /// A configuration generating everything in a single step.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Splits this budget between `pending_requests` outstanding builds.
    ///
    /// The more requests are pending, the fewer polygons each build generates
    /// before suspending. The budget never goes below one polygon.
    pub fn with_back_pressure(&self, pending_requests: usize) -> Self {
        Self::new((self.max_generated_polygons_per_step / pending_requests.max(1)).max(1))
    }

    fn budget(&self) -> usize {
        self.max_generated_polygons_per_step.max(1)
    }
}

/// The state of a resumable polygon build after a call to [`ConvexPolygonFactory::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildStatus {
    /// The polygon budget was exhausted: call `step` again to continue.
    Suspended,
    /// Every triangle of every receiver was converted.
    Completed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BuildCursor {
    Static { receiver: usize, triangle: usize },
    Skinned { receiver: usize, triangle: usize },
    Done,
}

/// Builds one world-space [`ConvexPolygon`] per triangle of a set of receivers.
///
/// Static receivers are processed first, then skinned receivers. The build
/// is resumable: each call to [`ConvexPolygonFactory::step`] generates a
/// bounded number of polygons so the work can be spread over several frames.
/// Polygons are always generated entirely within one step. Dropping the
/// factory aborts the build; the partially filled output is then up to the
/// caller.
pub struct ConvexPolygonFactory<'a> {
    static_receivers: &'a [StaticReceiver<'a>],
    skinned_receivers: &'a [SkinnedReceiver<'a>],
    cursor: BuildCursor,
    // Bone palette of the skinned receiver being processed.
    palette: Vec<Matrix<Real>>,
    palette_receiver: Option<usize>,
    output_reserved: bool,
}

impl<'a> ConvexPolygonFactory<'a> {
    /// Starts a build over the given receivers.
    pub fn new(
        static_receivers: &'a [StaticReceiver<'a>],
        skinned_receivers: &'a [SkinnedReceiver<'a>],
    ) -> Self {
        let mut result = Self {
            static_receivers,
            skinned_receivers,
            cursor: BuildCursor::Static {
                receiver: 0,
                triangle: 0,
            },
            palette: Vec::new(),
            palette_receiver: None,
            output_reserved: false,
        };
        result.skip_exhausted_receivers();
        result
    }

    /// The total number of polygons this build generates.
    pub fn total_triangle_count(&self) -> usize {
        let num_static: usize = self
            .static_receivers
            .iter()
            .map(|r| r.mesh().triangle_count())
            .sum();
        let num_skinned: usize = self
            .skinned_receivers
            .iter()
            .map(|r| r.mesh().triangle_count())
            .sum();
        num_static + num_skinned
    }

    /// Has every polygon been generated?
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.cursor == BuildCursor::Done
    }

    /// Generates at most `config.max_generated_polygons_per_step` polygons into `out`.
    ///
    /// The first call reserves room in `out` for every polygon of the build.
    pub fn step(&mut self, config: &BuildConfig, out: &mut Vec<ConvexPolygon>) -> BuildStatus {
        if !self.output_reserved {
            out.reserve(self.total_triangle_count());
            self.output_reserved = true;
        }

        let budget = config.budget();
        let mut num_generated = 0;

        while num_generated < budget {
            match self.next_polygon() {
                Some(polygon) => {
                    out.push(polygon);
                    num_generated += 1;
                }
                None => return BuildStatus::Completed,
            }
        }

        if self.is_completed() {
            BuildStatus::Completed
        } else {
            log::trace!(
                "Polygon build suspended after {} polygons ({:?}).",
                num_generated,
                self.cursor
            );
            BuildStatus::Suspended
        }
    }

    /// Runs the build to completion, appending every remaining polygon to `out`.
    pub fn build_all(&mut self, out: &mut Vec<ConvexPolygon>) {
        while self.step(&BuildConfig::unbounded(), out) == BuildStatus::Suspended {}
    }

    fn next_polygon(&mut self) -> Option<ConvexPolygon> {
        let polygon = match self.cursor {
            BuildCursor::Static { receiver, triangle } => {
                self.cursor = BuildCursor::Static {
                    receiver,
                    triangle: triangle + 1,
                };
                static_polygon(&self.static_receivers[receiver], triangle)
            }
            BuildCursor::Skinned { receiver, triangle } => {
                self.cursor = BuildCursor::Skinned {
                    receiver,
                    triangle: triangle + 1,
                };
                let skinned_receivers = self.skinned_receivers;
                let skinned = &skinned_receivers[receiver];

                if self.palette_receiver != Some(receiver) {
                    self.palette_receiver = Some(receiver);

                    match (skinned.bone_transforms(), skinned.mesh().skin()) {
                        (Some(bones), Some(skin)) => {
                            compute_bone_palette(bones, skin.bind_poses(), &mut self.palette)
                        }
                        _ => self.palette.clear(),
                    }
                }

                skinned_polygon(skinned, &self.palette, triangle)
            }
            BuildCursor::Done => return None,
        };

        self.skip_exhausted_receivers();
        Some(polygon)
    }

    /// Moves the cursor to the next triangle to convert, or to `Done`.
    fn skip_exhausted_receivers(&mut self) {
        loop {
            match self.cursor {
                BuildCursor::Static { receiver, triangle } => {
                    if receiver >= self.static_receivers.len() {
                        self.cursor = BuildCursor::Skinned {
                            receiver: 0,
                            triangle: 0,
                        };
                    } else if triangle >= self.static_receivers[receiver].mesh().triangle_count() {
                        self.cursor = BuildCursor::Static {
                            receiver: receiver + 1,
                            triangle: 0,
                        };
                    } else {
                        return;
                    }
                }
                BuildCursor::Skinned { receiver, triangle } => {
                    if receiver >= self.skinned_receivers.len() {
                        self.cursor = BuildCursor::Done;
                    } else if triangle >= self.skinned_receivers[receiver].mesh().triangle_count() {
                        self.cursor = BuildCursor::Skinned {
                            receiver: receiver + 1,
                            triangle: 0,
                        };
                    } else {
                        return;
                    }
                }
                BuildCursor::Done => return,
            }
        }
    }
}

fn rigid_polygon(
    mesh: &ReceiverMesh,
    local_to_world: &Matrix<Real>,
    receiver: ReceiverId,
    triangle: usize,
) -> ConvexPolygon {
    let vertices = mesh.indices()[triangle].map(|i| {
        let i = i as usize;
        PolygonVertex::new(
            local_to_world.transform_point_affine(&mesh.positions()[i]),
            normalize_or_zero(local_to_world.transform_vector_affine(&mesh.normals()[i])),
            SkinWeight::default(),
        )
    });

    ConvexPolygon::from_triangle(vertices, receiver)
}

fn static_polygon(receiver: &StaticReceiver, triangle: usize) -> ConvexPolygon {
    rigid_polygon(receiver.mesh(), receiver.local_to_world(), receiver.id(), triangle)
}

fn skinned_polygon(
    receiver: &SkinnedReceiver,
    palette: &[Matrix<Real>],
    triangle: usize,
) -> ConvexPolygon {
    let mesh = receiver.mesh();

    let skin = match (receiver.bone_transforms(), mesh.skin()) {
        (Some(_), Some(skin)) => skin,
        // No root bone: the mesh is placed rigidly and loses its weights.
        _ => return rigid_polygon(mesh, receiver.local_to_world(), receiver.id(), triangle),
    };

    let vertices = mesh.indices()[triangle].map(|i| {
        let i = i as usize;
        let weight = skin.weights()[i];
        let local_to_world = blend_bone_matrices(palette, &weight);

        PolygonVertex::new(
            local_to_world.transform_point_affine(&mesh.positions()[i]),
            normalize_or_zero(local_to_world.transform_vector_affine(&mesh.normals()[i])),
            weight,
        )
    });

    ConvexPolygon::from_triangle(vertices, receiver.id())
}

fn normalize_or_zero(v: Vector<Real>) -> Vector<Real> {
    v.try_normalize(0.0).unwrap_or_else(Vector::zeros)
}
