/// Error indicating that a polygon clip could not be performed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClipError {
    /// The clipped polygon would have more vertices than a convex polygon can hold.
    ///
    /// The polygon is left unmodified when this error is returned.
    #[error("the clipped polygon needs {required} vertices but at most {capacity} are supported.")]
    CapacityExceeded {
        /// The number of vertices the clipped polygon would have.
        required: usize,
        /// The maximum number of vertices of a convex polygon.
        capacity: usize,
    },
}
