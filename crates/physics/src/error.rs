use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// Mass must be strictly positive and finite.
    #[error("invalid mass {0}: mass must be positive and finite")]
    InvalidMass(f32),
    #[error("invalid dimensions {width}x{height}: extents must be positive and finite")]
    InvalidDimensions { width: f32, height: f32 },
    /// Projection onto a zero-length axis has no direction.
    #[error("cannot project onto a degenerate (zero-length) axis")]
    DegenerateAxis,
}
