/// Errors from solid construction and lowering.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("degenerate shape cannot be lowered: {detail}")]
    DegenerateShape { detail: String },

    #[error("planar face construction failed: {reason}")]
    FaceConstructionFailed { reason: String },
}
