use carcass_engine::BuildError;
use geom_kernel::KernelError;

/// Errors while loading a cabinet batch. The first bad record aborts the
/// whole load; row numbers are 1-based data rows.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: invalid numeric value '{value}' for '{field}'")]
    InvalidNumericValue {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: unrecognized code '{code}' for '{field}'")]
    InvalidConfiguration {
        row: usize,
        field: &'static str,
        code: String,
    },

    #[error("failed to read CSV: {0}")]
    Csv(String),
}

/// Errors while exporting a composed scene.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("scene contains no exportable geometry")]
    EmptyScene,

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("scene serialization failed: {0}")]
    Serialize(String),

    #[error("write failed: {0}")]
    Io(String),
}

/// Errors from the end-to-end batch pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
