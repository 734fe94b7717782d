/// Errors while building cabinet geometry. All are fatal to the batch;
/// the computation is deterministic so retrying the same input never helps.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildError {
    #[error("cabinet '{cabinet}': invalid numeric value '{value}' for {field}")]
    InvalidNumericValue {
        cabinet: String,
        field: &'static str,
        value: String,
    },

    #[error("cabinet '{cabinet}': door height {height} mm is above the supported hinge range (max 3000 mm)")]
    UnsupportedDimension { cabinet: String, height: f64 },
}
