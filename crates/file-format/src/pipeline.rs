use carcass_engine::{compose_scene, AssemblyNode};
use tracing::info;

use crate::errors::PipelineError;
use crate::load::load_batch;
use crate::metadata::BatchMetadata;

/// Load a CSV batch and compose the full scene.
///
/// Writing the result (STEP, JSON) is left to the caller. Any error is
/// fatal to the whole batch; there is no per-cabinet recovery.
pub fn run_batch(
    csv_text: &str,
    batch_name: &str,
) -> Result<(AssemblyNode, BatchMetadata), PipelineError> {
    let batch = load_batch(csv_text, batch_name)?;
    info!(
        batch = batch_name,
        cabinets = batch.cabinets.len(),
        "batch loaded"
    );
    let scene = compose_scene(&batch.metadata.name, &batch.cabinets)?;
    Ok((scene, batch.metadata))
}
