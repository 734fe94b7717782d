//! STEP export of a composed scene.

use std::path::Path;

use carcass_engine::AssemblyNode;
use tracing::debug;

use crate::errors::ExportError;

/// Export a scene to a STEP string.
///
/// Walks the tree, lowers every leaf shape to a B-rep solid with its
/// accumulated translation applied, and serializes the lot. Degenerate
/// leaves (zero-thickness panels) are skipped rather than lowered.
pub fn export_step(scene: &AssemblyNode) -> Result<String, ExportError> {
    let parts = scene.flattened();
    let mut solids = Vec::with_capacity(parts.len());
    for part in &parts {
        if part.shape.is_degenerate() {
            debug!(part = %part.name, "skipping degenerate part");
            continue;
        }
        solids.push(geom_kernel::lower(&part.shape)?);
    }
    if solids.is_empty() {
        return Err(ExportError::EmptyScene);
    }

    Ok(geom_kernel::solids_to_step(&solids, &scene.name))
}

/// Export a scene and write it to `path`.
pub fn write_step_file(scene: &AssemblyNode, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let step = export_step(scene)?;
    std::fs::write(path, step).map_err(|e| ExportError::Io(e.to_string()))
}
