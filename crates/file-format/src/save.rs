use carcass_engine::AssemblyNode;

use crate::errors::ExportError;

/// Serialize a composed scene to pretty-printed JSON.
///
/// The JSON tree carries the part names, translations and colors that the
/// STEP output cannot represent.
pub fn scene_to_json(scene: &AssemblyNode) -> Result<String, ExportError> {
    serde_json::to_string_pretty(scene).map_err(|e| ExportError::Serialize(e.to_string()))
}
