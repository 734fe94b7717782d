//! STEP serialization of lowered solids.

use truck_modeling::topology::{Shell, Solid};
use truck_stepio::out::{CompleteStepDisplay, StepHeaderDescriptor, StepModel};

/// Serialize a set of solids to one STEP string.
///
/// truck's STEP writer emits a single model, so all boundary faces are
/// gathered into one shell. Part names and colors are not representable
/// here; they travel in the scene JSON instead.
pub fn solids_to_step(solids: &[Solid], origin: &str) -> String {
    let mut faces = Vec::new();
    for solid in solids {
        for shell in solid.boundaries() {
            faces.extend(shell.face_iter().cloned());
        }
    }
    let shell: Shell = faces.into();
    let compressed = shell.compress();

    CompleteStepDisplay::new(
        StepModel::from(&compressed),
        StepHeaderDescriptor {
            organization_system: origin.to_owned(),
            ..Default::default()
        },
    )
    .to_string()
}
