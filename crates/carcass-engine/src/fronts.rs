//! Front construction, dispatched on the front type.

use joinery_types::{CabinetSpec, FrontType};
use serde::{Deserialize, Serialize};

use crate::config::ResolvedThicknesses;

/// Which vertical edge of a door carries its hinges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HingeSide {
    Left,
    Right,
}

/// One front panel (door or drawer front).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontPanel {
    /// Stable display label, unique within the cabinet.
    pub label: String,
    pub size: [f64; 3],
    pub position: [f64; 3],
    /// Present for doors; drawers carry no hinges.
    pub hinge_side: Option<HingeSide>,
}

/// Build the front list for a cabinet. Order is stable: left before right
/// for double doors, bottom to top for drawers.
pub fn layout_fronts(spec: &CabinetSpec, t: &ResolvedThicknesses, adjusted_depth: f64) -> Vec<FrontPanel> {
    let width = spec.width;
    let height = spec.height;
    // Fronts sit just beyond the carcass front face.
    let z = adjusted_depth / 2.0 + t.front / 2.0;

    match spec.front_type {
        FrontType::None => Vec::new(),
        FrontType::SingleDoor => vec![FrontPanel {
            label: "Single Door".to_string(),
            size: [width, height, t.front],
            position: [0.0, height / 2.0, z],
            hinge_side: Some(HingeSide::Left),
        }],
        FrontType::DoubleDoor => {
            let door_width = width / 2.0;
            vec![
                FrontPanel {
                    label: "Double Door Left".to_string(),
                    size: [door_width, height, t.front],
                    position: [-width / 4.0, height / 2.0, z],
                    hinge_side: Some(HingeSide::Left),
                },
                FrontPanel {
                    label: "Double Door Right".to_string(),
                    size: [door_width, height, t.front],
                    position: [width / 4.0, height / 2.0, z],
                    hinge_side: Some(HingeSide::Right),
                },
            ]
        }
        FrontType::Drawers { count } => {
            let drawer_height = height / count as f64;
            (0..count)
                .map(|i| FrontPanel {
                    label: format!("Drawer Front {}", i + 1),
                    size: [width, drawer_height, t.front],
                    position: [
                        0.0,
                        drawer_height / 2.0 + i as f64 * drawer_height,
                        z,
                    ],
                    hinge_side: None,
                })
                .collect()
        }
    }
}
