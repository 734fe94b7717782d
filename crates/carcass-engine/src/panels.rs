//! Carcass panel layout under the active joint policy.
//!
//! Cabinet-local coordinates: X centered on the carcass, Y = 0 at the
//! floor, Z centered on the adjusted-depth envelope with the front at +Z.

use joinery_types::{CabinetSpec, ConnectorType, PanelRole};
use serde::{Deserialize, Serialize};

use crate::config::ResolvedThicknesses;

/// One carcass panel: extents and center position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub role: PanelRole,
    /// width × height × depth extents.
    pub size: [f64; 3],
    pub position: [f64; 3],
}

/// Depth available to the carcass once a front panel reserves its slice.
pub fn adjusted_depth(spec: &CabinetSpec, t: &ResolvedThicknesses) -> f64 {
    if spec.front_type.has_front() {
        spec.depth - t.front
    } else {
        spec.depth
    }
}

/// Per-policy corner adjustment: exactly one of the two values is non-zero
/// for the inset policies, both zero for mitered corners.
fn joint_adjustments(connector: ConnectorType, t: &ResolvedThicknesses) -> (f64, f64) {
    match connector {
        ConnectorType::Mitered => (0.0, 0.0),
        ConnectorType::TopBottomWin => (0.0, t.top + t.bottom),
        ConnectorType::SidesWin => (t.left + t.right, 0.0),
    }
}

/// Compute the five carcass panels. Zero-thickness panels are legal and
/// produce degenerate but non-erroring geometry.
pub fn layout_panels(spec: &CabinetSpec, t: &ResolvedThicknesses) -> [Panel; 5] {
    let width = spec.width;
    let height = spec.height;
    let ad = adjusted_depth(spec, t);
    let (width_adjustment, height_adjustment) = joint_adjustments(spec.connector_type, t);

    let back_width = width - t.left - t.right;
    let back_height = height - t.top - t.bottom;

    [
        Panel {
            role: PanelRole::Top,
            size: [width - width_adjustment, t.top, ad],
            position: [0.0, height - t.top / 2.0, 0.0],
        },
        Panel {
            role: PanelRole::Bottom,
            size: [width - width_adjustment, t.bottom, ad],
            position: [0.0, t.bottom / 2.0, 0.0],
        },
        Panel {
            role: PanelRole::Left,
            size: [t.left, height - height_adjustment, ad],
            position: [-width / 2.0 + t.left / 2.0, height / 2.0, 0.0],
        },
        Panel {
            role: PanelRole::Right,
            size: [t.right, height - height_adjustment, ad],
            position: [width / 2.0 - t.right / 2.0, height / 2.0, 0.0],
        },
        Panel {
            role: PanelRole::Back,
            size: [back_width, back_height, t.back],
            position: [
                0.0,
                back_height / 2.0 + t.bottom,
                -ad / 2.0 + t.back / 2.0,
            ],
        },
    ]
}
