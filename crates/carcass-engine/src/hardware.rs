//! Hinge and foot placement.

use serde::{Deserialize, Serialize};

use crate::errors::BuildError;
use crate::fronts::{FrontPanel, HingeSide};

/// Cup hinge drill diameter (standard 35 mm cup).
pub const HINGE_CUP_DIAMETER: f64 = 35.0;
/// Cup hinge drill depth into the door.
pub const HINGE_CUP_DEPTH: f64 = 13.0;
/// Clearance between the cup rim and the door edge.
pub const HINGE_EDGE_CLEARANCE: f64 = 5.0;
/// Distance of the first and last hinge from the door ends.
pub const HINGE_END_OFFSET: f64 = 90.0;

pub const FOOT_DIAMETER: f64 = 40.0;
pub const FOOT_HEIGHT: f64 = 100.0;
/// Foot inset from the left/right carcass edges.
const FOOT_SIDE_INSET: f64 = 50.0;
/// Foot inset from the front face of the carcass envelope.
const FOOT_FRONT_INSET: f64 = 150.0;
/// Foot inset from the back face of the carcass envelope.
const FOOT_BACK_INSET: f64 = 100.0;
/// Door widths are served by one extra foot pair per full span of this width.
const FOOT_SPAN: f64 = 600.0;

/// A placed hinge cup, cabinet-local center position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hinge {
    pub position: [f64; 3],
}

/// A placed foot, cabinet-local center position (cylinder axis vertical).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foot {
    pub position: [f64; 3],
}

/// Hinge count as a step function of door height.
/// Heights above 3000 mm have no defined hinge layout.
pub fn hinge_count(cabinet: &str, door_height: f64) -> Result<usize, BuildError> {
    let count = match door_height {
        h if h <= 600.0 => 2,
        h if h <= 900.0 => 3,
        h if h <= 2000.0 => 4,
        h if h <= 2400.0 => 5,
        h if h <= 3000.0 => 6,
        _ => {
            return Err(BuildError::UnsupportedDimension {
                cabinet: cabinet.to_string(),
                height: door_height,
            })
        }
    };
    Ok(count)
}

/// Door-local hinge heights, measured from the door's bottom edge:
/// first at 90, last at height − 90, the rest evenly spaced between.
pub fn hinge_heights(count: usize, door_height: f64) -> Vec<f64> {
    let spacing = (door_height - 2.0 * HINGE_END_OFFSET) / (count - 1) as f64;
    (0..count)
        .map(|i| HINGE_END_OFFSET + i as f64 * spacing)
        .collect()
}

/// Place the hinge cups for one door. The cup is inset from the hinge-side
/// vertical edge by the edge clearance plus its radius and drilled from the
/// door's inner face.
pub fn place_hinges(cabinet: &str, door: &FrontPanel) -> Result<Vec<Hinge>, BuildError> {
    let side = match door.hinge_side {
        Some(side) => side,
        None => return Ok(Vec::new()),
    };

    let door_height = door.size[1];
    let count = hinge_count(cabinet, door_height)?;

    let edge_inset = HINGE_EDGE_CLEARANCE + HINGE_CUP_DIAMETER / 2.0;
    let x = match side {
        HingeSide::Left => door.position[0] - door.size[0] / 2.0 + edge_inset,
        HingeSide::Right => door.position[0] + door.size[0] / 2.0 - edge_inset,
    };

    let door_bottom = door.position[1] - door_height / 2.0;
    let inner_face = door.position[2] - door.size[2] / 2.0;
    let z = inner_face + HINGE_CUP_DEPTH / 2.0;

    Ok(hinge_heights(count, door_height)
        .into_iter()
        .map(|h| Hinge {
            position: [x, door_bottom + h, z],
        })
        .collect())
}

/// Place feet under the carcass: four corner feet, plus one extra pair per
/// full 600 mm span the width exceeds. Pure placement, never fails.
pub fn place_feet(width: f64, adjusted_depth: f64) -> Vec<Foot> {
    let y = -FOOT_HEIGHT / 2.0;
    let z_front = adjusted_depth / 2.0 - FOOT_FRONT_INSET;
    let z_back = -adjusted_depth / 2.0 + FOOT_BACK_INSET;

    let x_left = -width / 2.0 + FOOT_SIDE_INSET;
    let x_right = width / 2.0 - FOOT_SIDE_INSET;

    let mut feet = vec![
        Foot { position: [x_left, y, z_front] },
        Foot { position: [x_right, y, z_front] },
        Foot { position: [x_left, y, z_back] },
        Foot { position: [x_right, y, z_back] },
    ];

    if width > FOOT_SPAN {
        // Widths landing exactly on a span boundary add no new pair.
        let extra = (width / FOOT_SPAN).ceil() as usize - 1;
        let spacing = width / (extra + 1) as f64;
        for j in 0..extra {
            let x = -width / 2.0 + (j + 1) as f64 * spacing;
            feet.push(Foot { position: [x, y, z_front] });
            feet.push(Foot { position: [x, y, z_back] });
        }
    }

    feet
}
