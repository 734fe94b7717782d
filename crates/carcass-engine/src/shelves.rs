//! Even interior spacing of shelves.

use joinery_types::CabinetSpec;
use serde::{Deserialize, Serialize};

use crate::config::ResolvedThicknesses;

/// One shelf board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub size: [f64; 3],
    pub position: [f64; 3],
}

/// Lay out `shelf_count` shelves evenly across the interior vertical span.
/// Shelf `i` (0-indexed) sits at `bottom + (i+1) · span / (count+1)`.
pub fn layout_shelves(
    spec: &CabinetSpec,
    t: &ResolvedThicknesses,
    adjusted_depth: f64,
) -> Vec<Shelf> {
    if spec.shelf_count == 0 {
        return Vec::new();
    }

    let interior_span = spec.height - t.top - t.bottom;
    let spacing = interior_span / (spec.shelf_count + 1) as f64;
    let shelf_width = spec.width - t.left - t.right;
    let shelf_depth = if t.back == 0.0 {
        adjusted_depth
    } else {
        adjusted_depth - t.back
    };

    let x = -spec.width / 2.0 + t.left + shelf_width / 2.0;
    let z = -spec.depth / 2.0 + t.front + shelf_depth / 2.0;

    (0..spec.shelf_count)
        .map(|i| Shelf {
            size: [shelf_width, t.shelf, shelf_depth],
            position: [x, t.bottom + (i + 1) as f64 * spacing, z],
        })
        .collect()
}
