//! Lowering of kernel-independent `Shape` descriptions to truck B-rep solids.

use std::f64::consts::FRAC_PI_2;
use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{Point3, Rad, Vector3};

use joinery_types::{Axis, PlacedShape, Shape};

use crate::boolean;
use crate::primitives;
use crate::types::KernelError;

/// Lower a placed shape to a solid positioned in its parent's coordinates.
///
/// Degenerate shapes (any zero extent) cannot be lowered; callers that
/// tolerate zero-thickness panels must filter with `is_degenerate` first.
pub fn lower(placed: &PlacedShape) -> Result<Solid, KernelError> {
    if placed.is_degenerate() {
        return Err(KernelError::DegenerateShape {
            detail: format!("{:?}", placed.shape),
        });
    }

    match &placed.shape {
        Shape::Box { size } => {
            let solid = primitives::make_box_centered(*size);
            Ok(translated(&solid, placed.position))
        }
        Shape::Cylinder {
            diameter,
            height,
            axis,
        } => {
            let solid = primitives::make_cylinder(diameter / 2.0, *height)?;
            let solid = orient(&solid, *axis);
            Ok(translated(&solid, placed.position))
        }
        Shape::Difference { base, cuts } => {
            let mut result = lower(base)?;
            for cut in cuts {
                let tool = lower(cut)?;
                result = boolean::subtract(&result, &tool)?;
            }
            Ok(result)
        }
    }
}

fn translated(solid: &Solid, position: [f64; 3]) -> Solid {
    builder::translated(
        solid,
        Vector3::new(position[0], position[1], position[2]),
    )
}

/// Rotate a Z-swept solid so its sweep axis matches `axis`.
fn orient(solid: &Solid, axis: Axis) -> Solid {
    match axis {
        Axis::Z => solid.clone(),
        Axis::X => builder::rotated(
            solid,
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
            Rad(FRAC_PI_2),
        ),
        Axis::Y => builder::rotated(
            solid,
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_x(),
            Rad(-FRAC_PI_2),
        ),
    }
}
