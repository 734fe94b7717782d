use truck_modeling::topology::Solid;

use crate::types::KernelError;

/// Tolerance for truck's boolean algorithms, matching the scale of
/// millimeter-unit cabinet geometry.
const BOOLEAN_TOLERANCE: f64 = 0.05;

/// Boolean subtraction: `a` minus `b`.
///
/// Never fails for non-degenerate, properly intersecting inputs; a `None`
/// from truck is surfaced as `BooleanFailed`.
pub fn subtract(a: &Solid, b: &Solid) -> Result<Solid, KernelError> {
    // Subtraction = A ∩ ¬B. not() mutates in place.
    let mut b = b.clone();
    b.not();
    truck_shapeops::and(a, &b, BOOLEAN_TOLERANCE).ok_or_else(|| KernelError::BooleanFailed {
        reason: "truck and() returned None for subtraction".to_string(),
    })
}
