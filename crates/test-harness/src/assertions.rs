//! Assertion helpers over assembly trees. Every failure names the part
//! and shows expected vs actual.

use carcass_engine::{AssemblyNode, NodeContent};
use joinery_types::{PlacedShape, Shape};

use crate::helpers::HarnessError;

/// Fetch a leaf part's placed shape by name from a cabinet node.
pub fn leaf_shape<'a>(
    cabinet: &'a AssemblyNode,
    name: &str,
) -> Result<&'a PlacedShape, HarnessError> {
    let node = cabinet.child(name).ok_or_else(|| HarnessError::PartNotFound {
        name: name.to_string(),
    })?;
    match &node.content {
        NodeContent::Geometry { shape } => Ok(shape),
        NodeContent::Group { .. } => Err(HarnessError::AssertionFailed {
            detail: format!("'{name}' is a group, expected leaf geometry"),
        }),
    }
}

/// Assert a leaf box's extents within tolerance.
pub fn assert_box_size(
    cabinet: &AssemblyNode,
    name: &str,
    expected: [f64; 3],
    tol: f64,
) -> Result<(), HarnessError> {
    let placed = leaf_shape(cabinet, name)?;
    let size = match &placed.shape {
        Shape::Box { size } => *size,
        Shape::Difference { base, .. } => match &base.shape {
            Shape::Box { size } => *size,
            other => {
                return Err(HarnessError::AssertionFailed {
                    detail: format!("'{name}' difference base is not a box: {other:?}"),
                })
            }
        },
        other => {
            return Err(HarnessError::AssertionFailed {
                detail: format!("'{name}' is not a box: {other:?}"),
            })
        }
    };
    for i in 0..3 {
        if (size[i] - expected[i]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "'{name}' size[{i}]: expected {:.3}, got {:.3} (tol={tol})",
                    expected[i], size[i]
                ),
            });
        }
    }
    Ok(())
}

/// Assert a leaf part's center position within tolerance.
pub fn assert_position(
    cabinet: &AssemblyNode,
    name: &str,
    expected: [f64; 3],
    tol: f64,
) -> Result<(), HarnessError> {
    let placed = leaf_shape(cabinet, name)?;
    for i in 0..3 {
        if (placed.position[i] - expected[i]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "'{name}' position[{i}]: expected {:.3}, got {:.3} (tol={tol})",
                    expected[i], placed.position[i]
                ),
            });
        }
    }
    Ok(())
}

/// Assert the number of direct children whose name starts with `prefix`.
pub fn assert_part_count(
    cabinet: &AssemblyNode,
    prefix: &str,
    expected: usize,
) -> Result<(), HarnessError> {
    let actual = cabinet
        .children()
        .iter()
        .filter(|c| c.name.starts_with(prefix))
        .count();
    if actual != expected {
        return Err(HarnessError::AssertionFailed {
            detail: format!("'{prefix}*' count: expected {expected}, got {actual}"),
        });
    }
    Ok(())
}
