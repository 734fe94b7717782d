use serde::{Deserialize, Serialize};

/// Principal axis a cylinder is swept along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A solid shape description, independent of any geometry kernel.
///
/// `Difference` is the only non-affine construction in the system: an
/// explicit "base minus cuts" operation. For non-degenerate inputs the
/// result is always a valid solid; lowering to a B-rep happens in the
/// geometry kernel, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Axis-aligned box with the given extents, centered on its position.
    Box { size: [f64; 3] },
    /// Cylinder centered on its position, swept along `axis`.
    Cylinder { diameter: f64, height: f64, axis: Axis },
    /// `base` with each of `cuts` subtracted from it.
    Difference {
        base: std::boxed::Box<PlacedShape>,
        cuts: Vec<PlacedShape>,
    },
}

/// A shape together with its center position (cabinet-local coordinates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedShape {
    pub shape: Shape,
    pub position: [f64; 3],
}

impl PlacedShape {
    pub fn boxed(size: [f64; 3], position: [f64; 3]) -> Self {
        Self {
            shape: Shape::Box { size },
            position,
        }
    }

    pub fn cylinder(diameter: f64, height: f64, axis: Axis, position: [f64; 3]) -> Self {
        Self {
            shape: Shape::Cylinder {
                diameter,
                height,
                axis,
            },
            position,
        }
    }

    /// True if lowering this shape would produce no volume.
    /// Zero-thickness panels are legal inputs and land here.
    pub fn is_degenerate(&self) -> bool {
        match &self.shape {
            Shape::Box { size } => size.iter().any(|&s| s <= 0.0),
            Shape::Cylinder {
                diameter, height, ..
            } => *diameter <= 0.0 || *height <= 0.0,
            Shape::Difference { base, .. } => base.is_degenerate(),
        }
    }

    /// The same shape moved by `offset`. Cut positions move with the base.
    pub fn translated(&self, offset: [f64; 3]) -> PlacedShape {
        let position = [
            self.position[0] + offset[0],
            self.position[1] + offset[1],
            self.position[2] + offset[2],
        ];
        let shape = match &self.shape {
            Shape::Difference { base, cuts } => Shape::Difference {
                base: std::boxed::Box::new(base.translated(offset)),
                cuts: cuts.iter().map(|c| c.translated(offset)).collect(),
            },
            other => other.clone(),
        };
        PlacedShape { shape, position }
    }
}
