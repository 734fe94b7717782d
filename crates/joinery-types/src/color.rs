use serde::{Deserialize, Serialize};

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// The fixed 10-color material palette. Labels beyond ten wrap around.
pub const PALETTE: [Color; 10] = [
    Color::new(0.0, 0.0, 1.0),    // blue
    Color::new(0.6, 0.4, 0.2),    // brown
    Color::new(1.0, 0.0, 0.0),    // red
    Color::new(0.0, 1.0, 0.0),    // green
    Color::new(1.0, 1.0, 0.0),    // yellow
    Color::new(0.5, 0.0, 0.5),    // purple
    Color::new(1.0, 0.5, 0.0),    // orange
    Color::new(1.0, 0.75, 0.8),   // pink
    Color::new(0.5, 0.5, 0.5),    // gray
    Color::new(0.0, 0.0, 0.0),    // black
];

/// Neutral color for hinges and feet, regardless of material.
pub const HARDWARE_GRAY: Color = Color::new(0.5, 0.5, 0.5);

/// Maps material labels to palette colors in first-seen order.
///
/// Built once per batch over all cabinets, separately for corpus and front
/// materials. First-seen ordering makes the assignment reproducible across
/// runs for the same input order; within a run the same label always maps
/// to the same color.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialColorMap {
    assigned: Vec<(String, Color)>,
}

impl MaterialColorMap {
    /// Collect distinct labels in the order they first appear and assign
    /// `PALETTE[i % 10]` to the i-th distinct label.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut assigned: Vec<(String, Color)> = Vec::new();
        for label in labels {
            if assigned.iter().any(|(l, _)| l == label) {
                continue;
            }
            let color = PALETTE[assigned.len() % PALETTE.len()];
            assigned.push((label.to_string(), color));
        }
        Self { assigned }
    }

    pub fn color_of(&self, label: &str) -> Option<Color> {
        self.assigned
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
