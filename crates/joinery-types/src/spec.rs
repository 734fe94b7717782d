use serde::{Deserialize, Serialize};

/// What covers the carcass opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrontType {
    /// Open carcass, no front panel.
    None,
    /// One full-width door.
    SingleDoor,
    /// Two half-width doors hinged on their outer edges.
    DoubleDoor,
    /// A stack of drawer fronts, bottom to top.
    Drawers { count: u32 },
}

impl FrontType {
    /// Whether any front panel exists (reserves depth in front of the carcass).
    pub fn has_front(&self) -> bool {
        !matches!(self, FrontType::None)
    }
}

/// Which panel pair spans the full outer envelope at the corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConnectorType {
    /// Left/right panels run full height; top/bottom are inset between them.
    SidesWin,
    /// Top/bottom panels run full width; left/right are inset between them.
    TopBottomWin,
    /// Mitered corners, no inset on either pair.
    Mitered,
}

/// Semantic role of a carcass panel. All five are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelRole {
    Top,
    Bottom,
    Left,
    Right,
    Back,
}

impl PanelRole {
    /// Stable part name used in the assembly tree.
    pub fn part_name(&self) -> &'static str {
        match self {
            PanelRole::Top => "Top Panel",
            PanelRole::Bottom => "Bottom Panel",
            PanelRole::Left => "Left Side Panel",
            PanelRole::Right => "Right Side Panel",
            PanelRole::Back => "Back Panel",
        }
    }
}

/// Raw per-panel thickness overrides as they appear in the input record.
/// Blank or absent means "use the global thickness"; parsing happens at
/// build time so an unparsable override is reported against its cabinet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThicknessOverrides {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub back: Option<String>,
    pub front: Option<String>,
    pub shelf: Option<String>,
}

/// Immutable per-cabinet input. All dimensions in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetSpec {
    /// Human-readable cabinet name; becomes the cabinet node name.
    pub name: String,
    /// Outer carcass width.
    pub width: f64,
    /// Outer carcass height.
    pub height: f64,
    /// Outer depth including the front panel, if any.
    pub depth: f64,
    /// Default panel thickness for every role without an override.
    pub global_thickness: f64,
    pub overrides: ThicknessOverrides,
    pub front_type: FrontType,
    pub connector_type: ConnectorType,
    pub shelf_count: u32,
    /// Whether hinge hardware is generated for doors.
    pub add_hardware: bool,
    /// Material label for carcass panels and shelves.
    pub corpus_material: String,
    /// Material label for fronts.
    pub front_material: String,
}
