//! Spec builders and CSV batch builders for scenario tests.

use joinery_types::{CabinetSpec, ConnectorType, FrontType, ThicknessOverrides};

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("part not found: {name}")]
    PartNotFound { name: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

/// A plain 600×720×560 base unit with 18 mm panels, no front, no shelves,
/// no hardware. Scenarios override what they care about.
pub fn basic_spec(name: &str) -> CabinetSpec {
    CabinetSpec {
        name: name.into(),
        width: 600.0,
        height: 720.0,
        depth: 560.0,
        global_thickness: 18.0,
        overrides: ThicknessOverrides::default(),
        front_type: FrontType::None,
        connector_type: ConnectorType::SidesWin,
        shelf_count: 0,
        add_hardware: false,
        corpus_material: "MDF".into(),
        front_material: "Oak".into(),
    }
}

/// Builds CSV batch text in the format `file_format::load_batch` expects.
#[derive(Debug, Default)]
pub struct BatchCsvBuilder {
    rows: Vec<String>,
}

impl BatchCsvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row with the given core fields and no overrides.
    #[allow(clippy::too_many_arguments)]
    pub fn row(
        mut self,
        name: &str,
        corpus: &str,
        front: &str,
        width: f64,
        height: f64,
        depth: f64,
        front_code: i64,
        connector_code: i64,
        hardware: bool,
    ) -> Self {
        self.rows.push(format!(
            "{name},{corpus},{front},{width},{height},{depth},18,0,{front_code},{connector_code},{}",
            u8::from(hardware)
        ));
        self
    }

    pub fn build(self) -> String {
        let mut text = String::from(
            "Cabinet,Corpus Material,Front Material,Width (mm),Height (mm),Depth (mm),\
             Global Thickness (mm),Shelf Count,Front Type,Connector Type,Hardware",
        );
        for row in self.rows {
            text.push('\n');
            text.push_str(&row);
        }
        text
    }
}
