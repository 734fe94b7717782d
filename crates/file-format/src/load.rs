//! Cabinet batch ingestion from CSV.
//!
//! One record per cabinet. Numeric front/connector codes are decoded into
//! their closed enum types here; nothing downstream sees a magic number.

use joinery_types::{CabinetSpec, ConnectorType, FrontType, ThicknessOverrides};
use tracing::debug;

use crate::errors::LoadError;
use crate::metadata::BatchMetadata;

pub const COL_NAME: &str = "Cabinet";
pub const COL_CORPUS_MATERIAL: &str = "Corpus Material";
pub const COL_FRONT_MATERIAL: &str = "Front Material";
pub const COL_WIDTH: &str = "Width (mm)";
pub const COL_HEIGHT: &str = "Height (mm)";
pub const COL_DEPTH: &str = "Depth (mm)";
pub const COL_GLOBAL_THICKNESS: &str = "Global Thickness (mm)";
pub const COL_SHELF_COUNT: &str = "Shelf Count";
/// 0 = none, -1 = single door, -2 = double door, n > 0 = drawer count.
pub const COL_FRONT_TYPE: &str = "Front Type";
/// 0 = sides win, 1 = top/bottom win, 2 = mitered.
pub const COL_CONNECTOR_TYPE: &str = "Connector Type";
/// 0/1 flag; blank means no hardware.
pub const COL_HARDWARE: &str = "Hardware";
pub const COL_OVERRIDE_TOP: &str = "Thickness Override (Top)";
pub const COL_OVERRIDE_BOTTOM: &str = "Thickness Override (Bottom)";
pub const COL_OVERRIDE_LEFT: &str = "Thickness Override (Left)";
pub const COL_OVERRIDE_RIGHT: &str = "Thickness Override (Right)";
pub const COL_OVERRIDE_BACK: &str = "Thickness Override (Back)";
pub const COL_OVERRIDE_FRONT: &str = "Thickness Override (Front)";
pub const COL_OVERRIDE_SHELF: &str = "Thickness Override (Shelf)";

/// A loaded cabinet batch.
#[derive(Debug, Clone)]
pub struct Batch {
    pub metadata: BatchMetadata,
    pub cabinets: Vec<CabinetSpec>,
}

/// Parse a CSV batch. Fatal on the first bad record.
pub fn load_batch(csv_text: &str, batch_name: &str) -> Result<Batch, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv(e.to_string()))?
        .clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let mut cabinets = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| LoadError::Csv(e.to_string()))?;
        let field = |name: &'static str| -> Option<String> {
            column(name)
                .and_then(|idx| record.get(idx))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let required = |name: &'static str| -> Result<String, LoadError> {
            field(name).ok_or(LoadError::MissingField { row, field: name })
        };

        let spec = CabinetSpec {
            name: required(COL_NAME)?,
            corpus_material: required(COL_CORPUS_MATERIAL)?,
            front_material: required(COL_FRONT_MATERIAL)?,
            width: parse_positive(row, COL_WIDTH, &required(COL_WIDTH)?)?,
            height: parse_positive(row, COL_HEIGHT, &required(COL_HEIGHT)?)?,
            depth: parse_positive(row, COL_DEPTH, &required(COL_DEPTH)?)?,
            global_thickness: parse_positive(
                row,
                COL_GLOBAL_THICKNESS,
                &required(COL_GLOBAL_THICKNESS)?,
            )?,
            shelf_count: parse_count(row, COL_SHELF_COUNT, &required(COL_SHELF_COUNT)?)?,
            // Blank front/connector codes default to 0.
            front_type: parse_front_type(row, field(COL_FRONT_TYPE).as_deref().unwrap_or("0"))?,
            connector_type: parse_connector_type(
                row,
                field(COL_CONNECTOR_TYPE).as_deref().unwrap_or("0"),
            )?,
            add_hardware: parse_flag(row, COL_HARDWARE, field(COL_HARDWARE).as_deref())?,
            overrides: ThicknessOverrides {
                top: field(COL_OVERRIDE_TOP),
                bottom: field(COL_OVERRIDE_BOTTOM),
                left: field(COL_OVERRIDE_LEFT),
                right: field(COL_OVERRIDE_RIGHT),
                back: field(COL_OVERRIDE_BACK),
                front: field(COL_OVERRIDE_FRONT),
                shelf: field(COL_OVERRIDE_SHELF),
            },
        };
        debug!(row, cabinet = %spec.name, "record parsed");
        cabinets.push(spec);
    }

    let metadata = BatchMetadata::new(batch_name, cabinets.len());
    Ok(Batch { metadata, cabinets })
}

fn parse_positive(row: usize, field: &'static str, raw: &str) -> Result<f64, LoadError> {
    let invalid = || LoadError::InvalidNumericValue {
        row,
        field,
        value: raw.to_string(),
    };
    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if value <= 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

fn parse_count(row: usize, field: &'static str, raw: &str) -> Result<u32, LoadError> {
    raw.parse().map_err(|_| LoadError::InvalidNumericValue {
        row,
        field,
        value: raw.to_string(),
    })
}

fn parse_front_type(row: usize, raw: &str) -> Result<FrontType, LoadError> {
    let code: i64 = raw.parse().map_err(|_| LoadError::InvalidNumericValue {
        row,
        field: COL_FRONT_TYPE,
        value: raw.to_string(),
    })?;
    match code {
        0 => Ok(FrontType::None),
        -1 => Ok(FrontType::SingleDoor),
        -2 => Ok(FrontType::DoubleDoor),
        n if n > 0 => Ok(FrontType::Drawers { count: n as u32 }),
        _ => Err(LoadError::InvalidConfiguration {
            row,
            field: COL_FRONT_TYPE,
            code: raw.to_string(),
        }),
    }
}

fn parse_connector_type(row: usize, raw: &str) -> Result<ConnectorType, LoadError> {
    match raw {
        "0" => Ok(ConnectorType::SidesWin),
        "1" => Ok(ConnectorType::TopBottomWin),
        "2" => Ok(ConnectorType::Mitered),
        _ => Err(LoadError::InvalidConfiguration {
            row,
            field: COL_CONNECTOR_TYPE,
            code: raw.to_string(),
        }),
    }
}

fn parse_flag(row: usize, field: &'static str, raw: Option<&str>) -> Result<bool, LoadError> {
    match raw {
        None | Some("0") => Ok(false),
        Some("1") => Ok(true),
        Some(other) => Err(LoadError::InvalidConfiguration {
            row,
            field,
            code: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Cabinet,Corpus Material,Front Material,Width (mm),Height (mm),Depth (mm),Global Thickness (mm),Shelf Count,Front Type,Connector Type,Hardware,Thickness Override (Top),Thickness Override (Back)";

    fn csv_of(rows: &[&str]) -> String {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn loads_a_well_formed_batch() {
        let text = csv_of(&[
            "Base Unit,MDF,Oak,600,720,560,18,2,-1,0,1,,8",
            "Drawer Unit,MDF,Oak,450,720,560,18,0,3,1,0,25,",
        ]);
        let batch = load_batch(&text, "kitchen").unwrap();
        assert_eq!(batch.metadata.name, "kitchen");
        assert_eq!(batch.metadata.cabinet_count, 2);

        let a = &batch.cabinets[0];
        assert_eq!(a.name, "Base Unit");
        assert_eq!(a.front_type, FrontType::SingleDoor);
        assert_eq!(a.connector_type, ConnectorType::SidesWin);
        assert!(a.add_hardware);
        assert_eq!(a.overrides.top, None);
        assert_eq!(a.overrides.back.as_deref(), Some("8"));

        let b = &batch.cabinets[1];
        assert_eq!(b.front_type, FrontType::Drawers { count: 3 });
        assert_eq!(b.connector_type, ConnectorType::TopBottomWin);
        assert!(!b.add_hardware);
        assert_eq!(b.overrides.top.as_deref(), Some("25"));
    }

    #[test]
    fn blank_codes_default_to_zero() {
        let text = csv_of(&["A,MDF,Oak,600,720,560,18,0,,,,,"]);
        let batch = load_batch(&text, "b").unwrap();
        assert_eq!(batch.cabinets[0].front_type, FrontType::None);
        assert_eq!(batch.cabinets[0].connector_type, ConnectorType::SidesWin);
        assert!(!batch.cabinets[0].add_hardware);
    }

    #[test]
    fn missing_name_is_reported_with_row_and_field() {
        let text = csv_of(&[",MDF,Oak,600,720,560,18,0,0,0,0,,"]);
        match load_batch(&text, "b").unwrap_err() {
            LoadError::MissingField { row, field } => {
                assert_eq!(row, 1);
                assert_eq!(field, COL_NAME);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn garbled_width_is_fatal() {
        let text = csv_of(&["A,MDF,Oak,wide,720,560,18,0,0,0,0,,"]);
        assert!(matches!(
            load_batch(&text, "b").unwrap_err(),
            LoadError::InvalidNumericValue { field: COL_WIDTH, .. }
        ));
    }

    #[test]
    fn negative_width_is_rejected() {
        let text = csv_of(&["A,MDF,Oak,-600,720,560,18,0,0,0,0,,"]);
        assert!(matches!(
            load_batch(&text, "b").unwrap_err(),
            LoadError::InvalidNumericValue { .. }
        ));
    }

    #[test]
    fn unknown_connector_code_is_rejected() {
        let text = csv_of(&["A,MDF,Oak,600,720,560,18,0,0,7,0,,"]);
        assert!(matches!(
            load_batch(&text, "b").unwrap_err(),
            LoadError::InvalidConfiguration { field: COL_CONNECTOR_TYPE, .. }
        ));
    }

    #[test]
    fn unknown_front_code_is_rejected() {
        let text = csv_of(&["A,MDF,Oak,600,720,560,18,0,-9,0,0,,"]);
        assert!(matches!(
            load_batch(&text, "b").unwrap_err(),
            LoadError::InvalidConfiguration { field: COL_FRONT_TYPE, .. }
        ));
    }
}
