use joinery_types::CabinetSpec;
use serde::{Deserialize, Serialize};

use crate::errors::BuildError;

/// Resolve one panel thickness: blank or absent override falls back to the
/// global thickness, anything else must parse as a float.
pub fn resolve_thickness(
    cabinet: &str,
    field: &'static str,
    global: f64,
    override_value: Option<&str>,
) -> Result<f64, BuildError> {
    match override_value {
        None => Ok(global),
        Some(raw) if raw.trim().is_empty() => Ok(global),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| BuildError::InvalidNumericValue {
                cabinet: cabinet.to_string(),
                field,
                value: raw.to_string(),
            }),
    }
}

/// The seven concrete thicknesses after override resolution.
/// Cabinet-scoped and recomputed per build; roles are independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedThicknesses {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub back: f64,
    pub front: f64,
    pub shelf: f64,
}

impl ResolvedThicknesses {
    pub fn resolve(spec: &CabinetSpec) -> Result<Self, BuildError> {
        let g = spec.global_thickness;
        let o = &spec.overrides;
        let name = spec.name.as_str();
        Ok(Self {
            top: resolve_thickness(name, "top thickness", g, o.top.as_deref())?,
            bottom: resolve_thickness(name, "bottom thickness", g, o.bottom.as_deref())?,
            left: resolve_thickness(name, "left thickness", g, o.left.as_deref())?,
            right: resolve_thickness(name, "right thickness", g, o.right.as_deref())?,
            back: resolve_thickness(name, "back thickness", g, o.back.as_deref())?,
            front: resolve_thickness(name, "front thickness", g, o.front.as_deref())?,
            shelf: resolve_thickness(name, "shelf thickness", g, o.shelf.as_deref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_override_falls_back_to_global() {
        assert_eq!(
            resolve_thickness("c", "top thickness", 18.0, None).unwrap(),
            18.0
        );
        assert_eq!(
            resolve_thickness("c", "top thickness", 18.0, Some("")).unwrap(),
            18.0
        );
        assert_eq!(
            resolve_thickness("c", "top thickness", 18.0, Some("   ")).unwrap(),
            18.0
        );
    }

    #[test]
    fn override_parses_as_float() {
        assert_eq!(
            resolve_thickness("c", "back thickness", 18.0, Some("12.5")).unwrap(),
            12.5
        );
    }

    #[test]
    fn garbled_override_is_fatal() {
        let err = resolve_thickness("Base Unit", "left thickness", 18.0, Some("abc")).unwrap_err();
        match err {
            BuildError::InvalidNumericValue {
                cabinet,
                field,
                value,
            } => {
                assert_eq!(cabinet, "Base Unit");
                assert_eq!(field, "left thickness");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
