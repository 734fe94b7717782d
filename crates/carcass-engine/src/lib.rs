//! Parametric cabinet carcass generation.
//!
//! Resolves panel thicknesses, lays out the five carcass panels under the
//! active joint policy, dispatches front construction, places hinge and
//! foot hardware, spaces shelves, and composes everything into an
//! immutable assembly tree with per-material colors.

pub mod compose;
pub mod config;
pub mod errors;
pub mod fronts;
pub mod hardware;
pub mod panels;
pub mod scene;
pub mod shelves;

pub use compose::{build_cabinet, compose_scene};
pub use config::{resolve_thickness, ResolvedThicknesses};
pub use errors::BuildError;
pub use scene::{AssemblyNode, FlatPart, NodeContent};
