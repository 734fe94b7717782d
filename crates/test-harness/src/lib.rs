//! Test harness for scripted cabinet-generation scenarios.
//!
//! - [`helpers`] — spec builders and CSV batch builders
//! - [`assertions`] — assertion helpers over assembly trees

pub mod assertions;
pub mod helpers;

pub use helpers::{basic_spec, BatchCsvBuilder, HarnessError};
