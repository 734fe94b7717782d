//! Collaborators around the carcass engine: batch ingestion from CSV,
//! scene JSON dump, and STEP export of the composed scene.

pub mod errors;
pub mod load;
pub mod metadata;
pub mod pipeline;
pub mod save;
pub mod step_export;

pub use errors::{ExportError, LoadError, PipelineError};
pub use load::{load_batch, Batch};
pub use metadata::BatchMetadata;
pub use pipeline::run_batch;
pub use save::scene_to_json;
pub use step_export::{export_step, write_step_file};
