pub mod boolean;
pub mod lower;
pub mod primitives;
pub mod step;
pub mod types;

pub use boolean::subtract;
pub use lower::lower;
pub use step::solids_to_step;
pub use types::KernelError;
