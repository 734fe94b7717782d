pub mod color;
pub mod shape;
pub mod spec;

pub use color::*;
pub use shape::*;
pub use spec::*;
