//! Atomic specifications over single product attributes.
//!
//! Each atom lives in its own file and tests exactly one attribute. New
//! attributes get new files here; nothing in the combinators or the filter
//! function changes when one is added.

pub mod color;
pub mod size;

pub use color::ColorSpecification;
pub use size::SizeSpecification;
