//! Composable specifications for filtering product catalogs.
//!
//! This crate provides:
//! - Specification trait for boolean predicates over items
//! - Atomic specifications testing single product attributes
//! - AND/OR/NOT combinators and the two constant specifications
//! - A lazy `filter` function applying a specification to a collection
//!
//! ## Architecture
//! Filtering concerns are split so each can grow independently:
//! 1. Atoms decide one attribute of one item
//! 2. Combinators compose existing specifications into new ones
//! 3. `filter` walks a collection and yields the items a specification accepts
//!
//! Adding a new criterion means adding a new `Specification` impl; the
//! combinators and `filter` pick it up unchanged.
//!
//! ## Example Usage
//! ```ignore
//! use specs::{filter, Specification};
//! use specs::atoms::{ColorSpecification, SizeSpecification};
//!
//! // Build a composite specification
//! let blue_and_large = ColorSpecification::new(Color::Blue)
//!     .and(SizeSpecification::new(Size::Large));
//!
//! // Apply it lazily
//! for product in filter(&products, &blue_and_large) {
//!     println!("{}", product.name);
//! }
//! ```

pub mod atoms;
pub mod combinators;
pub mod filter;
pub mod traits;

// Re-export main types
pub use combinators::{
    AlwaysFalse, AlwaysTrue, AndSpecification, NotSpecification, OrSpecification,
};
pub use filter::filter;
pub use traits::Specification;
