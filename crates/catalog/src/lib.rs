//! # Catalog Crate
//!
//! This crate defines the item model for the specification engine: a small
//! product catalog with strongly-typed attributes drawn from closed
//! enumerations.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Color, Size, Product)
//! - **error**: Error type for values entering from strings
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Color, Product, Size};
//!
//! let apple = Product::new("Apple", Color::Green, Size::Small);
//!
//! // Values arriving from outside the type system are validated at the
//! // construction point:
//! let color: Color = "green".parse()?;
//! assert!("purple".parse::<Color>().is_err());
//! ```
//!
//! ## Learning Goals
//!
//! This crate demonstrates:
//!
//! 1. **Closed Sum Types**: Enums make out-of-domain values unrepresentable
//! 2. **Exhaustive Matching**: Adding a variant breaks every match that must care
//! 3. **Error Handling**: Fail-fast validation at the string boundary
//! 4. **Serde Derives**: Domain types serialize without hand-written glue

// Public modules
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Color, Product, Size};
