//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Struct variants carrying context about the failure
//! - Automatic `Display` and `Error` trait implementations

use thiserror::Error;

/// Errors that can occur when catalog values enter from outside the type
/// system (command-line flags, JSON files).
///
/// Inside Rust code the closed enums make out-of-domain values
/// unrepresentable, so the only failure mode is a string that names no
/// member of the domain. The error is raised at the construction point and
/// never deferred to filter time.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A string value is not a member of its attribute's domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
///
/// Rust concept: Type aliases make code more readable
/// Instead of writing `Result<T, CatalogError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, CatalogError>;
