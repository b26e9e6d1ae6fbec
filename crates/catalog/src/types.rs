//! Core domain types for the product catalog.
//!
//! This module defines the item model the specification engine filters over.
//! Key Rust concepts demonstrated here:
//! - Enums for closed, fixed sets of values
//! - Exhaustive matching, so adding a domain value is a compile-time-visible change
//! - Derive macros for common traits
//! - `FromStr`/`Display` as the string boundary of the domain

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Attribute Domains
// =============================================================================
// Each attribute draws its value from a closed enumeration. Comparison is
// exact member equality; there is no partial or fuzzy matching.

/// Color of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Size of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        f.write_str(name)
    }
}

// Parsing is the one place a value can actually be out of domain: strings
// arriving from command-line flags or catalog files. It fails immediately
// with `InvalidValue` rather than coercing or guessing.

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item with a fixed set of typed attributes.
///
/// Products are created once and never mutated; the specification engine
/// only ever reads them through shared references.
///
/// Rust concept: because `color` and `size` are closed enums, a `Product`
/// built in code cannot hold an out-of-domain value. That failure mode only
/// exists at the string boundary (see [`FromStr`] above).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}
