//! Specification matching products by color.

use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied by products whose color equals the configured one.
///
/// ## Usage
/// ```ignore
/// let green = ColorSpecification::new(Color::Green);
/// assert!(green.is_satisfied(&tree));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    /// Create a specification for the given color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn describe(&self) -> String {
        format!("color = {}", self.color)
    }

    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}
