//! Specification matching products by size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products whose size equals the configured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    /// Create a specification for the given size.
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn describe(&self) -> String {
        format!("size = {}", self.size)
    }

    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}
