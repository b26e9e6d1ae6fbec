//! Composite specifications built out of other specifications.
//!
//! This module provides the boolean connectives (AND, OR, NOT) and the two
//! constant specifications. Composites hold their children behind `Arc`, so
//! combining and cloning share structure instead of copying it, and no
//! operation here ever mutates an operand.

use crate::traits::Specification;
use std::sync::Arc;

/// Conjunction of child specifications: satisfied only when every child is.
///
/// ## Usage
/// ```ignore
/// let spec = AndSpecification::new()
///     .and(ColorSpecification::new(Color::Blue))
///     .and(SizeSpecification::new(Size::Large));
/// ```
///
/// The child sequence is fixed at construction; evaluation follows it in
/// order and stops at the first unsatisfied child. A conjunction with no
/// children is vacuously satisfied by every item, matching the usual
/// convention for a conjunction over the empty set.
pub struct AndSpecification<T> {
    children: Vec<Arc<dyn Specification<T>>>,
}

impl<T> AndSpecification<T> {
    /// Create an empty conjunction (vacuously true).
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Append another specification to this conjunction (builder pattern).
    ///
    /// This flattens instead of nesting: `a.and(b).and(c)` holds three
    /// children rather than a pair of pairs. Both shapes evaluate the same
    /// way; the flat one keeps evaluation depth and `describe` output flat.
    pub fn and<S>(mut self, other: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        self.children.push(Arc::new(other));
        self
    }

    /// Number of child specifications.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether this conjunction has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    fn describe(&self) -> String {
        if self.children.is_empty() {
            return "true".to_string();
        }
        let parts: Vec<String> = self.children.iter().map(|c| c.describe()).collect();
        format!("({})", parts.join(" AND "))
    }

    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().all(|child| child.is_satisfied(item))
    }
}

/// Cloning shares the children (a derived impl would demand `T: Clone`).
impl<T> Clone for AndSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
        }
    }
}

impl<T> Default for AndSpecification<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Disjunction of child specifications: satisfied when any child is.
///
/// Mirrors [`AndSpecification`]: fixed child sequence, in-order evaluation
/// stopping at the first satisfied child. A disjunction with no children
/// satisfies nothing (disjunction over the empty set is classically false).
pub struct OrSpecification<T> {
    children: Vec<Arc<dyn Specification<T>>>,
}

impl<T> OrSpecification<T> {
    /// Create an empty disjunction (vacuously false).
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Append another specification to this disjunction (builder pattern).
    pub fn or<S>(mut self, other: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        self.children.push(Arc::new(other));
        self
    }

    /// Number of child specifications.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether this disjunction has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> Specification<T> for OrSpecification<T> {
    fn describe(&self) -> String {
        if self.children.is_empty() {
            return "false".to_string();
        }
        let parts: Vec<String> = self.children.iter().map(|c| c.describe()).collect();
        format!("({})", parts.join(" OR "))
    }

    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().any(|child| child.is_satisfied(item))
    }
}

/// Cloning shares the children (a derived impl would demand `T: Clone`).
impl<T> Clone for OrSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
        }
    }
}

impl<T> Default for OrSpecification<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Negation of one inner specification.
pub struct NotSpecification<T> {
    inner: Arc<dyn Specification<T>>,
}

impl<T> NotSpecification<T> {
    /// Create a specification satisfied exactly when `inner` is not.
    pub fn new<S>(inner: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl<T> Specification<T> for NotSpecification<T> {
    fn describe(&self) -> String {
        format!("NOT {}", self.inner.describe())
    }

    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Cloning shares the inner specification.
impl<T> Clone for NotSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Specification satisfied by every item.
///
/// The identity element for conjunction; handy as a starting point when a
/// specification is assembled from optional pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysTrue;

impl<T> Specification<T> for AlwaysTrue {
    fn describe(&self) -> String {
        "true".to_string()
    }

    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Specification satisfied by no item.
///
/// The identity element for disjunction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFalse;

impl<T> Specification<T> for AlwaysFalse {
    fn describe(&self) -> String {
        "false".to_string()
    }

    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}
