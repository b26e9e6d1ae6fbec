//! Core trait for the specification engine.
//!
//! This module defines the Specification trait that allows composable,
//! extensible predicates to be evaluated against items and combined into
//! larger specifications without modifying existing code.

use crate::combinators::{AndSpecification, NotSpecification, OrSpecification};
use std::sync::Arc;

/// Core trait for testing whether an item satisfies a predicate.
///
/// All specifications, atomic and composite alike, implement this trait, and
/// new kinds can be added from outside the crate without touching the ones
/// that already exist.
///
/// ## Design Note
/// - `Send + Sync` allows specifications to be shared across threads; they
///   hold no mutable state, so no synchronization is involved
/// - `is_satisfied` must be pure and deterministic: no side effects, no
///   mutation of the item or of the specification, and the same item always
///   gets the same answer
/// - The combinators only build structure; they never evaluate or mutate
///   their operands
pub trait Specification<T>: Send + Sync {
    /// Returns a human-readable rendering of this specification
    /// (for logging/debugging).
    ///
    /// Composites render their children in sequence order, so the output is
    /// deterministic for a given structure.
    fn describe(&self) -> String;

    /// Test whether `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Combine with another specification into a conjunction satisfied only
    /// when both operands are.
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        AndSpecification::new().and(self).and(other)
    }

    /// Combine with another specification into a disjunction satisfied when
    /// either operand is.
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        OrSpecification::new().or(self).or(other)
    }

    /// Negate this specification.
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
    {
        NotSpecification::new(self)
    }
}

// Forwarding impls so specifications can be stored and composed behind
// pointers, e.g. `Box<dyn Specification<Product>>` built at runtime.

impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn describe(&self) -> String {
        self.as_ref().describe()
    }

    fn is_satisfied(&self, item: &T) -> bool {
        self.as_ref().is_satisfied(item)
    }
}

impl<T, S> Specification<T> for Arc<S>
where
    S: Specification<T> + ?Sized,
{
    fn describe(&self) -> String {
        self.as_ref().describe()
    }

    fn is_satisfied(&self, item: &T) -> bool {
        self.as_ref().is_satisfied(item)
    }
}
