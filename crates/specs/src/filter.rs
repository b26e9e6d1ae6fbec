//! Lazy filtering of item collections through a specification.

use crate::traits::Specification;
use tracing::debug;

/// Filter `items` down to those satisfying `spec`.
///
/// The returned iterator is lazy: nothing is evaluated until it is consumed,
/// and consuming only a prefix only evaluates that prefix. Items come out in
/// their input order, by reference; the source collection is untouched and
/// can be filtered again with a different specification.
///
/// ## Usage
/// ```ignore
/// let green = ColorSpecification::new(Color::Green);
/// let found: Vec<&Product> = filter(&products, &green).collect();
/// ```
pub fn filter<'a, T: 'a, I, S>(items: I, spec: &'a S) -> impl Iterator<Item = &'a T> + 'a
where
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
    S: Specification<T> + ?Sized,
{
    debug!("Applying specification: {}", spec.describe());
    items
        .into_iter()
        .filter(move |item| spec.is_satisfied(item))
}
