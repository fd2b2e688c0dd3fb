//! Legality checks run before every append.

use crate::error::{SelectorError, SelectorResult};
use crate::part::{Category, Part};

/// Check whether a part of `category` may follow `parts`.
///
/// Duplicate singletons are reported before ordering problems, so
/// `#a.b#c` fails as a duplicate id rather than an out-of-order id.
///
/// # Errors
/// Returns [`SelectorError::DuplicateSingleton`] if `category` is element, id
/// or pseudo-element and is already present, and
/// [`SelectorError::OrderViolation`] if a later category is already present.
pub fn validate(parts: &[Part], category: Category) -> SelectorResult<()> {
    if category.is_singleton() && parts.iter().any(|part| part.category() == category) {
        return Err(SelectorError::DuplicateSingleton { category });
    }
    if let Some(after) = highest_category(parts)
        && category < after
    {
        return Err(SelectorError::OrderViolation { category, after });
    }
    Ok(())
}

/// The highest category present, if any.
#[inline]
pub fn highest_category(parts: &[Part]) -> Option<Category> {
    parts.iter().map(Part::category).max()
}
