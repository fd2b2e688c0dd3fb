//! Errors raised while appending parts to a simple selector.

use crate::part::Category;
use thiserror::Error;

/// A rejected append. The chain that produced it cannot be continued; start a
/// new selector instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was appended a second time.
    #[error(
        "element, id and pseudo-element should not occur more than one time inside the selector (duplicate {})",
        .category.name()
    )]
    DuplicateSingleton {
        /// The category that was repeated.
        category: Category,
    },

    /// A part was appended after a part of a later category.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({} after {})",
        .category.name(),
        .after.name()
    )]
    OrderViolation {
        /// The category that was appended.
        category: Category,
        /// The highest category already present.
        after: Category,
    },
}

/// Result type for selector building.
pub type SelectorResult<T> = Result<T, SelectorError>;
