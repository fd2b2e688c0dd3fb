//! Selectors Level 3 — typed construction and serialization.
//! Reference: <https://www.w3.org/TR/selectors-3/>
//!
//! Selectors are built part by part through a fluent API instead of parsed
//! from text:
//! - Type, id, class, attribute, pseudo-class and pseudo-element parts
//! - Ordering and uniqueness checks on every append
//! - Combinators: descendant, child, adjacent sibling, general sibling
//! - Canonical string output
//!
//! Nothing here matches selectors against a document or computes specificity.
//!
//! ```
//! use css_selector_builder::{Combinator, SelectorBuilder};
//!
//! let builder = SelectorBuilder::new();
//! let link = builder.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.to_string(), r#"a[href$=".png"]:focus"#);
//!
//! let rows = builder.combine(
//!     builder.element("tr")?.pseudo_class("nth-of-type(even)")?,
//!     Combinator::Descendant,
//!     builder.element("td")?,
//! );
//! assert_eq!(builder.stringify(rows), "tr:nth-of-type(even) td");
//! # Ok::<(), css_selector_builder::SelectorError>(())
//! ```

mod builder;
mod combinator;
mod compound;
mod error;
mod part;
mod serialize;
mod validator;

// Re-export public API
pub use builder::SelectorBuilder;
pub use combinator::{Combinator, CombinedSelector, combine};
pub use compound::SimpleSelector;
pub use error::{SelectorError, SelectorResult};
pub use part::{Category, Part};
pub use serialize::stringify;
pub use validator::validate;

/// Any selector: a single simple selector or a combined tree of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A run of parts with no combinator.
    Simple(SimpleSelector),
    /// Two selectors joined by a combinator.
    Combined(CombinedSelector),
}

impl Selector {
    /// Join `self` on the left of `right`. Chaining this builds a
    /// left-leaning tree, which reads the same as the written selector.
    pub fn combine(self, combinator: Combinator, right: impl Into<Self>) -> CombinedSelector {
        combine(self, combinator, right)
    }

    /// The simple selector, if this is not combined.
    pub const fn as_simple(&self) -> Option<&SimpleSelector> {
        match self {
            Self::Simple(simple) => Some(simple),
            Self::Combined(_) => None,
        }
    }

    /// The combined node, if this is one.
    pub const fn as_combined(&self) -> Option<&CombinedSelector> {
        match self {
            Self::Combined(combined) => Some(combined),
            Self::Simple(_) => None,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::Simple(SimpleSelector::new())
    }
}

impl From<SimpleSelector> for Selector {
    fn from(simple: SimpleSelector) -> Self {
        Self::Simple(simple)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}
