//! Canonical text form of selectors.
//! Reference: <https://drafts.csswg.org/cssom/#serializing-selectors>

use core::fmt::{Display, Formatter, Result as FmtResult, Write as _};
use crate::Selector;
use crate::combinator::{Combinator, CombinedSelector};
use crate::compound::SimpleSelector;
use crate::part::Part;

/// Render any selector to its canonical string.
///
/// Parts are written in append order with no separators. Combinators are
/// surrounded by single spaces; the descendant combinator is the space itself.
pub fn stringify(selector: &Selector) -> String {
    selector.to_string()
}

impl Display for Part {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let category = self.category();
        f.write_str(category.prefix())?;
        f.write_str(self.text())?;
        f.write_str(category.suffix())
    }
}

impl Display for SimpleSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for part in self.parts() {
            Display::fmt(part, f)?;
        }
        Ok(())
    }
}

impl Display for Combinator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char(self.symbol())
    }
}

impl Display for CombinedSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self.left(), f)?;
        match self.combinator() {
            Combinator::Descendant => f.write_char(' ')?,
            other => write!(f, " {other} ")?,
        }
        Display::fmt(self.right(), f)
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Simple(simple) => Display::fmt(simple, f),
            Self::Combined(combined) => Display::fmt(combined, f),
        }
    }
}
