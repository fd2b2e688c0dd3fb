//! Combinators and the binary node joining two selectors.
//! Reference: <https://www.w3.org/TR/selectors-3/#combinators>

use crate::Selector;
use log::trace;

/// Relation between the two sides of a [`CombinedSelector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace: right is a descendant of left.
    Descendant,
    /// `>`: right is a child of left.
    Child,
    /// `+`: right immediately follows left.
    AdjacentSibling,
    /// `~`: right follows left somewhere among its siblings.
    GeneralSibling,
}

impl Combinator {
    /// The symbol this combinator is written with.
    pub const fn symbol(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::AdjacentSibling => '+',
            Self::GeneralSibling => '~',
        }
    }

    /// Look up a combinator by symbol.
    ///
    /// Only `' '`, `'>'`, `'+'` and `'~'` are combinators; every other
    /// character yields `None`. There is no fallback to the descendant
    /// combinator.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Descendant),
            '>' => Some(Self::Child),
            '+' => Some(Self::AdjacentSibling),
            '~' => Some(Self::GeneralSibling),
            _ => None,
        }
    }
}

/// Two selectors joined by a combinator. Either side may itself be combined.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CombinedSelector {
    /// Left operand.
    left: Box<Selector>,
    /// Relation between the operands.
    combinator: Combinator,
    /// Right operand.
    right: Box<Selector>,
}

impl CombinedSelector {
    /// Left operand.
    #[inline]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The joining combinator.
    #[inline]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Right operand.
    #[inline]
    pub fn right(&self) -> &Selector {
        &self.right
    }
}

/// Join two selectors with a combinator.
///
/// Never fails: the operands are wrapped as given, without re-validation.
/// Operands are not checked for emptiness either; joining two empty
/// selectors with the descendant combinator renders as `" "`.
pub fn combine(
    left: impl Into<Selector>,
    combinator: Combinator,
    right: impl Into<Selector>,
) -> CombinedSelector {
    trace!("combine with '{}'", combinator.symbol());
    CombinedSelector {
        left: Box::new(left.into()),
        combinator,
        right: Box::new(right.into()),
    }
}
