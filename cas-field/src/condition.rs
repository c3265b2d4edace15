//! Relations between two expressions.
//!
//! Conditions are plain data: nothing in this crate decides whether a condition holds. They are
//! meant for consumers of [`ExpressionField`](crate::ExpressionField), such as equation solvers,
//! that need to record constraints on their inputs.

use crate::{expr::Expr, primitive::DEFAULT_RADIX};
use std::fmt::{self, Display, Formatter};

/// The relation of an [`Inequation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equality {
    /// `=`
    Equal,

    /// `!=`
    NotEqual,

    /// `<`
    LessThan,

    /// `>`
    GreaterThan,

    /// `<=`
    LessThanOrEqual,

    /// `>=`
    GreaterThanOrEqual,
}

impl Equality {
    /// Returns the symbol of the relation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
        }
    }

    /// Returns the relation that holds when the two sides are swapped, e.g. `<` becomes `>`.
    pub fn flip(&self) -> Self {
        match self {
            Self::Equal => Self::Equal,
            Self::NotEqual => Self::NotEqual,
            Self::LessThan => Self::GreaterThan,
            Self::GreaterThan => Self::LessThan,
            Self::LessThanOrEqual => Self::GreaterThanOrEqual,
            Self::GreaterThanOrEqual => Self::LessThanOrEqual,
        }
    }
}

impl Display for Equality {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Two expressions related by an [`Equality`], such as `x != 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Inequation {
    pub lhs: Expr,
    pub equality: Equality,
    pub rhs: Expr,
}

impl Inequation {
    /// Creates a new condition.
    pub fn new(lhs: Expr, equality: Equality, rhs: Expr) -> Self {
        Self { lhs, equality, rhs }
    }

    /// Returns the same condition with the two sides swapped.
    pub fn flip(self) -> Self {
        Self {
            lhs: self.rhs,
            equality: self.equality.flip(),
            rhs: self.lhs,
        }
    }

    /// Renders the condition, with integers in the given radix.
    pub fn to_string_radix(&self, radix: u32) -> String {
        format!(
            "{}{}{}",
            self.lhs.display_radix(radix),
            self.equality,
            self.rhs.display_radix(radix),
        )
    }
}

impl Display for Inequation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_radix(DEFAULT_RADIX))
    }
}
