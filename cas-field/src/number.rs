//! Numbers recognized by the [`RealField`](crate::RealField) simplifier, and queries on them.
//!
//! A [`RealNumber`] is either an integer or a fraction of two integers. Fractions are stored as
//! the [`Expr`] shape `numerator * (1 / denominator)` (see [`Expr::as_fraction`]), so converting
//! between the two is lossless.

use crate::expr::{self, Expr};
use rug::Integer;
use std::cmp::Ordering;

/// The sign of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    /// Returns the sign of the given integer.
    pub fn of(n: &Integer) -> Self {
        match n.cmp0() {
            Ordering::Greater => Self::Positive,
            Ordering::Less => Self::Negative,
            Ordering::Equal => Self::Zero,
        }
    }

    /// Returns the opposite sign. [`Sign::Zero`] is its own inverse.
    pub fn inverse(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
        }
    }

    /// Returns the sign of the product of two numbers with the given signs.
    pub fn multiply(self, other: Self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::Negative => other.inverse(),
            Self::Positive => other,
        }
    }
}

/// An integer or a fraction of two integers.
///
/// The fraction is not required to be in lowest terms, and its denominator may be negative or
/// zero. Fractions produced by the simplifier are always in lowest terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RealNumber {
    /// An integer.
    Integer(Integer),

    /// `numer / denom`.
    Rational {
        numer: Integer,
        denom: Integer,
    },
}

impl RealNumber {
    /// Returns true if the number is zero.
    ///
    /// A fraction is zero if its numerator is zero, even when the denominator is also zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Rational { numer, .. } => numer.is_zero(),
        }
    }

    /// Returns the sign of the number.
    ///
    /// The sign of a fraction is the product of the signs of its numerator and denominator, so a
    /// fraction with a zero denominator has sign [`Sign::Zero`] even though it is not
    /// [zero](Self::is_zero).
    pub fn sign(&self) -> Sign {
        match self {
            Self::Integer(n) => Sign::of(n),
            Self::Rational { numer, denom } => Sign::of(numer).multiply(Sign::of(denom)),
        }
    }

    /// Returns true if the number is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.sign() == Sign::Positive
    }

    /// Returns true if the number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }

    /// Returns the absolute value of the number. For fractions, this takes the absolute value of
    /// the numerator and denominator separately.
    pub fn abs(&self) -> RealNumber {
        match self {
            Self::Integer(n) => Self::Integer(n.clone().abs()),
            Self::Rational { numer, denom } => Self::Rational {
                numer: numer.clone().abs(),
                denom: denom.clone().abs(),
            },
        }
    }

    /// Returns the numerator of the number. The numerator of an integer is itself.
    pub fn numer(&self) -> &Integer {
        match self {
            Self::Integer(n) => n,
            Self::Rational { numer, .. } => numer,
        }
    }

    /// Returns the denominator of the number, or [`None`] for integers.
    pub fn denom(&self) -> Option<&Integer> {
        match self {
            Self::Integer(_) => None,
            Self::Rational { denom, .. } => Some(denom),
        }
    }

    /// Returns the number as a [`rug::Rational`], or [`None`] if the denominator is zero.
    pub fn to_rational(&self) -> Option<rug::Rational> {
        match self {
            Self::Integer(n) => Some(rug::Rational::from(n)),
            Self::Rational { denom, .. } if denom.is_zero() => None,
            Self::Rational { numer, denom } => Some(rug::Rational::from((numer, denom))),
        }
    }

    /// Converts an [`Expr`] into a [`RealNumber`], giving the expression back if it is not an
    /// integer or an integer fraction.
    pub(crate) fn from_expr(expr: Expr) -> Result<Self, Expr> {
        match expr {
            Expr::Integer(n) => Ok(Self::Integer(n)),
            Expr::Mul(lhs, rhs, mark) => match (*lhs, *rhs) {
                (Expr::Integer(numer), Expr::Reciprocal(recip)) => match *recip {
                    Expr::Integer(denom) => Ok(Self::Rational { numer, denom }),
                    recip => Err(Expr::Mul(
                        Box::new(Expr::Integer(numer)),
                        Box::new(expr::reciprocal(recip)),
                        mark,
                    )),
                },
                (lhs, rhs) => Err(Expr::Mul(Box::new(lhs), Box::new(rhs), mark)),
            },
            expr => Err(expr),
        }
    }
}

impl From<RealNumber> for Expr {
    fn from(number: RealNumber) -> Self {
        match number {
            RealNumber::Integer(n) => Expr::Integer(n),
            RealNumber::Rational { numer, denom } => expr::canonical_fraction(numer, denom),
        }
    }
}

impl TryFrom<&Expr> for RealNumber {
    type Error = ();

    fn try_from(expr: &Expr) -> Result<Self, Self::Error> {
        expr.as_real_number().ok_or(())
    }
}

impl Expr {
    /// If the expression is an integer or an integer fraction, returns it as a [`RealNumber`].
    pub fn as_real_number(&self) -> Option<RealNumber> {
        match self {
            Self::Integer(n) => Some(RealNumber::Integer(n.clone())),
            _ => self.as_fraction().map(|(numer, denom)| RealNumber::Rational {
                numer: numer.clone(),
                denom: denom.clone(),
            }),
        }
    }

    /// Returns true if the expression is an integer or an integer fraction.
    pub fn is_real_number(&self) -> bool {
        self.is_integer() || self.is_fraction()
    }

    /// Returns true if the expression is a number equal to zero. Non-numbers are never zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            _ => self.as_fraction().map(|(numer, _)| numer.is_zero()).unwrap_or(false),
        }
    }

    /// Returns the sign of the expression if it is a number.
    pub fn sign(&self) -> Option<Sign> {
        match self {
            Self::Integer(n) => Some(Sign::of(n)),
            _ => self.as_fraction()
                .map(|(numer, denom)| Sign::of(numer).multiply(Sign::of(denom))),
        }
    }

    /// Returns true if the expression is a strictly positive number.
    pub fn is_positive(&self) -> bool {
        self.sign() == Some(Sign::Positive)
    }

    /// Returns true if the expression is a strictly negative number.
    pub fn is_negative(&self) -> bool {
        self.sign() == Some(Sign::Negative)
    }

    /// If the expression is a number, returns its absolute value. See [`RealNumber::abs`].
    pub fn abs_number(&self) -> Option<Expr> {
        self.as_real_number().map(|number| number.abs().into())
    }
}
