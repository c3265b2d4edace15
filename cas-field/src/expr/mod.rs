//! A representation of exact arithmetic expressions.
//!
//! The [`Expr`] type is a recursive `enum` covering integers, binary additions and
//! multiplications, reciprocals, absolute values, vectors, matrices, and opaque placeholders.
//! Unlike a flattened representation, every [`Expr::Add`] and [`Expr::Mul`] has exactly two
//! children; sums and products of more terms are built by nesting.
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Eq`] implementations compare expressions **structurally**: two
//! expressions are equal if they are the same variant and their children are equal, in order.
//! This means `1 + 2` is not equal to `3`, and `a + b` is not equal to `b + a`. Use the
//! [`RealField`](crate::RealField) simplifier to bring numeric expressions to a canonical form
//! before comparing them.
//!
//! # Fractions
//!
//! There is no dedicated variant for fractions. A fraction is a [`Expr::Mul`] whose left child is
//! the numerator and whose right child is the [`Expr::Reciprocal`] of the denominator, which is
//! exactly what [`rational`] and [`divide`] build. The simplifier emits the same shape, so a
//! fraction built by hand compares equal to the simplified form with the same numerator and
//! denominator.
//!
//! Fractions emitted by the simplifier carry a [`Canonical`] mark, which only changes how they
//! are rendered: `(N) / (D)` instead of the plain product `(N) * (1 / (D))`.
//!
//! ```
//! use cas_field::expr::{integer, rational};
//! use cas_field::{ExpressionField, RealField};
//!
//! let sum = RealField.simplify(&(rational(1, 6) + rational(3, 4)));
//! assert_eq!(sum, rational(11, 12));
//! assert_eq!(sum.to_string(), "(11) / (12)");
//! assert_eq!(rational(11, 12).to_string(), "(11) * (1 / (12))");
//! assert_eq!(integer(255).to_string_radix(16), "ff");
//! ```

mod iter;

use crate::{
    container::{Matrix, Vector},
    primitive::{fmt_radix, int, DEFAULT_RADIX},
};
use iter::ExprIter;
use rug::Integer;
use std::{
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Sub},
    sync::atomic::{AtomicU64, Ordering},
};

/// The next identifier handed out by [`Variable::new`].
static NEXT_VARIABLE_ID: AtomicU64 = AtomicU64::new(0);

/// An opaque placeholder with identity semantics.
///
/// Every call to [`Variable::new`] returns a variable that is not equal to any other variable
/// created before or after it, on any thread. Copies of a variable compare equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable(u64);

impl Variable {
    /// Creates a fresh variable.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the identifier of this variable.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "v[{:016x}]", self.0)
    }
}

/// Marks an [`Expr::Mul`] as a fraction in lowest terms produced by the simplifier.
///
/// The mark is ignored by [`PartialEq`] and [`Hash`]: two products with equal children are equal
/// whether or not either is marked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical(bool);

impl Canonical {
    /// The mark of a product that was not produced by the simplifier.
    pub const UNMARKED: Self = Self(false);

    /// The mark of a canonical fraction.
    pub(crate) const MARKED: Self = Self(true);

    /// Returns true if the product is a canonical fraction.
    pub fn is_marked(&self) -> bool {
        self.0
    }
}

impl PartialEq for Canonical {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for Canonical {}

impl Hash for Canonical {
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

/// A node in an arithmetic expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// An exact integer.
    Integer(Integer),

    /// `1 / child`.
    Reciprocal(Box<Expr>),

    /// `|child|`.
    Abs(Box<Expr>),

    /// The sum of two expressions.
    Add(Box<Expr>, Box<Expr>),

    /// The product of two expressions. The [`Canonical`] mark is set on fractions emitted by the
    /// simplifier.
    Mul(Box<Expr>, Box<Expr>, Canonical),

    /// The greatest common divisor of two expressions.
    Gcd(Box<Expr>, Box<Expr>),

    /// The least common multiple of two expressions.
    Lcm(Box<Expr>, Box<Expr>),

    /// The dot product of two expressions, usually vectors.
    Dot(Box<Expr>, Box<Expr>),

    /// A column vector of expressions.
    Vector(Vector),

    /// A matrix of expressions, stored as columns of equal height.
    Matrix(Matrix),

    /// An opaque placeholder, equal only to itself.
    Variable(Variable),

    /// A named placeholder, equal to any symbol with the same name.
    Symbol(String),
}

impl Expr {
    /// If the expression is an [`Expr::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Integer(int) => Some(int),
            _ => None,
        }
    }

    /// If the expression is an [`Expr::Integer`], returns the contained integer.
    pub fn into_integer(self) -> Option<Integer> {
        match self {
            Self::Integer(int) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is an [`Expr::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// If the expression is an integer fraction, that is, an [`Expr::Mul`] of an
    /// [`Expr::Integer`] and the [`Expr::Reciprocal`] of an [`Expr::Integer`], returns references
    /// to the numerator and denominator.
    pub fn as_fraction(&self) -> Option<(&Integer, &Integer)> {
        if let Self::Mul(lhs, rhs, _) = self {
            if let (Self::Integer(numer), Self::Reciprocal(recip)) = (&**lhs, &**rhs) {
                if let Self::Integer(denom) = &**recip {
                    return Some((numer, denom));
                }
            }
        }

        None
    }

    /// Returns true if the expression is an integer fraction. See [`Expr::as_fraction`].
    pub fn is_fraction(&self) -> bool {
        self.as_fraction().is_some()
    }

    /// Returns the direct children of this expression, from left to right.
    ///
    /// The children of a [`Expr::Matrix`] are the elements of its columns, column by column.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Integer(_) | Self::Variable(_) | Self::Symbol(_) => Vec::new(),
            Self::Reciprocal(child) | Self::Abs(child) => vec![&**child],
            Self::Add(lhs, rhs)
                | Self::Mul(lhs, rhs, _)
                | Self::Gcd(lhs, rhs)
                | Self::Lcm(lhs, rhs)
                | Self::Dot(lhs, rhs) => vec![&**lhs, &**rhs],
            Self::Vector(vector) => vector.elements().iter().collect(),
            Self::Matrix(matrix) => matrix.columns()
                .iter()
                .flat_map(|column| column.elements())
                .collect(),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns true if no [`Expr::Variable`] or [`Expr::Symbol`] appears anywhere in the
    /// expression.
    pub fn is_constant(&self) -> bool {
        self.post_order_iter()
            .all(|expr| !matches!(expr, Self::Variable(_) | Self::Symbol(_)))
    }

    /// Returns a value that renders this expression in the given radix when displayed.
    ///
    /// Radixes outside `2..=36` render in base 10.
    pub fn display_radix(&self, radix: u32) -> DisplayRadix<'_> {
        DisplayRadix { expr: self, radix }
    }

    /// Renders this expression in the given radix.
    ///
    /// Radixes outside `2..=36` render in base 10.
    pub fn to_string_radix(&self, radix: u32) -> String {
        self.display_radix(radix).to_string()
    }

    /// Writes this expression to the formatter, with integers in the given radix.
    pub(crate) fn fmt_radix(&self, f: &mut Formatter<'_>, radix: u32) -> fmt::Result {
        if let (Self::Mul(_, _, mark), Some((numer, denom))) = (self, self.as_fraction()) {
            if mark.is_marked() {
                return write!(f, "({}) / ({})", fmt_radix(numer, radix), fmt_radix(denom, radix));
            }
        }

        match self {
            Self::Integer(int) => write!(f, "{}", fmt_radix(int, radix)),
            Self::Reciprocal(child) => {
                write!(f, "1 / (")?;
                child.fmt_radix(f, radix)?;
                write!(f, ")")
            },
            Self::Abs(child) => {
                write!(f, "|")?;
                child.fmt_radix(f, radix)?;
                write!(f, "|")
            },
            Self::Add(lhs, rhs) => {
                lhs.fmt_radix(f, radix)?;
                write!(f, " + ")?;
                rhs.fmt_radix(f, radix)
            },
            Self::Mul(lhs, rhs, _) => {
                write!(f, "(")?;
                lhs.fmt_radix(f, radix)?;
                write!(f, ") * (")?;
                rhs.fmt_radix(f, radix)?;
                write!(f, ")")
            },
            Self::Gcd(lhs, rhs) => {
                write!(f, "gcd(")?;
                lhs.fmt_radix(f, radix)?;
                write!(f, ", ")?;
                rhs.fmt_radix(f, radix)?;
                write!(f, ")")
            },
            Self::Lcm(lhs, rhs) => {
                write!(f, "lcm(")?;
                lhs.fmt_radix(f, radix)?;
                write!(f, ", ")?;
                rhs.fmt_radix(f, radix)?;
                write!(f, ")")
            },
            Self::Dot(lhs, rhs) => {
                write!(f, "<")?;
                lhs.fmt_radix(f, radix)?;
                write!(f, ", ")?;
                rhs.fmt_radix(f, radix)?;
                write!(f, ">")
            },
            Self::Vector(vector) => vector.fmt_radix(f, radix),
            Self::Matrix(matrix) => matrix.fmt_radix(f, radix),
            Self::Variable(var) => write!(f, "{}", var),
            Self::Symbol(name) => write!(f, "{}", name),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, DEFAULT_RADIX)
    }
}

/// Displays an [`Expr`] in a chosen radix.
///
/// This type is created by [`Expr::display_radix`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayRadix<'a> {
    expr: &'a Expr,
    radix: u32,
}

impl Display for DisplayRadix<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.expr.fmt_radix(f, self.radix)
    }
}

impl From<Integer> for Expr {
    fn from(int: Integer) -> Self {
        Self::Integer(int)
    }
}

impl From<Vector> for Expr {
    fn from(vector: Vector) -> Self {
        Self::Vector(vector)
    }
}

impl From<Matrix> for Expr {
    fn from(matrix: Matrix) -> Self {
        Self::Matrix(matrix)
    }
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Self::Variable(var)
    }
}

/// Creates an [`Expr::Integer`] with the given value.
pub fn integer<T>(n: T) -> Expr
where
    Integer: From<T>,
{
    Expr::Integer(int(n))
}

/// Creates the sum `lhs + rhs`. No simplification is done.
pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::Add(Box::new(lhs), Box::new(rhs))
}

/// Creates the product `lhs * rhs`. No simplification is done.
pub fn multiply(lhs: Expr, rhs: Expr) -> Expr {
    Expr::Mul(Box::new(lhs), Box::new(rhs), Canonical::UNMARKED)
}

/// Creates the fraction `numer / denom` with the [`Canonical`] mark set, so it renders as
/// `(numer) / (denom)`.
pub(crate) fn canonical_fraction(numer: Integer, denom: Integer) -> Expr {
    Expr::Mul(
        Box::new(Expr::Integer(numer)),
        Box::new(reciprocal(Expr::Integer(denom))),
        Canonical::MARKED,
    )
}

/// Creates `lhs + (-1) * rhs`. No simplification is done.
pub fn subtract(lhs: Expr, rhs: Expr) -> Expr {
    add(lhs, negate(rhs))
}

/// Creates `lhs * (1 / rhs)`. No simplification is done.
pub fn divide(lhs: Expr, rhs: Expr) -> Expr {
    multiply(lhs, reciprocal(rhs))
}

/// Creates `(-1) * expr`. No simplification is done.
pub fn negate(expr: Expr) -> Expr {
    multiply(integer(-1), expr)
}

/// Creates `1 / expr`. The expression is not checked to be nonzero.
pub fn reciprocal(expr: Expr) -> Expr {
    Expr::Reciprocal(Box::new(expr))
}

/// Creates `|expr|`.
pub fn abs(expr: Expr) -> Expr {
    Expr::Abs(Box::new(expr))
}

/// Creates the fraction `numerator / denominator` as `numerator * (1 / denominator)`.
///
/// The fraction is **not** reduced; run it through the [`RealField`](crate::RealField)
/// simplifier to bring it to lowest terms.
pub fn rational<N, D>(numerator: N, denominator: D) -> Expr
where
    Integer: From<N> + From<D>,
{
    divide(integer(numerator), integer(denominator))
}

/// Creates `gcd(lhs, rhs)`. It is evaluated by the simplifier only if both sides are positive
/// integers.
pub fn gcd(lhs: Expr, rhs: Expr) -> Expr {
    Expr::Gcd(Box::new(lhs), Box::new(rhs))
}

/// Creates `lcm(lhs, rhs)`. It is evaluated by the simplifier only if both sides are positive
/// integers.
pub fn lcm(lhs: Expr, rhs: Expr) -> Expr {
    Expr::Lcm(Box::new(lhs), Box::new(rhs))
}

/// Creates the dot product `<lhs, rhs>`. It is expanded by the simplifier only if both sides are
/// non-empty vectors of the same dimension.
pub fn dot(lhs: Expr, rhs: Expr) -> Expr {
    Expr::Dot(Box::new(lhs), Box::new(rhs))
}

/// Creates an [`Expr::Vector`] containing the given elements.
pub fn vector(elements: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Vector(Vector::new(elements))
}

/// Creates a fresh [`Expr::Variable`], distinct from every other variable.
pub fn variable() -> Expr {
    Expr::Variable(Variable::new())
}

/// Creates an [`Expr::Symbol`] with the given name.
pub fn symbol(name: impl Into<String>) -> Expr {
    Expr::Symbol(name.into())
}

impl Add<Expr> for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Self::Output {
        add(self, rhs)
    }
}

impl Sub<Expr> for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Self::Output {
        subtract(self, rhs)
    }
}

impl Mul<Expr> for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Self::Output {
        multiply(self, rhs)
    }
}

impl Div<Expr> for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Self::Output {
        divide(self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        negate(self)
    }
}
