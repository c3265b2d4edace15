//! Simplification of expressions over a field.
//!
//! An [`ExpressionField`] reduces expressions to a canonical form, using the arithmetic of some
//! field. This crate provides [`RealField`], which evaluates every numeric subexpression exactly
//! over the rationals, producing either an integer or a fraction in lowest terms. Anything it
//! does not recognize as a number, such as a [`Variable`](crate::Variable), is left in the tree
//! as-is.
//!
//! The simplifier works bottom-up, in a single pass:
//!
//! - The children of an [`Expr::Add`] or [`Expr::Mul`] are simplified first, and then combined
//!   if both are numbers. Two vectors of the same dimension are added element-wise.
//! - An [`Expr::Reciprocal`] of something that simplifies to a number becomes a fraction.
//! - An [`Expr::Gcd`] or [`Expr::Lcm`] of two positive integers is evaluated.
//! - An [`Expr::Dot`] of two non-empty vectors of the same dimension is expanded into the sum of
//!   the products of their elements.
//! - All other expressions are returned unchanged.
//!
//! Fractions produced by the simplifier are reduced with the greatest common divisor of the
//! numerator and denominator, but the **sign** of the denominator is kept, so `1/(-2)` and
//! `(-1)/2` simplify to different expressions. A fraction with denominator 1 is not collapsed
//! into an integer.
//!
//! ```
//! use cas_field::expr::{add, integer, rational};
//! use cas_field::{ExpressionField, RealField};
//!
//! let expr = add(integer(5), rational(3, 4));
//! assert_eq!(RealField.simplify(&expr), rational(23, 4));
//! ```

pub mod step;

use crate::{
    algorithm,
    container::Vector,
    error::InvalidArgument,
    expr::{self, Expr},
    number::RealNumber,
    primitive::int,
    step_collector::{Logged, StepCollector},
};
use log::trace;
use rug::Integer;
use step::Step;

/// A simplifier for expressions over a field.
pub trait ExpressionField {
    /// Simplifies the given expression.
    fn simplify(&self, expr: &Expr) -> Expr;

    /// Simplifies every element of the given vector.
    fn simplify_vector(&self, vector: &Vector) -> Vector {
        vector.map(|element| self.simplify(element))
    }
}

/// The field of rational numbers.
///
/// This type holds no state; all instances behave identically. For more information, see the
/// [module-level documentation](self).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RealField;

impl RealField {
    /// Simplifies the given expression, collecting the steps taken by the simplifier. This is
    /// useful for debugging, and also for displaying the steps taken to the user.
    pub fn simplify_with_steps(&self, expr: &Expr) -> (Expr, Vec<Step>) {
        let mut steps = Logged::new(Vec::new());
        let expr = simplify(expr, &mut steps);
        (expr, steps.into_inner())
    }
}

impl ExpressionField for RealField {
    fn simplify(&self, expr: &Expr) -> Expr {
        simplify(expr, &mut ())
    }
}

/// Base implementation of the simplification algorithm.
fn simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Reciprocal(child) => match RealNumber::from_expr(simplify(child, step_collector)) {
            Ok(denom) => {
                step_collector.push(Step::Invert);
                divide_number(RealNumber::Integer(int(1)), denom, step_collector).into()
            },
            Err(_) => {
                // the original expression is kept, not the partially simplified one
                trace!("keeping reciprocal of non-number `{}`", expr);
                expr.clone()
            },
        },
        Expr::Add(lhs, rhs) => add(
            simplify(lhs, step_collector),
            simplify(rhs, step_collector),
            step_collector,
        ),
        Expr::Mul(lhs, rhs, _) => multiply(
            simplify(lhs, step_collector),
            simplify(rhs, step_collector),
            step_collector,
        ),
        Expr::Gcd(lhs, rhs) => evaluate_integers(
            simplify(lhs, step_collector),
            simplify(rhs, step_collector),
            IntegerOp::Gcd,
            step_collector,
        ),
        Expr::Lcm(lhs, rhs) => evaluate_integers(
            simplify(lhs, step_collector),
            simplify(rhs, step_collector),
            IntegerOp::Lcm,
            step_collector,
        ),
        Expr::Dot(lhs, rhs) => dot(
            simplify(lhs, step_collector),
            simplify(rhs, step_collector),
            step_collector,
        ),
        _ => expr.clone(),
    }
}

/// Converts the result of [`RealNumber::from_expr`] back into an expression.
fn restore(operand: Result<RealNumber, Expr>) -> Expr {
    operand.map_or_else(|expr| expr, Expr::from)
}

/// Adds two simplified expressions. If both are numbers, the result is a number. If both are
/// vectors of the same dimension, the result is their element-wise sum. Otherwise the result is
/// an [`Expr::Add`] of the two.
fn add(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let (lhs, rhs) = match (lhs, rhs) {
        (Expr::Vector(u), Expr::Vector(v)) if u.dimension() == v.dimension() => {
            // (a, b) + (c, d) = (a + c, b + d)
            step_collector.push(Step::MergeVectors);
            let sum = u.into_elements()
                .into_iter()
                .zip(v.into_elements())
                .map(|(a, b)| add(
                    simplify(&a, step_collector),
                    simplify(&b, step_collector),
                    step_collector,
                ))
                .collect::<Vector>();
            return Expr::Vector(sum);
        },
        pair => pair,
    };

    match (RealNumber::from_expr(lhs), RealNumber::from_expr(rhs)) {
        (Ok(lhs), Ok(rhs)) => add_numbers(lhs, rhs, step_collector).into(),
        (lhs, rhs) => expr::add(restore(lhs), restore(rhs)),
    }
}

/// Multiplies two simplified expressions. If both are numbers, the result is a number, otherwise
/// the result is an [`Expr::Mul`] of the two.
fn multiply(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (RealNumber::from_expr(lhs), RealNumber::from_expr(rhs)) {
        (Ok(lhs), Ok(rhs)) => multiply_numbers(lhs, rhs, step_collector).into(),
        (lhs, rhs) => expr::multiply(restore(lhs), restore(rhs)),
    }
}

/// An integer operation that can appear in an expression.
#[derive(Debug, Clone, Copy)]
enum IntegerOp {
    Gcd,
    Lcm,
}

impl IntegerOp {
    fn evaluate(self, a: &Integer, b: &Integer) -> Result<Integer, InvalidArgument> {
        match self {
            Self::Gcd => algorithm::gcd(a, b),
            Self::Lcm => algorithm::lcm(a, b),
        }
    }

    fn step(self) -> Step {
        match self {
            Self::Gcd => Step::EvaluateGcd,
            Self::Lcm => Step::EvaluateLcm,
        }
    }

    fn build(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            Self::Gcd => expr::gcd(lhs, rhs),
            Self::Lcm => expr::lcm(lhs, rhs),
        }
    }
}

/// Evaluates `gcd` or `lcm` of two simplified expressions if both are positive integers.
/// Otherwise the node is rebuilt from the simplified operands.
fn evaluate_integers(
    lhs: Expr,
    rhs: Expr,
    op: IntegerOp,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    if let (Expr::Integer(a), Expr::Integer(b)) = (&lhs, &rhs) {
        // non-positive operands are rejected by `algorithm`
        if let Ok(value) = op.evaluate(a, b) {
            step_collector.push(op.step());
            return Expr::Integer(value);
        }
    }

    op.build(lhs, rhs)
}

/// Expands the dot product of two simplified expressions if both are non-empty vectors of the same
/// dimension. Otherwise the result is an [`Expr::Dot`] of the two.
fn dot(lhs: Expr, rhs: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match (lhs, rhs) {
        (Expr::Vector(u), Expr::Vector(v)) if u.dimension() == v.dimension() && u.dimension() > 0 => {
            // <(a, b), (c, d)> = a*c + b*d
            step_collector.push(Step::ExpandDotProduct);
            let mut sum: Option<Expr> = None;
            for (a, b) in u.into_elements().into_iter().zip(v.into_elements()) {
                let term = multiply(
                    simplify(&a, step_collector),
                    simplify(&b, step_collector),
                    step_collector,
                );
                sum = Some(match sum {
                    Some(sum) => add(sum, term, step_collector),
                    None => term,
                });
            }

            sum.unwrap_or_else(|| Expr::Integer(int(0)))
        },
        (lhs, rhs) => expr::dot(lhs, rhs),
    }
}

/// `a + b`
fn add_numbers(
    lhs: RealNumber,
    rhs: RealNumber,
    step_collector: &mut dyn StepCollector<Step>,
) -> RealNumber {
    match (lhs, rhs) {
        (RealNumber::Integer(a), RealNumber::Integer(b)) => {
            step_collector.push(Step::AddIntegers);
            RealNumber::Integer(a + b)
        },
        (RealNumber::Integer(a), RealNumber::Rational { numer: p, denom: q }) => {
            // a + p/q = (a*q + p)/q
            step_collector.push(Step::AddFractions);
            let numer = a * &q + p;
            divide_number(RealNumber::Integer(numer), RealNumber::Integer(q), step_collector)
        },
        (lhs @ RealNumber::Rational { .. }, rhs @ RealNumber::Integer(_)) => {
            add_numbers(rhs, lhs, step_collector)
        },
        (RealNumber::Rational { numer: a, denom: b }, RealNumber::Rational { numer: c, denom: d }) => {
            // a/b + c/d = (a*d + c*b)/(b*d)
            step_collector.push(Step::AddFractions);
            let numer = a * &d + c * &b;
            let denom = b * d;
            divide_number(RealNumber::Integer(numer), RealNumber::Integer(denom), step_collector)
        },
    }
}

/// `a * b`
fn multiply_numbers(
    lhs: RealNumber,
    rhs: RealNumber,
    step_collector: &mut dyn StepCollector<Step>,
) -> RealNumber {
    match (lhs, rhs) {
        (RealNumber::Integer(a), RealNumber::Integer(b)) => {
            step_collector.push(Step::MultiplyIntegers);
            RealNumber::Integer(a * b)
        },
        (RealNumber::Integer(a), RealNumber::Rational { numer: p, denom: q }) => {
            // a * p/q = (a*p)/q
            step_collector.push(Step::MultiplyFractions);
            divide_number(RealNumber::Integer(a * p), RealNumber::Integer(q), step_collector)
        },
        (lhs @ RealNumber::Rational { .. }, rhs @ RealNumber::Integer(_)) => {
            multiply_numbers(rhs, lhs, step_collector)
        },
        (RealNumber::Rational { numer: a, denom: b }, RealNumber::Rational { numer: c, denom: d }) => {
            // a/b * c/d = (a*c)/(b*d)
            step_collector.push(Step::MultiplyFractions);
            divide_number(RealNumber::Integer(a * c), RealNumber::Integer(b * d), step_collector)
        },
    }
}

/// Builds the fraction `numer / denom` in lowest terms.
///
/// Nested fractions in the numerator or denominator are flattened first, then the integer
/// numerator and denominator are divided by their greatest common divisor. The result is always
/// a [`RealNumber::Rational`], even if the denominator is 1 or 0.
fn divide_number(
    mut numer: RealNumber,
    mut denom: RealNumber,
    step_collector: &mut dyn StepCollector<Step>,
) -> RealNumber {
    loop {
        match (numer, denom) {
            (RealNumber::Rational { numer: a, denom: b }, c) => {
                // (a/b)/c = a/(b*c)
                step_collector.push(Step::FlattenNumerator);
                numer = RealNumber::Integer(a);
                denom = multiply_numbers(RealNumber::Integer(b), c, step_collector);
            },
            (a, RealNumber::Rational { numer: b, denom: c }) => {
                // a/(b/c) = (a*c)/b
                step_collector.push(Step::FlattenDenominator);
                numer = multiply_numbers(a, RealNumber::Integer(c), step_collector);
                denom = RealNumber::Integer(b);
            },
            (RealNumber::Integer(n), RealNumber::Integer(d)) => {
                // gcd is 0 only if both are 0
                let gcd = int(n.gcd_ref(&d));
                if gcd > 1 {
                    step_collector.push(Step::ReduceFraction);
                    numer = RealNumber::Integer(n / &gcd);
                    denom = RealNumber::Integer(d / &gcd);
                    continue;
                }

                trace!("reduced fraction: ({}) / ({})", n, d);
                return RealNumber::Rational { numer: n, denom: d };
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{
        abs, add, divide, dot, gcd, integer, lcm, multiply, rational, reciprocal, subtract, symbol,
        variable, vector,
    };
    use crate::primitive::int;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rug::{ops::Pow, Integer};
    use super::*;

    fn simplify(expr: &Expr) -> Expr {
        RealField.simplify(expr)
    }

    #[test]
    fn add_integers() {
        assert_eq!(simplify(&add(integer(1), integer(2))), integer(3));
    }

    #[test]
    fn add_fractions() {
        assert_eq!(simplify(&add(rational(1, 6), rational(3, 4))), rational(11, 12));
    }

    #[test]
    fn add_integer_and_fraction() {
        assert_eq!(simplify(&add(integer(5), rational(3, 4))), rational(23, 4));
        assert_eq!(simplify(&add(rational(3, 4), integer(5))), rational(23, 4));
    }

    #[test]
    fn subtract_integers() {
        assert_eq!(simplify(&subtract(integer(1), integer(2))), integer(-1));
    }

    #[test]
    fn multiply_integers() {
        assert_eq!(simplify(&multiply(integer(3), integer(4))), integer(12));
    }

    #[test]
    fn multiply_fractions() {
        assert_eq!(simplify(&multiply(rational(1, 2), rational(4, 5))), rational(2, 5));
    }

    #[test]
    fn divide_fractions() {
        assert_eq!(simplify(&divide(rational(1, 2), rational(4, 5))), rational(5, 8));
    }

    #[test]
    fn divide_fraction_by_integer() {
        assert_eq!(simplify(&divide(rational(1, 2), integer(5))), rational(1, 10));
    }

    #[test]
    fn reduce_fraction() {
        assert_eq!(simplify(&rational(6, 8)), rational(3, 4));
        assert_eq!(simplify(&rational(-6, 8)), rational(-3, 4));
        assert_eq!(simplify(&rational(0, 8)), rational(0, 1));
    }

    #[test]
    fn keep_denominator_sign() {
        assert_eq!(simplify(&rational(1, -2)), rational(1, -2));
        assert_eq!(simplify(&rational(-1, 2)), rational(-1, 2));
        assert_eq!(simplify(&rational(2, -4)), rational(1, -2));
        assert_ne!(simplify(&rational(1, -2)), simplify(&rational(-1, 2)));
    }

    #[test]
    fn keep_unit_denominator() {
        assert_eq!(simplify(&rational(4, 2)), rational(2, 1));
        assert_eq!(simplify(&rational(7, 1)), rational(7, 1));
        assert_eq!(simplify(&reciprocal(integer(1))), rational(1, 1));
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(simplify(&reciprocal(integer(0))), rational(1, 0));
        assert_eq!(simplify(&rational(6, 0)), rational(1, 0));
        assert_eq!(simplify(&rational(-6, 0)), rational(-1, 0));
        assert_eq!(simplify(&rational(0, 0)), rational(0, 0));
        assert!(!simplify(&rational(6, 0)).is_zero());
    }

    #[test]
    fn nested_reciprocal() {
        // 1/(1/(2/3)) = 2/3
        let expr = reciprocal(reciprocal(rational(2, 3)));
        assert_eq!(simplify(&expr), rational(2, 3));
    }

    #[test]
    fn reciprocal_of_non_number_is_kept() {
        let x = symbol("x");
        let expr = reciprocal(add(x.clone(), add(integer(1), integer(2))));
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn symbolic_terms_pass_through() {
        let x = variable();
        let expr = add(x.clone(), add(integer(1), integer(2)));
        assert_eq!(simplify(&expr), add(x.clone(), integer(3)));

        let expr = multiply(rational(2, 4), x.clone());
        assert_eq!(simplify(&expr), multiply(rational(1, 2), x));

        let expr = abs(add(integer(1), integer(2)));
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn big_integers() {
        let big = int(10).pow(40u32);
        let expr = multiply(Expr::Integer(big.clone()), Expr::Integer(big.clone()));
        assert_eq!(simplify(&expr), Expr::Integer(int(10).pow(80u32)));

        let expr = divide(Expr::Integer(big.clone()), Expr::Integer(big * 3));
        assert_eq!(simplify(&expr), rational(1, 3));
    }

    #[test]
    fn simplify_vector() {
        let v = Vector::new([add(integer(1), integer(1)), rational(2, 6), symbol("z")]);
        assert_eq!(
            RealField.simplify_vector(&v),
            Vector::new([integer(2), rational(1, 3), symbol("z")]),
        );
    }

    #[test]
    fn evaluate_gcd_and_lcm() {
        assert_eq!(simplify(&gcd(integer(12), integer(18))), integer(6));
        assert_eq!(simplify(&lcm(integer(4), integer(6))), integer(12));
        assert_eq!(simplify(&gcd(add(integer(10), integer(2)), integer(8))), integer(4));
    }

    #[test]
    fn keep_gcd_of_non_positive() {
        assert_eq!(simplify(&gcd(integer(0), integer(4))), gcd(integer(0), integer(4)));
        assert_eq!(simplify(&lcm(integer(-2), integer(3))), lcm(integer(-2), integer(3)));
        assert_eq!(simplify(&gcd(rational(1, 2), integer(3))), gcd(rational(1, 2), integer(3)));

        // operands are still simplified
        let x = symbol("x");
        assert_eq!(
            simplify(&lcm(x.clone(), add(integer(1), integer(1)))),
            lcm(x, integer(2)),
        );
    }

    #[test]
    fn expand_dot_product() {
        let u = vector([integer(1), integer(2), rational(1, 2)]);
        let v = vector([integer(3), integer(4), integer(6)]);
        // 1*3 + 2*4 + 1/2*6 = 14
        assert_eq!(simplify(&dot(u, v)), rational(14, 1));

        let u = vector([integer(2), symbol("y")]);
        let v = vector([integer(5), integer(1)]);
        assert_eq!(
            simplify(&dot(u, v)),
            add(integer(10), multiply(symbol("y"), integer(1))),
        );
    }

    #[test]
    fn keep_incompatible_dot_product() {
        let expr = dot(vector([integer(1)]), vector([integer(1), integer(2)]));
        assert_eq!(simplify(&expr), expr);

        let expr = dot(vector(Vec::new()), vector(Vec::new()));
        assert_eq!(simplify(&expr), expr);

        let expr = dot(symbol("u"), vector([integer(1)]));
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn merge_vectors_in_addition() {
        let expr = add(
            vector([integer(1), rational(1, 2)]),
            vector([integer(2), rational(1, 3)]),
        );
        assert_eq!(simplify(&expr), vector([integer(3), rational(5, 6)]));

        let expr = add(vector([integer(1)]), vector([integer(1), integer(2)]));
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn render_simplified_fraction() {
        assert_eq!(simplify(&rational(2, 4)).to_string(), "(1) / (2)");
        assert_eq!(simplify(&add(integer(5), rational(3, 4))).to_string(), "(23) / (4)");
        assert_eq!(rational(2, 4).to_string(), "(2) * (1 / (4))");
    }

    #[test]
    fn integer_op_steps() {
        let (expr, steps) = RealField.simplify_with_steps(&gcd(integer(9), integer(6)));
        assert_eq!(expr, integer(3));
        assert_eq!(steps, vec![Step::EvaluateGcd]);

        let (_, steps) = RealField.simplify_with_steps(&dot(
            vector([integer(1), integer(2)]),
            vector([integer(3), integer(4)]),
        ));
        assert_eq!(steps, vec![
            Step::ExpandDotProduct,
            Step::MultiplyIntegers,
            Step::MultiplyIntegers,
            Step::AddIntegers,
        ]);
    }

    #[test]
    fn steps() {
        let (expr, steps) = RealField.simplify_with_steps(&add(rational(1, 6), rational(3, 4)));
        assert_eq!(expr, rational(11, 12));
        assert_eq!(steps, vec![
            // 1/6
            Step::Invert,
            Step::MultiplyFractions,
            // 3/4
            Step::Invert,
            Step::MultiplyFractions,
            // 4/24 + 18/24 = 22/24 = 11/12
            Step::AddFractions,
            Step::ReduceFraction,
        ]);
    }

    #[test]
    fn flatten_steps() {
        let (expr, steps) = RealField.simplify_with_steps(&reciprocal(rational(4, 5)));
        assert_eq!(expr, rational(5, 4));
        assert_eq!(steps, vec![
            Step::Invert,
            Step::MultiplyFractions,
            Step::Invert,
            Step::FlattenDenominator,
            Step::MultiplyIntegers,
        ]);
    }

    #[test]
    fn does_not_mutate_input() {
        let expr = add(rational(1, 6), rational(3, 4));
        let copy = expr.clone();
        let first = simplify(&expr);
        let second = simplify(&expr);
        assert_eq!(expr, copy);
        assert_eq!(first, second);
    }

    /// Builds a random tree of additions, multiplications and reciprocals over small integers.
    fn random_expr(rng: &mut StdRng, depth: u32) -> Expr {
        if depth == 0 || rng.gen_bool(0.3) {
            return integer(rng.gen_range(-12..=12));
        }

        match rng.gen_range(0..3) {
            0 => add(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
            1 => multiply(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
            _ => reciprocal(random_expr(rng, depth - 1)),
        }
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let expr = random_expr(&mut rng, 5);
            let once = simplify(&expr);
            assert!(once.is_real_number(), "`{}` did not simplify to a number", expr);
            assert_eq!(simplify(&once), once, "simplifying `{}` twice changed it", expr);
        }
    }

    #[test]
    fn integer_closure() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let a = rng.gen_range(-1_000_000i64..=1_000_000);
            let b = rng.gen_range(-1_000_000i64..=1_000_000);
            assert_eq!(simplify(&add(integer(a), integer(b))), integer(a + b));
            assert_eq!(simplify(&multiply(integer(a), integer(b))), integer(int(a) * b));
        }
    }

    #[test]
    fn rational_normalization() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = rng.gen_range(-500i64..=500);
            let q = rng.gen_range(-500i64..=500);
            if q == 0 {
                continue;
            }

            let number = simplify(&divide(integer(p), integer(q)))
                .as_real_number()
                .unwrap();
            let RealNumber::Rational { numer, denom } = &number else {
                panic!("{}/{} did not simplify to a fraction", p, q);
            };

            assert_eq!(int(numer.gcd_ref(denom)), 1);
            assert_eq!(number.to_rational(), Some(rug::Rational::from((p, q))));

            // exactly one of zero / positive / negative holds
            let flags = [number.is_zero(), number.is_positive(), number.is_negative()];
            assert_eq!(flags.iter().filter(|&&flag| flag).count(), 1);

            let abs = number.abs();
            assert!(abs.is_positive() || abs.is_zero());
            assert_eq!(
                abs.to_rational(),
                number.to_rational().map(|r| r.abs()),
            );
        }
    }

    #[test]
    fn field_is_stateless() {
        let expr = add(rational(1, 3), rational(1, 6));
        let a = RealField;
        let b = RealField::default();
        assert_eq!(a.simplify(&expr), b.simplify(&expr));
        assert_eq!(a.simplify(&expr), rational(1, 2));
    }

    #[test]
    fn large_random_values() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let a = Integer::from(rng.gen::<u64>()) * Integer::from(rng.gen::<u64>());
            let b = Integer::from(rng.gen::<u64>()) + 1;
            let expr = divide(Expr::Integer(a.clone() * &b), Expr::Integer(b));
            assert_eq!(simplify(&expr), divide(Expr::Integer(a), integer(1)));
        }
    }
}
