/// Possible steps taken by the [`RealField`](super::RealField) simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `2+3 = 5`
    AddIntegers,

    /// `a + p/q = (a*q + p)/q`
    /// `a/b + c/d = (a*d + c*b)/(b*d)`
    AddFractions,

    /// `2*3 = 6`
    MultiplyIntegers,

    /// `a * p/q = (a*p)/q`
    /// `a/b * c/d = (a*c)/(b*d)`
    MultiplyFractions,

    /// `1/a` becomes the fraction `(1)/(a)`, which is then flattened and reduced.
    Invert,

    /// `(a/b)/c = a/(b*c)`
    FlattenNumerator,

    /// `a/(b/c) = (a*c)/b`
    FlattenDenominator,

    /// `6/8 = 3/4`
    ReduceFraction,

    /// `gcd(12, 18) = 6`
    EvaluateGcd,

    /// `lcm(4, 6) = 12`
    EvaluateLcm,

    /// `<(a, b), (c, d)> = a*c + b*d`
    ExpandDotProduct,

    /// `(a, b) + (c, d) = (a+c, b+d)`
    MergeVectors,
}
