#![doc = include_str!("../README.md")]

pub mod algorithm;
pub mod condition;
pub mod container;
pub mod error;
pub mod expr;
pub mod field;
pub mod number;
pub mod primitive;
pub mod step_collector;

pub use algorithm::{factorize, gcd, lcm};
pub use condition::{Equality, Inequation};
pub use container::{Matrix, Vector};
pub use error::{DimensionMismatch, Error, InvalidArgument};
pub use expr::{Canonical, Expr, Variable};
pub use field::{step::Step, ExpressionField, RealField};
pub use number::{RealNumber, Sign};
pub use step_collector::StepCollector;
