/// Integer number theory: gcd, lcm, normalized modulo, modular
/// exponentiation and primality.
///
/// Operands are already truncated to `i64` by the evaluator.
pub mod discrete;
/// Combinatorics and discrete distributions.
///
/// Factorials, combinations and permutations as floats, plus the binomial and
/// geometric probability mass functions.
pub mod probability;
/// Descriptive statistics over a flat dataset.
///
/// Mean, median, mode, population variance and standard deviation, z-score
/// and Pearson correlation.
pub mod statistics;
/// Vector and small-matrix algebra.
pub mod linalg;
/// Set operations on vectors with tolerant element comparison.
pub mod set_ops;
