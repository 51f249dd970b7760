/// Number theory builtins.
///
/// `gcd`, `lcm`, `mod`, `modpow` and `is_prime` over truncated integers.
pub mod discrete;
/// Combinatorics and distribution builtins.
///
/// `ncr`, `npr`, `fact`, `binomial` and `geometric`.
pub mod probability;
/// Statistics builtins over flattened datasets.
pub mod statistics;
/// Vector and matrix construction and algebra.
pub mod linalg;
/// `set_union`, `set_intersect` and `set_diff`.
pub mod set;
/// Negation, complement and boolean folds.
pub mod logic;

pub mod core;
