use std::fmt;

use tracing::trace;

use crate::{
    ast::Expr,
    domain::statistics as stats,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EngineContext, EvalResult},
            function::{discrete, linalg, logic, probability, set, statistics},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated argument values in call order and returns
/// a single value.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of call arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means `n` or more arguments.
/// - `EvenAtLeast(n)` means an even count of `n` or more.
/// - `Any` leaves validation to the handler, which checks the flattened
///   element count instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
    EvenAtLeast(usize),
    Any,
}

/// Expands `"name" => { arity, func }` entries into the static builtin table.
///
/// Aliases such as `nCr` and `ncr` are separate entries sharing a handler.
/// The macro emits the private `BuiltinDef` record, the `BUILTIN_TABLE`
/// searched by [`EngineContext::eval_function`], and the public
/// `BUILTIN_FUNCTIONS` name list.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Every builtin name the evaluator recognizes, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "gcd"           => { arity: Arity::Exact(2), func: discrete::gcd },
    "lcm"           => { arity: Arity::Exact(2), func: discrete::lcm },
    "mod"           => { arity: Arity::Exact(2), func: discrete::modulo },
    "modpow"        => { arity: Arity::Exact(3), func: discrete::modpow },
    "is_prime"      => { arity: Arity::Exact(1), func: discrete::is_prime },
    "ncr"           => { arity: Arity::Exact(2), func: probability::ncr },
    "nCr"           => { arity: Arity::Exact(2), func: probability::ncr },
    "npr"           => { arity: Arity::Exact(2), func: probability::npr },
    "nPr"           => { arity: Arity::Exact(2), func: probability::npr },
    "fact"          => { arity: Arity::Exact(1), func: probability::factorial },
    "factorial"     => { arity: Arity::Exact(1), func: probability::factorial },
    "binomial"      => { arity: Arity::Exact(3), func: probability::binomial },
    "geometric"     => { arity: Arity::Exact(2), func: probability::geometric },
    "mean"          => { arity: Arity::AtLeast(1), func: |args| statistics::aggregate("mean", args, stats::mean) },
    "median"        => { arity: Arity::AtLeast(1), func: |args| statistics::aggregate("median", args, stats::median) },
    "mode"          => { arity: Arity::AtLeast(1), func: |args| statistics::aggregate("mode", args, stats::mode) },
    "var"           => { arity: Arity::AtLeast(1), func: |args| statistics::aggregate("var", args, stats::variance) },
    "stddev"        => { arity: Arity::AtLeast(1), func: |args| statistics::aggregate("stddev", args, stats::stddev) },
    "zscore"        => { arity: Arity::AtLeast(2), func: statistics::zscore },
    "correlation"   => { arity: Arity::EvenAtLeast(2), func: statistics::correlation },
    "vector"        => { arity: Arity::Any, func: linalg::vector },
    "matrix"        => { arity: Arity::AtLeast(3), func: linalg::matrix },
    "vec_add"       => { arity: Arity::Any, func: |args| linalg::vec_pairwise("vec_add", args) },
    "vec_sub"       => { arity: Arity::Any, func: |args| linalg::vec_pairwise("vec_sub", args) },
    "vec_dot"       => { arity: Arity::Any, func: |args| linalg::vec_pairwise("vec_dot", args) },
    "vec_scale"     => { arity: Arity::AtLeast(2), func: linalg::vec_scale },
    "vec_mag"       => { arity: Arity::Any, func: linalg::vec_mag },
    "mat_add"       => { arity: Arity::Exact(2), func: |args| linalg::mat_binary("mat_add", args) },
    "mat_sub"       => { arity: Arity::Exact(2), func: |args| linalg::mat_binary("mat_sub", args) },
    "mat_mul"       => { arity: Arity::Exact(2), func: |args| linalg::mat_binary("mat_mul", args) },
    "mat_vec_mul"   => { arity: Arity::Exact(2), func: linalg::mat_vec_mul },
    "mat_scale"     => { arity: Arity::Exact(2), func: linalg::mat_scale },
    "mat_det"       => { arity: Arity::Exact(1), func: linalg::mat_det },
    "mat_transpose" => { arity: Arity::Exact(1), func: linalg::mat_transpose },
    "set_union"     => { arity: Arity::Any, func: |args| set::set_op("set_union", args) },
    "set_intersect" => { arity: Arity::Any, func: |args| set::set_op("set_intersect", args) },
    "set_diff"      => { arity: Arity::Any, func: |args| set::set_op("set_diff", args) },
    "neg"           => { arity: Arity::Exact(1), func: logic::neg },
    "bnot"          => { arity: Arity::Exact(1), func: logic::bnot },
    "not"           => { arity: Arity::Exact(1), func: logic::not },
    "and"           => { arity: Arity::Any, func: |args| logic::fold("and", args) },
    "or"            => { arity: Arity::Any, func: |args| logic::fold("or", args) },
    "xor"           => { arity: Arity::Any, func: |args| logic::fold("xor", args) },
}

impl Arity {
    /// Whether a call with `n` arguments is allowed.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
            Self::EvenAtLeast(m) => n >= m && n % 2 == 0,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(1) => write!(f, "exactly 1 argument"),
            Self::Exact(n) => write!(f, "exactly {n} arguments"),
            Self::AtLeast(1) => write!(f, "at least 1 argument"),
            Self::AtLeast(n) => write!(f, "at least {n} arguments"),
            Self::EvenAtLeast(n) => write!(f, "an even number of arguments, at least {n}"),
            Self::Any => write!(f, "any number of arguments"),
        }
    }
}

impl EngineContext {
    /// Evaluates a function call.
    ///
    /// The name is looked up in the builtin table first, then the number of
    /// call arguments is checked against the builtin's arity. Only then are
    /// the argument expressions evaluated, left to right, stopping at the
    /// first error. The handler validates value types and computes the result.
    ///
    /// # Parameters
    /// - `name`: Function name, matched case-sensitively.
    /// - `arguments`: Unevaluated argument expressions.
    ///
    /// # Returns
    /// The function result, or an error if lookup, arity or the handler fails.
    ///
    /// # Example
    /// ```
    /// use multicalc::{EngineContext, Value, ast::Expr};
    ///
    /// let context = EngineContext::default();
    /// let arguments = [12.0, 18.0].map(|value| Expr::Number { value, offset: 0 });
    ///
    /// let result = context.eval_function("gcd", &arguments);
    /// assert_eq!(result.unwrap(), Value::Number(6.0));
    /// ```
    pub fn eval_function(&self, name: &str, arguments: &[Expr]) -> EvalResult<Value> {
        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string() });
        };
        if !builtin.arity.check(arguments.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: builtin.arity.to_string(), });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;
        trace!(function = name, arguments = values.len(), "calling builtin");
        (builtin.func)(&values)
    }
}
