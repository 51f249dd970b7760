use multicalc::{
    Base, EngineContext, Matrix, Mode, evaluate, format_value,
    ast::{BinaryOperator, Expr},
    domain::{
        discrete::{gcd, is_prime, lcm, modulo},
        linalg::mat_transpose,
    },
    parse,
};
use proptest::prelude::*;

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)]
}

fn operator() -> impl Strategy<Value = BinaryOperator> {
    use BinaryOperator::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, ShiftLeft, ShiftRight, Sub};
    prop::sample::select(vec![Add, Sub, Mul, Div, Rem, BitAnd, BitOr, BitXor, ShiftLeft, ShiftRight])
}

fn function_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["gcd", "mean", "vector", "neg", "vec_mag", "unknown"]).prop_map(String::from)
}

// Non-negative literals only; the grammar has no unary minus.
fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![(0u32..10_000).prop_map(f64::from), 0.0f64..1000.0].prop_map(|value| Expr::Number { value,
                                                                                                              offset: 0 });
    leaf.prop_recursive(4, 32, 3, |inner| {
            prop_oneof![(operator(), inner.clone(), inner.clone()).prop_map(|(op, left, right)| {
                                                                      Expr::BinaryOp { op,
                                                                                       left: Box::new(left),
                                                                                       right: Box::new(right),
                                                                                       offset: 0 }
                                                                  }),
                        (function_name(), prop::collection::vec(inner, 0..4)).prop_map(|(name, arguments)| {
                                                                                   Expr::FunctionCall { name,
                                                                                                        arguments,
                                                                                                        offset: 0 }
                                                                               }),]
        })
}

fn naive_is_prime(n: i64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

fn outcome(source: &str) -> String {
    match evaluate(source, &EngineContext::new(Mode::Standard)) {
        Ok(value) => format_value(&value, Base::Decimal),
        Err(e) => format!("{:?}: {e}", e.kind()),
    }
}

proptest! {
    #[test]
    fn gcd_times_lcm_is_product(a in nonzero(), b in nonzero()) {
        let product = a.unsigned_abs() * b.unsigned_abs();
        prop_assert_eq!(gcd(a, b) * lcm(a, b).unwrap(), product);
    }

    #[test]
    fn modulo_is_in_range(a in any::<i64>(), m in nonzero()) {
        let r = modulo(a, m).unwrap();
        prop_assert!(r >= 0 && r < m.abs());
    }

    #[test]
    fn primality_matches_trial_division(n in 0i64..=1_000_000) {
        prop_assert_eq!(is_prime(n), naive_is_prime(n));
    }

    #[test]
    fn transpose_is_an_involution(rows in 1usize..5, cols in 1usize..5, seed in prop::collection::vec(-1e6f64..1e6, 16)) {
        let m = Matrix::new(rows, cols, seed[..rows * cols].to_vec()).unwrap();
        prop_assert_eq!(mat_transpose(&mat_transpose(&m)), m);
    }

    #[test]
    fn rendering_reparses_to_the_same_tree(tree in expr()) {
        let rendered = tree.to_string();
        let reparsed = parse(&rendered).unwrap();
        prop_assert_eq!(reparsed.to_string(), rendered);
    }

    #[test]
    fn evaluation_is_deterministic(tree in expr()) {
        let source = tree.to_string();
        prop_assert_eq!(outcome(&source), outcome(&source));
    }
}
