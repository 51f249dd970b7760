/// Elements closer than this are treated as the same set member.
pub const SET_TOLERANCE: f64 = 1e-9;

fn contains(set: &[f64], element: f64) -> bool {
    set.iter().any(|x| (x - element).abs() < SET_TOLERANCE)
}

fn push_unique(out: &mut Vec<f64>, element: f64) {
    if !contains(out, element) {
        out.push(element);
    }
}

/// Elements of `a` followed by elements of `b`, each kept once.
///
/// # Example
/// ```
/// use multicalc::domain::set_ops::union;
///
/// assert_eq!(union(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
#[must_use]
pub fn union(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    for &x in a.iter().chain(b) {
        push_unique(&mut out, x);
    }
    out
}

/// Elements of `a` that also occur in `b`, in the order of `a`.
#[must_use]
pub fn intersection(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = Vec::new();
    for &x in a.iter().filter(|&&x| contains(b, x)) {
        push_unique(&mut out, x);
    }
    out
}

/// Elements of `a` that do not occur in `b`, in the order of `a`.
#[must_use]
pub fn difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = Vec::new();
    for &x in a.iter().filter(|&&x| !contains(b, x)) {
        push_unique(&mut out, x);
    }
    out
}
