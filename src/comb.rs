//! Binomial coefficients over floating-point inputs.

/// Binomial coefficient: the number of ways of sampling `k` items from a set of `n` without
/// replacement.
///
/// Unlike an integer factorial formulation, this variant tolerates malformed inputs by
/// propagating NaN, defines infeasible requests (`k` outside `[0, n]`) as 0, and computes
/// larger coefficients as an iterative product, rounding the result to absorb
/// floating-point drift. Exact for all `n` up to typical pool sizes (~60).
pub fn choose(n: f64, k: f64) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    if k < 0.0 || k > n {
        return 0.0;
    }
    if k == 0.0 || k == n {
        return 1.0;
    }
    if k == 1.0 || k == n - 1.0 {
        return n;
    }
    let k = if n - k < k { n - k } else { k };
    let mut result = n;
    let mut i = 2.0;
    while i <= k {
        result *= (n - i + 1.0) / i;
        i += 1.0;
    }
    result.round()
}
