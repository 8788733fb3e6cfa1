//! Exact probability derivation by multivariate hypergeometric superposition.
//!
//! Each combination is decomposed into its own frequency map and scored as a multivariate
//! hypergeometric term against the pool; the terms are summed over the set as if the
//! combinations were disjoint events. They are not always: overlapping physical draws can
//! satisfy more than one combination at once, in which case the sum double-counts. The
//! approximation is preserved deliberately — downstream expectations pin its exact
//! numeric outputs — and cross-checked against the Monte Carlo estimate in tests.

use crate::comb::choose;
use crate::expand::{Combination, CombinationSet};
use crate::symbol::{frequencies, Symbol};

/// Cumulative probability, as a percentage in `[0, 100]`, of drawing any combination in
/// the set from `pool` (subject to the disjointness approximation noted above).
pub fn derive_probability(pool: &[Symbol], combinations: &CombinationSet) -> f64 {
    let mut cumulative = 0.0;
    for combination in combinations.iter() {
        cumulative += hypergeometric_term(pool, combination);
    }
    cumulative * 100.0
}

fn hypergeometric_term(pool: &[Symbol], combination: &Combination) -> f64 {
    let needs = frequencies(combination.symbols());
    let mut numerator = 1.0;
    let mut matched = 0;
    for (symbol, &needed) in &needs {
        let available = pool.iter().filter(|pooled| *pooled == symbol).count();
        matched += available;
        numerator *= choose(available as f64, needed as f64);
    }
    let unmatched = pool.len() - matched;
    if unmatched > 0 {
        // the "don't care" remainder of the pool; always a factor of 1, kept for the
        // completeness of the hypergeometric form
        numerator *= choose(unmatched as f64, 0.0);
    }
    numerator / choose(pool.len() as f64, combination.len() as f64)
}
