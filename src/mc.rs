//! Monte Carlo estimation of draw probability.
//!
//! Each trial draws `draw_count` symbols uniformly at random from a working copy of the
//! pool, without replacement. When the draw count equals the combination length, a drawn
//! multiset succeeds iff its canonical signature appears in the precomputed signature set.
//! For longer draws, a greedy partial-match scorer buckets the drawn symbols by length and
//! consumes them against each combination in turn, shortest bucket first; a trial succeeds
//! once any combination is matched up to the full unpadded requirement length.
//!
//! The randomness source is injected, never ambient, so simulations are reproducible
//! under a seeded generator.

use rustc_hash::FxHashSet;
use tinyrand::Rand;
use tracing::debug;

use crate::expand::{signature, Combination, CombinationSet};
use crate::symbol::Symbol;

pub const DEFAULT_TRIALS: u64 = 1_000;

/// Longest symbol the partial-match scorer buckets for; one bucket per string length.
const MAX_SYMBOL_LEN: usize = 4;

/// Estimated probability, as a percentage in `[0, 100]`, of drawing any combination in
/// the set within `draw_count` draws from `pool`.
pub fn simulate(
    pool: &[Symbol],
    combinations: &CombinationSet,
    trials: u64,
    draw_count: usize,
    rand: &mut impl Rand,
) -> f64 {
    if trials == 0 || combinations.is_empty() || draw_count == 0 || draw_count > pool.len() {
        return 0.0;
    }
    let exact = draw_count == combinations.combination_len();
    let signatures: FxHashSet<String> = if exact {
        combinations.iter().map(Combination::signature).collect()
    } else {
        FxHashSet::default()
    };

    let mut successes = 0u64;
    let mut drawn: Vec<Symbol> = Vec::with_capacity(draw_count);
    for _ in 0..trials {
        let mut remaining = pool.to_vec();
        drawn.clear();
        for _ in 0..draw_count {
            let index = (random_f64(rand) * remaining.len() as f64) as usize;
            let index = index.min(remaining.len() - 1);
            drawn.push(remaining.swap_remove(index));
        }
        drawn.sort();
        let success = if exact {
            signatures.contains(&signature(&drawn))
        } else {
            satisfies_any(&drawn, combinations)
        };
        if success {
            successes += 1;
        }
    }
    successes as f64 / trials as f64 * 100.0
}

/// Greedy partial-match scorer for draws longer than the combinations. Buckets persist
/// across combinations within the trial: a drawn symbol consumed against one combination
/// is not offered to the next.
pub(crate) fn satisfies_any(drawn: &[Symbol], combinations: &CombinationSet) -> bool {
    let mut buckets: [Vec<&Symbol>; MAX_SYMBOL_LEN] = Default::default();
    for symbol in drawn {
        match symbol.len() {
            1..=MAX_SYMBOL_LEN => buckets[symbol.len() - 1].push(symbol),
            _ => debug!("ignoring overlong symbol {symbol}"),
        }
    }

    let needed = combinations.criteria_len();
    for combination in combinations.iter() {
        let mut matched = 0;
        for target in combination.symbols() {
            for bucket in &mut buckets {
                if let Some(index) = bucket.iter().position(|symbol| symbol.provides(target)) {
                    bucket.remove(index);
                    matched += 1;
                    break;
                }
            }
        }
        if matched == needed {
            return true;
        }
    }
    false
}

#[inline]
fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}
