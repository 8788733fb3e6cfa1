//! Combination expansion: enumerates every distinct, supply-feasible assignment of pool
//! symbols capable of satisfying a requirement.
//!
//! Multi-threshold symbols create overlapping, order-dependent substitution choices that
//! resist a closed-form decomposition, so the expander performs an explicit breadth-first
//! search over canonical (sorted) states, deduplicated by signature. Newly discovered
//! states are fed back into the worklist until no substitution yields anything unseen. A
//! safety bound on the number of states popped guarantees termination on highly
//! combinatorial inputs; exceeding it surfaces as [CapacityExceeded] rather than a
//! silently truncated set.

use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

use crate::symbol::{frequencies, Symbol};

pub const DEFAULT_SAFETY_BOUND: usize = 300;

/// One concrete way of satisfying a requirement: a canonically sorted symbol sequence of
/// draw-count length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    symbols: Vec<Symbol>,
}

impl Combination {
    pub fn new(mut symbols: Vec<Symbol>) -> Self {
        symbols.sort();
        Self { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Canonical comma-joined form; two combinations are the same entity iff their
    /// signatures are equal.
    pub fn signature(&self) -> String {
        signature(&self.symbols)
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.signature())
    }
}

pub fn signature(symbols: &[Symbol]) -> String {
    let mut joined = String::with_capacity(symbols.len() * 2);
    for (index, symbol) in symbols.iter().enumerate() {
        if index != 0 {
            joined.push(',');
        }
        joined.push_str(symbol.as_str());
    }
    joined
}

/// The deduplicated set of combinations discovered for one requirement and pool, in
/// discovery order. Also carries the unpadded requirement length, which the simulator's
/// partial-match scorer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSet {
    combinations: Vec<Combination>,
    combination_len: usize,
    criteria_len: usize,
}

impl CombinationSet {
    pub fn new(combinations: Vec<Combination>, combination_len: usize, criteria_len: usize) -> Self {
        debug_assert!(combinations
            .iter()
            .all(|combination| combination.len() == combination_len));
        Self {
            combinations,
            combination_len,
            criteria_len,
        }
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combination> {
        self.combinations.iter()
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Length of every member combination (the draw count used to seed expansion).
    pub fn combination_len(&self) -> usize {
        self.combination_len
    }

    /// Length of the original, unpadded requirement.
    pub fn criteria_len(&self) -> usize {
        self.criteria_len
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("combination search exceeded the safety bound of {bound} states")]
pub struct CapacityExceeded {
    pub bound: usize,
}

#[derive(Debug, Clone)]
pub struct Expander {
    safety_bound: usize,
}

impl Default for Expander {
    fn default() -> Self {
        Self {
            safety_bound: DEFAULT_SAFETY_BOUND,
        }
    }
}

impl Expander {
    pub fn with_safety_bound(mut self, safety_bound: usize) -> Self {
        self.safety_bound = safety_bound;
        self
    }

    /// Enumerates all combinations satisfying `criteria` under the supply constraints of
    /// `pool`. If `draw_count` exceeds the criteria length, the requirement is padded with
    /// wildcards and the extra slots may absorb any pool symbol.
    pub fn expand(
        &self,
        criteria: &[Symbol],
        pool: &[Symbol],
        draw_count: Option<usize>,
    ) -> Result<CombinationSet, CapacityExceeded> {
        let draw_count = draw_count.unwrap_or(criteria.len()).max(criteria.len());
        let padded = draw_count > criteria.len();

        // In wildcard mode every pool symbol is a candidate (a wildcard slot can absorb
        // even a blank), capped at its full availability. Otherwise the pool is reduced:
        // each symbol capped at the most requirement slots it could possibly fill, with
        // non-contributors dropped entirely. The caps are frequencies of the capped pool,
        // so a cap never exceeds actual availability.
        let caps = if padded {
            frequencies(pool)
        } else {
            frequencies(&reduce_pool(criteria, pool))
        };
        let mut candidates: Vec<Symbol> = caps.keys().cloned().collect();
        candidates.sort();

        let mut seed = criteria.to_vec();
        seed.resize(draw_count, Symbol::wildcard());
        seed.sort();

        let mut discovered: Vec<Vec<Symbol>> = vec![];
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut worklist: VecDeque<Vec<Symbol>> = VecDeque::new();
        seen.insert(signature(&seed));
        worklist.push_back(seed.clone());
        discovered.push(seed);

        let mut popped = 0;
        while let Some(state) = worklist.pop_front() {
            popped += 1;
            if popped >= self.safety_bound {
                debug!("aborting after {popped} states with {} discovered", discovered.len());
                return Err(CapacityExceeded {
                    bound: self.safety_bound,
                });
            }
            let unresolved = state.iter().any(Symbol::is_wildcard);
            for slot in 0..state.len() {
                for candidate in &candidates {
                    let occupant = &state[slot];
                    if candidate == occupant {
                        // exact match: the state already represents this assignment
                        continue;
                    }
                    let wild = occupant.is_wildcard();
                    if !wild && (unresolved || !candidate.provides(occupant)) {
                        continue;
                    }
                    let current = state.iter().filter(|symbol| *symbol == candidate).count();
                    // A wildcard slot is being filled fresh, so the cap is inclusive; a
                    // non-wildcard slot already holds a valid assignment being upgraded,
                    // so the cap is strict. The asymmetry is deliberate: it determines
                    // which states are reachable.
                    let admissible = if wild {
                        current <= caps[candidate]
                    } else {
                        current < caps[candidate]
                    };
                    if !admissible {
                        continue;
                    }
                    let mut next = state.clone();
                    next[slot] = candidate.clone();
                    next.sort();
                    if seen.insert(signature(&next)) {
                        worklist.push_back(next.clone());
                        discovered.push(next);
                    }
                }
            }
        }

        // Scaffold states (any unresolved wildcard) are not draw outcomes, and a state
        // naming a symbol absent from the pool can never be drawn.
        let available = frequencies(pool);
        let combinations: Vec<Combination> = discovered
            .into_iter()
            .filter(|state| {
                state
                    .iter()
                    .all(|symbol| !symbol.is_wildcard() && available.contains_key(symbol))
            })
            .map(|symbols| Combination { symbols })
            .collect();
        debug!(
            "expanded {} combinations from {popped} states for criteria {}",
            combinations.len(),
            signature(criteria)
        );
        Ok(CombinationSet::new(combinations, draw_count, criteria.len()))
    }
}

/// Caps each pool symbol at the maximum number of requirement slots it could fill:
/// exact-match symbols at their requirement frequency, multi-threshold symbols at the
/// number of requirement slots (duplicates included) whose letter they contain. Symbols
/// that cannot contribute are dropped. Bounds the branching factor and prevents states
/// holding more copies of a symbol than the requirement could absorb.
fn reduce_pool(criteria: &[Symbol], pool: &[Symbol]) -> Vec<Symbol> {
    let criteria_freqs = frequencies(criteria);
    let mut reduced: Vec<Symbol> = Vec::with_capacity(pool.len());
    for symbol in pool {
        let cap = match criteria_freqs.get(symbol) {
            Some(&frequency) => frequency,
            None => criteria
                .iter()
                .filter(|slot| symbol.provides(slot))
                .count(),
        };
        let kept = reduced.iter().filter(|kept| *kept == symbol).count();
        if cap > 0 && kept < cap {
            reduced.push(symbol.clone());
        }
    }
    reduced.sort();
    reduced
}
