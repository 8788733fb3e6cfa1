//! Exact and Monte Carlo draw-probability engine for elemental threshold requirements in
//! card decks. Enumerates every supply-feasible combination of threshold symbols capable of
//! satisfying a requirement, then evaluates the odds of drawing one — either in closed form
//! (multivariate hypergeometric) or by simulated draws without replacement.

pub mod comb;
pub mod data;
pub mod expand;
pub mod file;
pub mod hypergeom;
pub mod mc;
pub mod print;
pub mod symbol;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
