//! Testing helpers.

use crate::symbol::Symbol;

/// Splits a comma-joined signature into symbols; the inverse of
/// [signature](crate::expand::signature).
pub fn syms(joined: &str) -> Vec<Symbol> {
    if joined.is_empty() {
        return vec![];
    }
    joined.split(',').map(Symbol::from).collect()
}

/// The 30-card site deck the original probability figures were pinned against.
pub fn reference_deck() -> Vec<Symbol> {
    syms("a,a,a,a,a,a,ae,ae,ae,aef,aew,e,e,e,e,e,e,e,e,e,efw,ew,ew,ew,w,w,w,x,x,x")
}
