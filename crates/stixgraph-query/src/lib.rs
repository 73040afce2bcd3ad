//! stixgraph Query Fragments
//!
//! Escaping and small clause builders for the query-construction layer that
//! loads elements and relations into the graph store. Everything here is
//! pure string work; no query is ever executed from this crate.

pub mod fragment;

pub use fragment::{has_clause, match_clause, prepare};
