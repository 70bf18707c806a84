//! Generic priority rule composition.
//!
//! Ranks items with a sequence of scoring rules: rules are applied in
//! order and later rules act as tie-breakers when earlier rules cannot
//! differentiate. Items that tie on every rule are ordered by a
//! [`TieBreaker`], either their input order or a seeded shuffle.
//!
//! The balancer orders slot candidates with this engine (see
//! [`crate::balance`]), but nothing here knows about slots or staff.
//!
//! # References
//!
//! Dispatching rule composition: Pinedo (2016), "Scheduling: Theory,
//! Algorithms, and Systems"

mod engine;
mod types;

pub use engine::{RuleEngine, TieBreaker};
pub use types::PriorityRule;
