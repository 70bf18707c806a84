//! Staff-to-shift balancing.
//!
//! Assigns survey participants to slots in three passes:
//!
//! - **Ranking**: participants are seated on slots they ranked, settling all
//!   first choices before second choices, least-loaded first on ties.
//! - **Gap filling**: slots still short draw from the least-loaded remaining
//!   participants; these seats carry no preference rank.
//! - **Scoring**: coverage, preference satisfaction and workload balance are
//!   combined into a 0-100 fairness score, and every short slot gets an
//!   unmet-requirement line.
//!
//! Ties that survive rank and load are broken by a seeded RNG, so a run is
//! reproducible from its [`BalancingResult::seed`](crate::model::BalancingResult).

mod config;
mod gap_fill;
mod ranking;
mod rules;
mod runner;
mod scoring;
mod tracker;

pub use config::{BalanceConfig, ScoreWeights};
pub use runner::{balance, BalanceRunner};
pub use scoring::{coverage, workload_balance};
