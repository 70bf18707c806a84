//! Preference-ranked staff-to-shift balancing.
//!
//! Staff rank the shift slots (typically holiday dates) they would prefer to
//! work. The balancer places them on slots up to each slot's capacity:
//!
//! - **Preference first**: ranked choices are honored in rank order when a
//!   slot is contested.
//! - **Fair load**: ties go to whoever holds the fewest slots so far, and a
//!   configurable cap limits how many slots one person can take.
//! - **Coverage**: slots still short are filled from the least-loaded staff.
//! - **Quality report**: a 0-100 fairness score (coverage 40%, preference
//!   satisfaction 40%, workload balance 20%) and a line per short slot.
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use u_rota::balance::{BalanceConfig, BalanceRunner};
//! use u_rota::model::{Participant, PreferenceSubmission, Slot, Survey};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2026, 12, d).unwrap();
//! let at = Utc.with_ymd_and_hms(2026, 11, 1, 9, 0, 0).unwrap();
//!
//! let survey = Survey::new(
//!     vec![
//!         Slot::new("xmas", "Christmas Day", day(25), 2),
//!         Slot::new("nye", "New Year's Eve", day(31), 1),
//!     ],
//!     vec![
//!         Participant::new("ana", "Ana", "ana@example.com", at),
//!         Participant::new("ben", "Ben", "ben@example.com", at),
//!         Participant::new("cho", "Cho", "cho@example.com", at),
//!     ],
//! )
//! .with_submission(PreferenceSubmission::from_order("ana", ["xmas", "nye"]))
//! .with_submission(PreferenceSubmission::from_order("ben", ["nye"]));
//!
//! let result = BalanceRunner::run(&survey, &BalanceConfig::default().with_seed(42)).unwrap();
//!
//! assert!(result.unmet_requirements.is_empty());
//! assert_eq!(result.assigned_count(), 3);
//! ```
//!
//! # Architecture
//!
//! [`input`] normalizes and validates survey data, [`dispatching`] provides
//! the rule engine used to order candidates, [`balance`] runs the passes and
//! [`report`] projects the result into per-staff and summary views.

pub mod balance;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod model;
pub mod report;

pub use balance::{balance, BalanceConfig, BalanceRunner};
pub use error::{BalanceError, InvalidInput};
pub use model::BalancingResult;
