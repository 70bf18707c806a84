//! Input boundary: payload normalization and validation.
//!
//! Survey data passes through here before it reaches the balancer.
//! [`normalize`](RawSubmission::normalize) folds legacy preference payloads
//! into the canonical shape and [`validate`] rejects malformed surveys with
//! an [`InvalidInput`](crate::error::InvalidInput).

mod normalize;
mod validate;

pub use normalize::{RawPreference, RawSubmission};
pub use validate::validate;
