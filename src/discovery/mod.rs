//! Limit Discovery Module
//!
//! Determines how many comics the endpoint serves without fetching them.
//!
//! ## Core Concepts
//! - **Existence predicate**: A cheap probe that is true for every ID up to an unknown limit `L` and false beyond.
//! - **Bracketing**: Exponential doubling finds `low` (present) and `high` (absent) with `high <= 2 * low`.
//! - **Flip search**: Binary search inside the bracket finds the exact ID where the predicate flips.
//!
//! Failures never look like a legitimate answer: a search that hits the probe cap
//! returns [`crate::error::Error::SearchExhausted`] instead of a zero bracket.

pub mod probe;
pub mod search;
pub mod types;
