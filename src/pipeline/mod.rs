//! Population Pipeline Module
//!
//! Turns a discovered (or fixed) limit into a populated, saved corpus.
//!
//! ## Submodules
//! - **`executor`**: The bounded worker pool that fetches `1..=limit` concurrently.
//! - **`populate`**: End-to-end run: find the limit, fetch everything, write the snapshot.
//! - **`types`**: Per-worker outcomes and the run report.

pub mod executor;
pub mod populate;
pub mod types;
