//! xkcd Corpus Library
//!
//! Discovers how many comics the xkcd JSON endpoint serves, fetches all of them
//! concurrently, and keeps them in a keyed in-memory corpus that can be saved to
//! and restored from a single JSON file.
//!
//! ## Architecture Modules
//! - **`source`**: HTTP access to `<endpoint><id><suffix>` documents and the `Comic` record type.
//! - **`discovery`**: Existence probing plus exponential bracketing and binary search to find
//!   the last published comic in `O(log L)` requests.
//! - **`pipeline`**: The bounded worker pool that fetches `1..=limit` and the end-to-end populate run.
//! - **`corpus`**: The concurrent keyed store and its JSON snapshot files.
//! - **`config`**: Run settings from defaults, environment and command-line flags.
//! - **`error`**: The error taxonomy shared by all of the above.

pub mod config;
pub mod corpus;
pub mod discovery;
pub mod error;
pub mod pipeline;
pub mod source;

#[cfg(test)]
mod testing;
