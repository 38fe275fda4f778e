//! Corpus Storage Module
//!
//! Holds fetched comics in memory and moves them to and from disk.
//!
//! ## Core Concepts
//! - **Uniqueness**: One comic per ID; inserting an existing ID fails and keeps the stored comic.
//! - **Concurrency**: The backing map is safe for concurrent writers, which the fetch pipeline relies on.
//! - **Snapshots**: The whole corpus is encoded as a single JSON object keyed by ID. Save and load are all-or-nothing.

pub mod memory;
pub mod persist;

#[cfg(test)]
mod tests;
