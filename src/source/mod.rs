//! Comic Source Module
//!
//! Talks to the remote endpoint that publishes one JSON document per comic.
//!
//! ## Workflow
//! 1. **Address**: Builds `<endpoint><id><suffix>` for an ID.
//! 2. **Fetch**: Issues a single GET, with no retries. Any status other than 200 is a failure.
//! 3. **Decode**: Parses the body into a [`types::Comic`], ignoring fields the corpus does not keep.

pub mod client;
pub mod types;
