//! Error Taxonomy
//!
//! Every fallible operation in the library returns [`Result`]. Network and status
//! failures raised while probing for existence never reach this type: the probe
//! folds them into `false` and logs them instead.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request for a comic could not be sent, or its body could not be read.
    #[error("network failure while fetching comic {id}: {source}")]
    Network {
        id: i64,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with anything other than 200.
    #[error("received status {status} for comic {id}")]
    UnexpectedStatus { id: i64, status: u16 },

    /// The body of a 200 response was not a comic.
    #[error("unable to decode comic {id}: {source}")]
    Decode {
        id: i64,
        #[source]
        source: serde_json::Error,
    },

    #[error("id {id} already present in corpus")]
    DuplicateKey { id: i64 },

    #[error("id {id} not present in corpus")]
    MissingKey { id: i64 },

    /// Bound discovery kept finding comics past the probe cap.
    #[error("bound search exceeded probe cap of {max_probe_id}")]
    SearchExhausted { max_probe_id: i64 },

    #[error("invalid search range: low {low} > high {high}")]
    InvalidRange { low: i64, high: i64 },

    #[error("unable to encode corpus snapshot: {0}")]
    SnapshotEncode(#[source] serde_json::Error),

    #[error("unable to decode corpus snapshot: {0}")]
    SnapshotDecode(#[source] serde_json::Error),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
