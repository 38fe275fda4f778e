use crate::error::Error;
use crate::source::client::ComicClient;

use std::future::Future;

/// A yes/no probe that is monotonic in the ID: true for `1..=L`, false past `L`.
///
/// Implementations must not fail. Anything that prevents a definite "yes" is a "no".
pub trait ExistencePredicate: Send + Sync {
    fn exists(&self, id: i64) -> impl Future<Output = bool> + Send;
}

impl<F> ExistencePredicate for F
where
    F: Fn(i64) -> bool + Send + Sync,
{
    async fn exists(&self, id: i64) -> bool {
        self(id)
    }
}

impl ExistencePredicate for ComicClient {
    async fn exists(&self, id: i64) -> bool {
        match self.check_exists(id).await {
            Ok(()) => true,
            Err(Error::UnexpectedStatus { status, .. }) => {
                tracing::debug!("Received {} for comic {}", status, id);
                false
            }
            Err(e) => {
                tracing::warn!("Existence check for comic {} failed: {}", id, e);
                false
            }
        }
    }
}
