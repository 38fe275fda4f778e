//! Limit Search
//!
//! Finds the largest ID the endpoint serves in `O(log L)` round trips: doubling
//! until the first miss gives a bracket, then a binary search inside the
//! bracket pins down the last hit. Every predicate call is a network request,
//! so both phases evaluate the predicate exactly once per iteration.

use super::probe::ExistencePredicate;
use super::types::Bracket;
use crate::error::{Error, Result};

/// Doubles a probe ID from 1 until the predicate first fails.
///
/// Returns `Bracket { low: curr / 2, high: curr }` at the first miss. Gives up
/// with [`Error::SearchExhausted`] once the next probe would exceed `max_probe_id`.
pub async fn find_bracket<P: ExistencePredicate>(probe: &P, max_probe_id: i64) -> Result<Bracket> {
    let mut curr: i64 = 1;

    loop {
        tracing::debug!("Bound finder probing {}", curr);

        if curr > max_probe_id {
            tracing::warn!(
                "Bound finder passed probe cap {} without a miss, giving up",
                max_probe_id
            );
            return Err(Error::SearchExhausted { max_probe_id });
        }

        if !probe.exists(curr).await {
            return Ok(Bracket::new(curr / 2, curr));
        }

        curr = curr
            .checked_mul(2)
            .ok_or(Error::SearchExhausted { max_probe_id })?;
    }
}

/// Returns the largest ID in `[low, high]` for which `probe` holds.
///
/// The caller guarantees `probe(low)` is true and `probe(high)` is false; neither
/// end is re-checked. `low == high` is answered without probing.
pub async fn binary_search_flip<P: ExistencePredicate>(probe: &P, low: i64, high: i64) -> Result<i64> {
    if low > high {
        tracing::error!(
            "Invalid request to binary search (low > high): {}, {}",
            low,
            high
        );
        return Err(Error::InvalidRange { low, high });
    }
    if low == high {
        return Ok(low);
    }

    // Search for the first miss in (low, high]; the answer sits just before it.
    let mut first_candidate = low + 1;
    let mut first_miss = high;

    while first_candidate < first_miss {
        tracing::debug!("low: {} | high: {}", first_candidate, first_miss);

        let mid = first_candidate + (first_miss - first_candidate) / 2;
        if probe.exists(mid).await {
            first_candidate = mid + 1;
        } else {
            first_miss = mid;
        }
    }

    Ok(first_miss - 1)
}

/// Brackets and then pins down the last existing ID.
///
/// Returns 0 when ID 1 does not exist.
pub async fn search_limit<P: ExistencePredicate>(probe: &P, max_probe_id: i64) -> Result<i64> {
    let bracket = find_bracket(probe, max_probe_id).await?;
    tracing::info!("Limit bracketed in {}", bracket);

    binary_search_flip(probe, bracket.low, bracket.high).await
}
