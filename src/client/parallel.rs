//! Bounded fan-out/fan-in for independent API requests.
//!
//! Every request runs as its own future; results are gathered by a single
//! collecting loop, so no accumulation state is shared between requests.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::error::Result;

/// Run `fetch` for every key, keeping at most `max_concurrent` requests in flight.
///
/// Waits for every request to settle and returns the results in arrival
/// order, paired with their key. The first error is returned immediately;
/// requests still in flight are dropped, which is safe for stateless GETs.
///
/// # Example
///
/// ```ignore
/// let sizes = fetch_concurrently(
///     Resource::SAMPLED.to_vec(),
///     |resource| self.sample_size(repo, resource),
///     8,
/// )
/// .await?;
/// ```
pub async fn fetch_concurrently<K, T, F, Fut>(
    keys: Vec<K>,
    fetch: F,
    max_concurrent: usize,
) -> Result<Vec<(K, T)>>
where
    K: Copy + std::fmt::Debug,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let max_concurrent = max_concurrent.max(1);
    debug!(
        "Fetching {} resources with max {} concurrent",
        keys.len(),
        max_concurrent
    );

    let mut settled = Vec::with_capacity(keys.len());
    let mut in_flight = FuturesUnordered::new();
    let mut pending = keys.into_iter();

    let launch = |key: K| {
        let fut = fetch(key);
        async move { (key, fut.await) }
    };

    for key in pending.by_ref().take(max_concurrent) {
        in_flight.push(launch(key));
    }

    while let Some((key, result)) = in_flight.next().await {
        let value = result?;
        debug!("{:?} settled", key);
        settled.push((key, value));

        if let Some(next) = pending.next() {
            in_flight.push(launch(next));
        }
    }

    Ok(settled)
}
