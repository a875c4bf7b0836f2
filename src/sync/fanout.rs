use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;

/// Run `task` for every item concurrently and return the results in input order.
///
/// All futures are in flight at once (no concurrency cap). Each result is tagged
/// with its submission index and the collection is reassembled by index once
/// every future has settled, so completion order never leaks into the output.
pub async fn fan_out<T, O, F, Fut>(items: Vec<T>, task: F) -> Vec<O>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = O>,
{
    let mut in_flight: FuturesUnordered<_> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let future = task(item);
            async move { (index, future.await) }
        })
        .collect();

    let mut settled = Vec::with_capacity(in_flight.len());
    while let Some(result) = in_flight.next().await {
        settled.push(result);
    }

    settled.sort_unstable_by_key(|(index, _)| *index);
    settled.into_iter().map(|(_, output)| output).collect()
}
