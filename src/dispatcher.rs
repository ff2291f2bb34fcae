use futures::{StreamExt, stream};
use std::sync::Arc;

use crate::prober::Probe;
use crate::types::ProbeResult;

/// Fans probes out across all hosts with a global concurrency ceiling.
///
/// The full hosts x count workload is flattened into a single stream and
/// driven with `buffer_unordered`, so at most `concurrency` probes are in
/// flight at any moment across the whole run. Probes past the ceiling wait
/// for a free slot; nothing queues beyond that.
pub struct Dispatcher {
    prober: Arc<dyn Probe>,
    concurrency: usize,
}

impl Dispatcher {
    pub fn new(prober: Arc<dyn Probe>, concurrency: usize) -> Self {
        Self {
            prober,
            concurrency: concurrency.max(1),
        }
    }

    /// Issue `count` probes for every host concurrently.
    ///
    /// Batches come back grouped per host in the input order. Within a
    /// batch the sequence position reflects completion order, which the
    /// aggregator treats as a multiset anyway. A failed or errored probe
    /// never cancels its siblings.
    pub async fn run(&self, hosts: &[String], count: usize) -> Vec<(String, Vec<ProbeResult>)> {
        let jobs: Vec<(usize, String)> = hosts
            .iter()
            .enumerate()
            .flat_map(|(index, host)| (0..count).map(move |_| (index, host.clone())))
            .collect();

        let mut in_flight = stream::iter(jobs)
            .map(|(index, url)| {
                let prober = Arc::clone(&self.prober);
                async move { (index, prober.probe(&url).await) }
            })
            .buffer_unordered(self.concurrency);

        let mut batches: Vec<Vec<ProbeResult>> = vec![Vec::new(); hosts.len()];
        while let Some((index, result)) = in_flight.next().await {
            batches[index].push(result);
        }

        hosts.iter().cloned().zip(batches).collect()
    }
}
