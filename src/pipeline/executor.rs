//! Fetch Worker Pool
//!
//! Fills the corpus with every comic in `1..=limit` using a fixed number of
//! concurrent workers.
//!
//! ## Run Phases
//! - **Produce**: A producer task enqueues each ID exactly once into a channel sized to hold them all,
//!   then drops its sender, closing the queue. The run waits for the producer before going further.
//! - **Consume**: `worker_count` tasks share the receiver. Each pulls an ID, fetches it, and inserts it.
//!   A worker whose job fails logs the failure and returns; the others keep draining the queue.
//! - **Join**: The run completes once every worker has returned.

use super::types::{PipelineReport, WorkerOutcome};
use crate::corpus::memory::Corpus;
use crate::source::client::ComicSource;

use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;

type JobQueue = Arc<Mutex<mpsc::Receiver<i64>>>;

/// Concurrent fetch-and-insert over a contiguous ID range.
pub struct FetchPipeline<S> {
    source: Arc<S>,
    corpus: Arc<Corpus>,
    worker_count: usize,
}

impl<S> FetchPipeline<S>
where
    S: ComicSource + 'static,
{
    /// A `worker_count` of zero is treated as one.
    pub fn new(source: Arc<S>, corpus: Arc<Corpus>, worker_count: usize) -> Self {
        Self {
            source,
            corpus,
            worker_count: worker_count.max(1),
        }
    }

    /// Fetches every ID in `1..=limit` and inserts each success into the corpus.
    ///
    /// Inserts happen concurrently and in no particular order. Writers never
    /// collide because the queue hands out each ID exactly once; the corpus
    /// still rejects a repeated ID, so any change that could enqueue an ID twice
    /// (retries, overlapping ranges) shows up as a logged `DuplicateKey` rather
    /// than a silent overwrite.
    pub async fn run(&self, limit: i64) -> PipelineReport {
        let mut report = PipelineReport::new(limit);
        if limit <= 0 {
            tracing::info!("Nothing to fetch for limit {}", limit);
            return report;
        }

        let (sender, receiver) = mpsc::channel::<i64>(limit as usize);

        let producer = tokio::spawn(async move {
            for id in 1..=limit {
                if sender.send(id).await.is_err() {
                    break;
                }
            }
        });
        if let Err(e) = producer.await {
            tracing::error!("Job producer failed: {}", e);
        }

        let jobs: JobQueue = Arc::new(Mutex::new(receiver));

        tracing::info!(
            "Dispatching {} workers over {} jobs",
            self.worker_count,
            limit
        );

        let mut workers = JoinSet::new();
        for worker_id in 0..self.worker_count {
            workers.spawn(worker_loop(
                worker_id,
                self.source.clone(),
                self.corpus.clone(),
                jobs.clone(),
            ));
        }

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(outcome) => report.record(outcome),
                Err(e) => tracing::error!("Fetch worker panicked: {}", e),
            }
        }

        tracing::info!("Populated corpus: {}", report);
        report
    }
}

async fn worker_loop<S: ComicSource>(
    worker_id: usize,
    source: Arc<S>,
    corpus: Arc<Corpus>,
    jobs: JobQueue,
) -> WorkerOutcome {
    let mut outcome = WorkerOutcome::new(worker_id);

    loop {
        let next = jobs.lock().await.recv().await;
        let Some(id) = next else {
            break;
        };

        tracing::debug!("Worker {} processing comic {}", worker_id, id);

        let comic = match source.fetch_comic(id).await {
            Ok(comic) => comic,
            Err(e) => {
                tracing::error!("Error encountered when fetching {}: {}", id, e);
                outcome.abandoned_at = Some(id);
                break;
            }
        };

        if let Err(e) = corpus.insert(id, comic) {
            tracing::error!("Error encountered when inserting {}: {}", id, e);
            outcome.abandoned_at = Some(id);
            break;
        }

        outcome.inserted += 1;
    }

    tracing::debug!(
        "Worker {} finished after {} comics",
        worker_id,
        outcome.inserted
    );
    outcome
}
