use std::fmt;

/// What a single worker did before it returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerOutcome {
    pub worker_id: usize,
    /// Comics this worker fetched and stored.
    pub inserted: usize,
    /// The job that made this worker stop early, if any.
    pub abandoned_at: Option<i64>,
}

impl WorkerOutcome {
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            inserted: 0,
            abandoned_at: None,
        }
    }
}

/// Summary of one pipeline run over `1..=limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub limit: i64,
    pub inserted: usize,
    /// `(worker_id, id)` for every worker that quit on a failed job.
    pub abandoned: Vec<(usize, i64)>,
}

impl PipelineReport {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: WorkerOutcome) {
        self.inserted += outcome.inserted;
        if let Some(id) = outcome.abandoned_at {
            self.abandoned.push((outcome.worker_id, id));
        }
    }

    /// True when every ID in the range ended up in the corpus.
    pub fn is_complete(&self) -> bool {
        self.inserted as i64 == self.limit.max(0)
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} comics inserted, {} worker(s) stopped early",
            self.inserted,
            self.limit.max(0),
            self.abandoned.len()
        )
    }
}
