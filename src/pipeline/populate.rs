use super::executor::FetchPipeline;
use super::types::PipelineReport;
use crate::config::{LimitMode, Settings};
use crate::corpus::memory::Corpus;
use crate::discovery::probe::ExistencePredicate;
use crate::discovery::search::search_limit;
use crate::error::Result;
use crate::source::client::ComicSource;

use std::sync::Arc;
use tracing::Instrument;

/// Runs a full population pass and writes the corpus to `settings.output_path`.
///
/// The snapshot is written even when some comics failed to fetch. A failed
/// limit search returns early and writes nothing.
pub async fn populate<S>(
    source: Arc<S>,
    corpus: Arc<Corpus>,
    settings: &Settings,
) -> Result<PipelineReport>
where
    S: ComicSource + ExistencePredicate + 'static,
{
    let run_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("populate", run_id = %run_id);

    run(source, corpus, settings).instrument(span).await
}

async fn run<S>(source: Arc<S>, corpus: Arc<Corpus>, settings: &Settings) -> Result<PipelineReport>
where
    S: ComicSource + ExistencePredicate + 'static,
{
    tracing::info!("Populating corpus");

    let limit = match settings.limit {
        LimitMode::Discover => {
            tracing::info!("Finding comic limit");
            search_limit(&*source, settings.max_probe_id).await?
        }
        LimitMode::Fixed(limit) => limit,
    };
    tracing::info!("Found limit as {}", limit);

    let pipeline = FetchPipeline::new(source, corpus.clone(), settings.workers);
    let report = pipeline.run(limit).await;

    corpus.save_to_file(&settings.output_path).await?;
    Ok(report)
}
