use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use xkcd_corpus::config::Settings;
use xkcd_corpus::corpus::memory::Corpus;
use xkcd_corpus::pipeline::populate::populate;
use xkcd_corpus::source::client::ComicClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        eprintln!(
            "Usage: xkcd-corpus [--workers N] [--test-limit [N]] [--output PATH] [--endpoint URL] [--load PATH]"
        );
        eprintln!("Example: xkcd-corpus --workers 16 --output ./XKCDCorpus.json");
        eprintln!("Example: xkcd-corpus --test-limit --workers 2");
        std::process::exit(1);
    }

    let mut settings = Settings::from_env()?;
    settings.apply_args(&args)?;

    let corpus = Arc::new(Corpus::new());

    // Restore mode: read a snapshot and report what it holds.
    if let Some(path) = &settings.load_path {
        let count = corpus.load_from_file(path).await?;
        tracing::info!("Corpus holds {} comics", count);
        if let Some(last) = corpus.ids().last().and_then(|id| corpus.get(*id)) {
            tracing::info!("Latest comic:\n{}", last);
        }
        return Ok(());
    }

    tracing::info!(
        "Populating from {} with {} workers into {}",
        settings.endpoint,
        settings.workers,
        settings.output_path.display()
    );

    let client = Arc::new(ComicClient::new(&settings)?);
    let report = populate(client, corpus, &settings).await?;

    tracing::info!("Done: {}", report);
    Ok(())
}
