//! Credence CLI entrypoint.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;

use credence::config::Config;
use credence::pipeline::{DefaultValidator, QueryUrlPair, read_pairs};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(
    name = "credence",
    version,
    about = "Score how credible a web page is as an answer to a query",
    long_about = "Fetches each URL, scores its paragraph text for relevance to the query \
                  (embedding similarity) and for bias (sentiment), and prints one JSON \
                  record per pair.\n\n\
                  Models are read from CREDENCE_EMBEDDER_PATH and CREDENCE_CLASSIFIER_PATH; \
                  without them deterministic stub models are used. The embedder must be a \
                  BERT-architecture sentence model (all-MiniLM-L6-v2 and similar); MPNet \
                  models such as all-mpnet-base-v2 are not supported.",
    after_help = "EXAMPLES:\n    credence 'climate change effects' https://example.org/climate\n\n\
                  # Tab-separated query<TAB>url lines\n    credence --pairs pairs.tsv --pretty"
)]
struct Cli {
    /// Search query to score the page against.
    #[arg(required_unless_present = "pairs", requires = "url")]
    query: Option<String>,

    /// Page to fetch and score.
    #[arg(requires = "query")]
    url: Option<String>,

    /// File of `query<TAB>url` lines (blank lines and `#` comments skipped).
    #[arg(long, value_name = "FILE", conflicts_with_all = ["query", "url"])]
    pairs: Option<PathBuf>,

    /// Fetch timeout in seconds (overrides CREDENCE_FETCH_TIMEOUT_SECS).
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Pretty-print each JSON record.
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn pairs(&self) -> anyhow::Result<Vec<QueryUrlPair>> {
        if let Some(ref path) = self.pairs {
            return Ok(read_pairs(path)?);
        }

        match (&self.query, &self.url) {
            (Some(query), Some(url)) => Ok(vec![QueryUrlPair::new(query, url)]),
            _ => anyhow::bail!("either <QUERY> <URL> or --pairs <FILE> is required"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env()?;
    if let Some(secs) = cli.timeout {
        config = config.with_fetch_timeout(Duration::from_secs(secs));
    }

    let pairs = cli.pairs()?;
    tracing::info!(pairs = pairs.len(), "Credence starting");

    let validator = DefaultValidator::load(&config).context("failed to initialise models")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for pair in &pairs {
        let evaluation = validator.evaluate(&pair.query, &pair.url).await;
        let record = evaluation.record();

        let line = if cli.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        writeln!(out, "{}", line)?;
    }

    out.flush()?;
    Ok(())
}
