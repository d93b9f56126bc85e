use std::path::Path;

use sitechunk_chunking::{ChunkingConfig, TokenCounter, accumulate, split_page};
use sitechunk_config::{Config, Strategy};
use sitechunk_domain::{Dataset, PipelineOutput};

use crate::{PageSource, Result, total_tokens};

/// Which pages receive scraped metadata in the sentence pipeline.
#[derive(Clone, Debug)]
pub struct Enrichment {
	/// Lower-cased title of the page that gets the team members.
	pub team_page_title: String,
	/// Path of the page that gets the topic rows.
	pub topics_path: String,
}
impl From<&sitechunk_config::Source> for Enrichment {
	fn from(cfg: &sitechunk_config::Source) -> Self {
		Self {
			team_page_title: cfg.team_page_title.to_lowercase(),
			topics_path: cfg.topics_path.clone(),
		}
	}
}

/// Runs the pipeline selected by `cfg.chunking.strategy`.
pub async fn run<S, C>(cfg: &Config, source: &S, counter: &C) -> Result<PipelineOutput>
where
	S: PageSource + ?Sized,
	C: TokenCounter,
{
	let chunking = ChunkingConfig {
		budget: cfg.chunking.budget,
		min_chunk_tokens: cfg.chunking.min_chunk_tokens,
	};

	tracing::info!(strategy = ?cfg.chunking.strategy, budget = chunking.budget, "Starting pipeline.");

	let output = match cfg.chunking.strategy {
		Strategy::Accumulate =>
			PipelineOutput::Accumulated(run_accumulate(source, counter, &chunking).await?),
		Strategy::Sentence => {
			let enrichment = Enrichment::from(&cfg.source);
			let datasets =
				run_sentence(source, counter, &cfg.source.page_paths, &enrichment, &chunking)
					.await?;

			PipelineOutput::PerPage(datasets)
		},
	};

	tracing::info!(chunks = output.chunk_count(), "Pipeline finished.");

	Ok(output)
}

/// Scrapes pages, team members and topics concurrently, then packs every page into cross-page
/// chunks.
pub async fn run_accumulate<S, C>(source: &S, counter: &C, cfg: &ChunkingConfig) -> Result<Dataset>
where
	S: PageSource + ?Sized,
	C: TokenCounter,
{
	let (pages, team_members, topics) =
		tokio::try_join!(source.pages(), source.team_members(), source.topics())?;
	let tokens = total_tokens(&pages, Some(team_members.as_slice()), Some(topics.as_slice()));
	let chunks = accumulate(&pages, Some(team_members.as_slice()), cfg, counter);

	tracing::info!(
		pages = pages.len(),
		team_members = team_members.len(),
		topics = topics.len(),
		chunks = chunks.len(),
		tokens,
		"Assembled dataset."
	);

	Ok(Dataset { pages, team_members: Some(team_members), chunks: Some(chunks), tokens })
}

/// Scrapes and chunks one page at a time. A failing page stops the run before the next page is
/// fetched.
pub async fn run_sentence<S, C>(
	source: &S,
	counter: &C,
	paths: &[String],
	enrichment: &Enrichment,
	cfg: &ChunkingConfig,
) -> Result<Vec<Dataset>>
where
	S: PageSource + ?Sized,
	C: TokenCounter,
{
	let mut datasets = Vec::with_capacity(paths.len());
	let mut tokens = 0;

	for path in paths {
		let mut page = source.page(path).await?;

		if page.title.to_lowercase() == enrichment.team_page_title {
			page.team_members = Some(source.team_members().await?);

			tracing::info!(url = %page.url, "Attached team members.");
		}
		if *path == enrichment.topics_path {
			page.topics = Some(source.topics().await?);

			tracing::info!(url = %page.url, "Attached topics.");
		}

		tokens += page.tokens;

		datasets.push(Dataset::from_chunks(split_page(&page, cfg, counter)));
	}

	tracing::info!(pages = paths.len(), tokens, "Chunked pages.");

	Ok(datasets)
}

/// Hands the run's output to the JSON sink. A failed write is logged and fails the run.
pub fn persist(output: &PipelineOutput, path: &Path) -> Result<()> {
	if let Err(err) = sitechunk_storage::write_json(path, output) {
		tracing::error!(path = %path.display(), error = %err, "Failed to write output.");

		return Err(err.into());
	}

	Ok(())
}
