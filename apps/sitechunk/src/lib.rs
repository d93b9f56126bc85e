use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use sitechunk_chunking::{DEFAULT_TOKENIZER_REPO, Tokenizer};
use sitechunk_config::{Config, Strategy};
use sitechunk_source::HttpSource;

#[derive(Debug, Parser)]
#[command(
	version = sitechunk_cli::VERSION,
	rename_all = "kebab",
	styles = sitechunk_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Overrides `chunking.strategy` from the config file.
	#[arg(long, value_enum)]
	pub strategy: Option<StrategyArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
	/// Pack whole pages into cross-page chunks.
	Accumulate,
	/// Split each page on sentences and merge undersized pieces.
	Sentence,
}
impl From<StrategyArg> for Strategy {
	fn from(arg: StrategyArg) -> Self {
		match arg {
			StrategyArg::Accumulate => Self::Accumulate,
			StrategyArg::Sentence => Self::Sentence,
		}
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let mut config = sitechunk_config::load(&args.config)?;

	if let Some(strategy) = args.strategy {
		config.chunking.strategy = strategy.into();
	}

	init_tracing(&config);

	tracing::info!(strategy = ?config.chunking.strategy, "Loaded config.");

	let tokenizer = load_tokenizer(&config)?;
	let source = HttpSource::new(&config.source, &tokenizer)?;
	let output = sitechunk_service::run(&config, &source, &tokenizer).await?;

	sitechunk_service::persist(&output, &config.output.path)?;

	tracing::info!(
		path = %config.output.path.display(),
		chunks = output.chunk_count(),
		"Run complete."
	);

	Ok(())
}

fn init_tracing(config: &Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_tokenizer(config: &Config) -> color_eyre::Result<Tokenizer> {
	let repo = config.chunking.tokenizer_repo.as_deref().unwrap_or(DEFAULT_TOKENIZER_REPO);
	let file = config.chunking.tokenizer_file.as_deref();

	tracing::info!(repo, file = ?file, "Loading tokenizer.");

	sitechunk_chunking::load_tokenizer(repo, file).map_err(|err| eyre::eyre!(err))
}
