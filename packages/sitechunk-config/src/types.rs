use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub source: Source,
	pub chunking: Chunking,
	pub output: Output,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Source {
	/// Scheme and host every path is appended to, e.g. "https://prealxse.com".
	pub base_url: String,
	/// Page paths, scraped in this order.
	pub page_paths: Vec<String>,
	pub team_path: String,
	pub topics_path: String,
	/// Title of the page that receives the team members in the sentence pipeline.
	#[serde(default = "default_team_page_title")]
	pub team_page_title: String,
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Chunking {
	pub strategy: Strategy,
	pub budget: usize,
	pub min_chunk_tokens: usize,
	/// Hub repository of the tokenizer. Used when `tokenizer_file` is unset.
	pub tokenizer_repo: Option<String>,
	/// Local `tokenizer.json`; takes precedence over `tokenizer_repo`.
	pub tokenizer_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
	/// Pack whole pages into cross-page chunks.
	Accumulate,
	/// Split each page on sentences and merge undersized pieces.
	Sentence,
}

#[derive(Debug, Deserialize)]
pub struct Output {
	pub path: PathBuf,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_team_page_title() -> String {
	"community".to_string()
}
