mod accumulate;
mod sentence;
mod tokenizer;

pub use accumulate::accumulate;
pub use sentence::{merge_undersized, split_page};
pub use tokenizer::{
	DEFAULT_TOKENIZER_REPO, TokenCounter, Tokenizer, TokenizerError, load_tokenizer,
};

use sitechunk_domain::{Chunk, TeamMember, TopicRow};

pub const DEFAULT_BUDGET: usize = 200;
pub const DEFAULT_MIN_CHUNK_TOKENS: usize = 100;

#[derive(Clone, Debug)]
pub struct ChunkingConfig {
	/// Flush/split threshold shared by both strategies.
	pub budget: usize,
	/// Sentence chunks below this many tokens are folded into their predecessor.
	pub min_chunk_tokens: usize,
}
impl Default for ChunkingConfig {
	fn default() -> Self {
		Self { budget: DEFAULT_BUDGET, min_chunk_tokens: DEFAULT_MIN_CHUNK_TOKENS }
	}
}

/// Number of characters in `text`, the unit behind `Chunk::content_length`.
pub fn char_len(text: &str) -> usize {
	text.chars().count()
}

fn build_chunk(
	title: &str,
	content: &str,
	links: &str,
	team_members: Vec<TeamMember>,
	topics: Vec<TopicRow>,
	counter: &impl TokenCounter,
) -> Chunk {
	let content = content.trim();

	Chunk {
		title: title.trim().to_string(),
		content: content.to_string(),
		links: links.trim().to_string(),
		team_members,
		topics,
		content_length: char_len(content),
		content_tokens: counter.count(content),
		embedding: Vec::new(),
	}
}
