use sitechunk_domain::{Chunk, PageRecord};

use crate::{ChunkingConfig, TokenCounter, build_chunk, char_len};

const SENTENCE_SEPARATOR: &str = ". ";

/// Chunks a single page on sentence boundaries.
///
/// A page whose title and content fit the budget becomes one chunk holding the trimmed content.
/// Larger pages are split into sentence-aligned pieces, with the title as the leading
/// fragment, and undersized pieces are then folded backward by [`merge_undersized`].
pub fn split_page(page: &PageRecord, cfg: &ChunkingConfig, counter: &impl TokenCounter) -> Vec<Chunk> {
	let page_tokens = counter.count(&page.title) + counter.count(&page.content);
	let texts = if page_tokens <= cfg.budget {
		vec![page.content.trim().to_string()]
	} else {
		sentence_texts(&page.title, &page.content, cfg.budget, counter)
	};
	let team_members = page.team_members.clone().unwrap_or_default();
	let topics = page.topics.clone().unwrap_or_default();
	let chunks = texts
		.iter()
		.map(|text| {
			build_chunk(&page.title, text, &page.links, team_members.clone(), topics.clone(), counter)
		})
		.collect::<Vec<_>>();
	let split = chunks.len();
	let chunks = merge_undersized(chunks, cfg.min_chunk_tokens, counter);

	tracing::debug!(url = %page.url, page_tokens, split, kept = chunks.len(), "Chunked page.");

	chunks
}

/// Folds every chunk under `min_tokens` into the chunk before it.
///
/// The result is rebuilt front to back, so a run of small chunks collapses into one
/// predecessor. Only the first chunk may stay below `min_tokens`, which makes a second pass
/// over the output a no-op.
pub fn merge_undersized(
	chunks: Vec<Chunk>,
	min_tokens: usize,
	counter: &impl TokenCounter,
) -> Vec<Chunk> {
	let mut merged: Vec<Chunk> = Vec::with_capacity(chunks.len());

	for chunk in chunks {
		match merged.last_mut() {
			Some(prev) if chunk.content_tokens < min_tokens => {
				if prev.content.is_empty() {
					prev.content = chunk.content;
				} else if !chunk.content.is_empty() {
					prev.content.push(' ');
					prev.content.push_str(&chunk.content);
				}

				prev.content_length = char_len(&prev.content);
				prev.content_tokens = counter.count(&prev.content);
			},
			_ => merged.push(chunk),
		}
	}

	merged
}

fn sentence_texts(
	title: &str,
	content: &str,
	budget: usize,
	counter: &impl TokenCounter,
) -> Vec<String> {
	let fragments = std::iter::once(title)
		.chain(content.split(SENTENCE_SEPARATOR))
		.filter(|fragment| !fragment.trim().is_empty());
	let mut texts = Vec::new();
	let mut current = String::new();

	for fragment in fragments {
		if counter.count(&current) + counter.count(fragment) > budget && !current.trim().is_empty()
		{
			texts.push(current.trim().to_string());
			current.clear();
		}

		current.push_str(fragment);

		if fragment.ends_with(|c: char| c.is_ascii_alphanumeric()) {
			current.push_str(SENTENCE_SEPARATOR);
		} else {
			current.push(' ');
		}
	}

	let rest = current.trim();

	if !rest.is_empty() || texts.is_empty() {
		texts.push(rest.to_string());
	}

	texts
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Words;
	impl TokenCounter for Words {
		fn count(&self, text: &str) -> usize {
			text.split_whitespace().count()
		}
	}

	#[test]
	fn restores_periods_only_after_alphanumeric_endings() {
		let texts = sentence_texts("Guide", "One two. Three four? Five six.", 100, &Words);

		assert_eq!(texts, vec!["Guide. One two. Three four? Five six.".to_string()]);
	}

	#[test]
	fn closes_the_buffer_before_a_fragment_that_would_overflow() {
		let texts = sentence_texts("T", "a b c. d e f. g h i", 5, &Words);

		assert_eq!(texts, vec!["T. a b c.".to_string(), "d e f.".to_string(), "g h i.".to_string()]);
	}

	#[test]
	fn oversized_first_fragment_does_not_emit_an_empty_piece() {
		let texts = sentence_texts("", "a b c d e f g", 3, &Words);

		assert_eq!(texts, vec!["a b c d e f g.".to_string()]);
	}

	#[test]
	fn empty_input_yields_one_empty_piece() {
		assert_eq!(sentence_texts("", "", 3, &Words), vec![String::new()]);
	}
}
