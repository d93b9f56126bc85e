use sitechunk_domain::{Chunk, PageRecord, TeamMember, TopicRow};

use crate::{ChunkingConfig, TokenCounter, build_chunk, char_len};

/// Packs consecutive pages into chunks, flushing before a page that would overflow the budget.
///
/// The overflow test compares the character length of what has accumulated so far against the
/// token count of the incoming field. The mixed units are the established threshold and are
/// kept as is.
///
/// `team_members` is the standalone list scraped for the whole site. It is appended on every
/// page, so a chunk spanning several pages carries one copy of the list per page.
pub fn accumulate(
	pages: &[PageRecord],
	team_members: Option<&[TeamMember]>,
	cfg: &ChunkingConfig,
	counter: &impl TokenCounter,
) -> Vec<Chunk> {
	let mut chunks = Vec::new();
	let mut acc = Accumulator::default();

	for page in pages {
		if !acc.is_empty() && acc.overflows_with(page, cfg.budget, counter) {
			chunks.push(acc.flush(chunks.len(), counter));
		}

		acc.push(page, team_members);
	}

	if !acc.is_empty() {
		chunks.push(acc.flush(chunks.len(), counter));
	}

	chunks
}

#[derive(Debug, Default)]
struct Accumulator {
	title: String,
	content: String,
	links: String,
	team_members: Vec<TeamMember>,
	topics: Vec<TopicRow>,
	page_chars: usize,
	page_tokens: usize,
}
impl Accumulator {
	fn is_empty(&self) -> bool {
		self.title.is_empty()
			&& self.content.is_empty()
			&& self.links.is_empty()
			&& self.team_members.is_empty()
			&& self.topics.is_empty()
	}

	fn overflows_with(&self, page: &PageRecord, budget: usize, counter: &impl TokenCounter) -> bool {
		char_len(&self.title) + counter.count(&page.title) > budget
			|| char_len(&self.content) + counter.count(&page.content) > budget
			|| (!page.links.is_empty()
				&& char_len(&self.links) + counter.count(&page.links) > budget)
	}

	fn push(&mut self, page: &PageRecord, team_members: Option<&[TeamMember]>) {
		for (buf, text) in [
			(&mut self.title, &page.title),
			(&mut self.content, &page.content),
			(&mut self.links, &page.links),
		] {
			buf.push(' ');
			buf.push_str(text);
		}

		self.page_chars += char_len(&page.content);
		self.page_tokens += page.tokens;

		if let Some(members) = team_members {
			self.team_members.extend_from_slice(members);
		}
		if let Some(members) = &page.team_members {
			self.team_members.extend_from_slice(members);
		}
		if let Some(topics) = &page.topics {
			self.topics.extend_from_slice(topics);
		}
	}

	fn flush(&mut self, index: usize, counter: &impl TokenCounter) -> Chunk {
		let acc = std::mem::take(self);

		tracing::debug!(
			chunk_index = index,
			page_chars = acc.page_chars,
			page_tokens = acc.page_tokens,
			team_members = acc.team_members.len(),
			topics = acc.topics.len(),
			"Flushed accumulated chunk."
		);

		build_chunk(&acc.title, &acc.content, &acc.links, acc.team_members, acc.topics, counter)
	}
}
