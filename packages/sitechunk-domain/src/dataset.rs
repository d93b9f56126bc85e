use serde::{Deserialize, Serialize};

use crate::{Chunk, PageRecord, TeamMember};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
	pub pages: Vec<PageRecord>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub team_members: Option<Vec<TeamMember>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub chunks: Option<Vec<Chunk>>,
	/// Grand total over pages, standalone team members and topic rows.
	pub tokens: usize,
}
impl Dataset {
	/// A dataset that only carries the chunks of a single page.
	pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
		Self { pages: Vec::new(), team_members: None, chunks: Some(chunks), tokens: 0 }
	}

	pub fn chunk_count(&self) -> usize {
		self.chunks.as_ref().map(Vec::len).unwrap_or(0)
	}
}

/// What a pipeline run hands to persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineOutput {
	/// One dataset holding every page and the cross-page chunks.
	Accumulated(Dataset),
	/// One chunks-only dataset per page.
	PerPage(Vec<Dataset>),
}
impl PipelineOutput {
	pub fn chunk_count(&self) -> usize {
		match self {
			Self::Accumulated(dataset) => dataset.chunk_count(),
			Self::PerPage(datasets) => datasets.iter().map(Dataset::chunk_count).sum(),
		}
	}
}
