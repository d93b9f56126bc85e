use serde::{Deserialize, Serialize};

use crate::{TeamMember, TopicRow};

/// A token-bounded slice of page text plus the metadata of the page(s) it came from.
///
/// A chunk owns its team members and topic rows; the same metadata is copied into every chunk
/// that carries it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
	pub title: String,
	pub content: String,
	pub links: String,
	pub team_members: Vec<TeamMember>,
	pub topics: Vec<TopicRow>,
	/// Character count of `content`.
	pub content_length: usize,
	/// Token count of `content`.
	pub content_tokens: usize,
	/// Reserved for the embedding stage. Always empty when produced by a chunker.
	pub embedding: Vec<f32>,
}
