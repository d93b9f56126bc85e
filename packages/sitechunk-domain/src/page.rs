use serde::{Deserialize, Serialize};

use crate::{TeamMember, TopicRow};

/// One scraped page. Immutable once the page source hands it over.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
	pub url: String,
	pub title: String,
	pub content: String,
	/// Outbound links joined by a single space.
	#[serde(default)]
	pub links: String,
	/// Token count of title, content and links, taken when the record was built.
	pub tokens: usize,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub team_members: Option<Vec<TeamMember>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub topics: Option<Vec<TopicRow>>,
}
