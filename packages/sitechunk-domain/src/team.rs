use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
	pub name: String,
	pub role: String,
	pub image_src: String,
	pub tokens: usize,
	pub socials: Socials,
}

/// Social profile links. Only these networks are ever read downstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub linkedin: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub youtube: Option<String>,
}
impl Socials {
	/// Stores `url` under `network` when it names a known network. Returns false otherwise.
	pub fn set(&mut self, network: &str, url: String) -> bool {
		let slot = match network {
			"linkedin" => &mut self.linkedin,
			"twitter" => &mut self.twitter,
			"youtube" => &mut self.youtube,
			_ => return false,
		};

		*slot = Some(url);

		true
	}

	pub fn urls(&self) -> impl Iterator<Item = &str> {
		[&self.linkedin, &self.twitter, &self.youtube].into_iter().flatten().map(String::as_str)
	}

	pub fn joined(&self) -> String {
		self.urls().collect::<Vec<_>>().join(" ")
	}
}
