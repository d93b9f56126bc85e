use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use sitechunk_chunking::TokenCounter;
use sitechunk_domain::{PageRecord, Socials, TeamMember, TopicRow};

/// Counts whitespace-separated words. Deterministic, and zero for empty text.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordCounter;
impl TokenCounter for WordCounter {
	fn count(&self, text: &str) -> usize {
		text.split_whitespace().count()
	}
}

/// `count` words of the form `w0 w1 ...`, each `prefix` followed by its index.
pub fn words(prefix: &str, count: usize) -> String {
	(0..count).map(|idx| format!("{prefix}{idx}")).collect::<Vec<_>>().join(" ")
}

/// `sentences` sentences of `words_per` words each, joined the way page content is.
pub fn sentences(sentences: usize, words_per: usize) -> String {
	(0..sentences)
		.map(|idx| format!("{}.", words(&format!("s{idx}w"), words_per)))
		.collect::<Vec<_>>()
		.join(" ")
}

pub fn page(title: &str, content: &str, links: &str) -> PageRecord {
	let counter = WordCounter;

	PageRecord {
		url: format!("https://site.test/{}/", title.to_lowercase().replace(' ', "-")),
		title: title.to_string(),
		content: content.to_string(),
		links: links.to_string(),
		tokens: counter.count(title) + counter.count(content) + counter.count(links),
		team_members: None,
		topics: None,
	}
}

pub fn member(name: &str, role: &str) -> TeamMember {
	let mut socials = Socials::default();

	socials.set("linkedin", format!("https://linkedin.com/in/{}", name.to_lowercase()));

	let counter = WordCounter;
	let tokens = counter.count(name) + counter.count(role) + counter.count(&socials.joined());

	TeamMember {
		name: name.to_string(),
		role: role.to_string(),
		image_src: String::new(),
		tokens,
		socials,
	}
}

pub fn topic(columns: &[(&str, &str)], tokens: &str) -> TopicRow {
	let mut row = TopicRow { tokens: Some(tokens.to_string()), ..Default::default() };

	for (column, value) in columns {
		row.insert(*column, *value);
	}

	row
}

/// A fresh path under the system temp dir. Nothing is created.
pub fn temp_path(prefix: &str, extension: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_nanos())
		.unwrap_or_default();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("{prefix}_{nanos}_{pid}_{ordinal}.{extension}"));

	path
}

/// Writes `payload` to a fresh temp file and returns its path.
pub fn write_temp(prefix: &str, extension: &str, payload: &str) -> PathBuf {
	let path = temp_path(prefix, extension);

	fs::write(&path, payload).unwrap_or_else(|err| panic!("Failed to write {path:?}: {err}."));

	path
}
