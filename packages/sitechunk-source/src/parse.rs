use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use sitechunk_chunking::TokenCounter;
use sitechunk_domain::{PageRecord, Socials, TeamMember, TopicRow};

use crate::{Error, Result};

const INTERVIEW_CONCEPT_COLUMN: &str = "concept";

/// Turns scraped HTML into page, team and topic records.
///
/// Selectors and patterns are compiled once, so one parser serves a whole run.
pub struct Parser {
	title: Selector,
	content: Selector,
	links: Selector,
	table: Selector,
	head_cells: Selector,
	body_rows: Selector,
	cells: Selector,
	image_cells: Selector,
	role_cells: Selector,
	social_cells: Selector,
	image: Selector,
	anchor: Selector,
	interview_heading: Selector,
	list_item: Selector,
	whitespace: Regex,
	sentence_gap: Regex,
}
impl Parser {
	pub fn new() -> Result<Self> {
		Ok(Self {
			title: selector("h1")?,
			content: selector("h2, h3, p")?,
			links: selector(r#"a[rel="noopener noreferrer"]"#)?,
			table: selector("table")?,
			head_cells: selector("thead tr th")?,
			body_rows: selector("tbody tr")?,
			cells: selector("td")?,
			image_cells: selector("table tbody tr:nth-child(1) td")?,
			role_cells: selector("table tbody tr:nth-child(2) td")?,
			social_cells: selector("table tbody tr:nth-child(3) td")?,
			image: selector("img")?,
			anchor: selector("a")?,
			interview_heading: selector("h3#interview-preparation")?,
			list_item: selector("li")?,
			whitespace: Regex::new(r"\s+")?,
			sentence_gap: Regex::new(r"\.([a-zA-Z])")?,
		})
	}

	/// Title from every `h1`, content from `h2, h3, p`, links from external anchors.
	pub fn page(&self, html: &str, url: &str, counter: &impl TokenCounter) -> PageRecord {
		let document = Html::parse_document(html);
		let title = document
			.select(&self.title)
			.map(|el| el.text().collect::<String>())
			.collect::<String>()
			.trim()
			.to_string();
		let blocks = document.select(&self.content).map(element_text).collect::<Vec<_>>();
		let content = self.normalize_content(&blocks.join(" "));
		let links = document
			.select(&self.links)
			.filter_map(|el| el.value().attr("href"))
			.collect::<Vec<_>>()
			.join(" ");
		let tokens = counter.count(&title) + counter.count(&content) + counter.count(&links);

		PageRecord {
			url: url.to_string(),
			title,
			content,
			links,
			tokens,
			team_members: None,
			topics: None,
		}
	}

	/// Reads the team table: names in the header, then image, role and social rows.
	///
	/// Cells missing from a short table come back as empty strings.
	pub fn team(&self, html: &str, base_url: &str, counter: &impl TokenCounter) -> Vec<TeamMember> {
		let document = Html::parse_document(html);
		let names = document.select(&self.head_cells).map(element_text).collect::<Vec<_>>();
		let images = document
			.select(&self.image_cells)
			.map(|cell| {
				cell.select(&self.image)
					.find_map(|img| img.value().attr("src"))
					.unwrap_or_default()
					.to_string()
			})
			.collect::<Vec<_>>();
		let roles = document.select(&self.role_cells).map(element_text).collect::<Vec<_>>();
		let socials = document
			.select(&self.social_cells)
			.map(|cell| self.socials(cell, base_url))
			.collect::<Vec<_>>();

		if roles.len() < names.len() || socials.len() < names.len() {
			tracing::warn!(
				names = names.len(),
				roles = roles.len(),
				socials = socials.len(),
				"Team table is shorter than its header."
			);
		}

		names
			.into_iter()
			.enumerate()
			.map(|(idx, name)| {
				let role = roles.get(idx).cloned().unwrap_or_default();
				let socials = socials.get(idx).cloned().unwrap_or_default();
				let tokens =
					counter.count(&name) + counter.count(&role) + counter.count(&socials.joined());

				TeamMember {
					name,
					role,
					image_src: images.get(idx).cloned().unwrap_or_default(),
					tokens,
					socials,
				}
			})
			.collect()
	}

	/// One row per `tbody tr` of every table, then the interview-preparation row if present.
	pub fn topics(&self, html: &str, counter: &impl TokenCounter) -> Vec<TopicRow> {
		let document = Html::parse_document(html);
		let mut topics = Vec::new();

		for table in document.select(&self.table) {
			let headings = table.select(&self.head_cells).map(element_text).collect::<Vec<_>>();

			for row in table.select(&self.body_rows) {
				topics.push(self.topic_row(row, &headings, counter));
			}
		}

		if let Some(topic) = self.interview_row(&document, counter) {
			topics.push(topic);
		}

		topics
	}

	fn normalize_content(&self, raw: &str) -> String {
		let collapsed = self.whitespace.replace_all(raw, " ");

		self.sentence_gap.replace_all(&collapsed, ". ${1}").into_owned()
	}

	fn socials(&self, cell: ElementRef<'_>, base_url: &str) -> Socials {
		let mut socials = Socials::default();

		for anchor in cell.select(&self.anchor) {
			let network = element_text(anchor).to_lowercase();
			let Some(href) = anchor.value().attr("href").filter(|href| !href.is_empty()) else {
				continue;
			};

			if network.is_empty() {
				continue;
			}

			let url =
				if href.starts_with('/') { format!("{base_url}{href}") } else { href.to_string() };

			if !socials.set(&network, url) {
				tracing::debug!(network = %network, "Skipping unknown social network.");
			}
		}

		socials
	}

	fn topic_row(
		&self,
		row: ElementRef<'_>,
		headings: &[String],
		counter: &impl TokenCounter,
	) -> TopicRow {
		let mut topic = TopicRow::default();
		let mut tokens = 0;
		let mut cells = 0;

		for (idx, cell) in row.select(&self.cells).enumerate() {
			let heading =
				headings.get(idx).cloned().unwrap_or_else(|| format!("Column {}", idx + 1));
			let value = element_text(cell);

			tokens += counter.count(&heading) + counter.count(&value);
			cells += 1;

			match heading.as_str() {
				"heading" => topic.heading = Some(value),
				"tokens" => {
					tracing::warn!("Dropping topic column named after the reserved tokens key.")
				},
				_ => topic.insert(heading, value),
			}
		}

		// A row without cells stays empty and carries no token count.
		if cells > 0 {
			topic.tokens = Some(tokens.to_string());
		}

		topic
	}

	fn interview_row(&self, document: &Html, counter: &impl TokenCounter) -> Option<TopicRow> {
		let heading = document.select(&self.interview_heading).next()?;
		let heading_text = element_text(heading);
		let list = heading
			.next_siblings()
			.find_map(ElementRef::wrap)
			.filter(|sibling| sibling.value().name() == "ul");
		let list_text = list.map(element_text).unwrap_or_default();
		let mut topic = TopicRow {
			tokens: Some(format!("{} {}", counter.count(&heading_text), counter.count(&list_text))),
			..Default::default()
		};

		topic.insert(INTERVIEW_CONCEPT_COLUMN, heading_text);

		if let Some(list) = list {
			for (idx, item) in list.select(&self.list_item).enumerate() {
				topic.insert(format!("Topic {}", idx + 1), element_text(item));
			}
		}

		Some(topic)
	}
}

fn selector(css: &'static str) -> Result<Selector> {
	Selector::parse(css).map_err(|err| Error::Selector { selector: css, message: err.to_string() })
}

fn element_text(element: ElementRef<'_>) -> String {
	element.text().collect::<String>().trim().to_string()
}
