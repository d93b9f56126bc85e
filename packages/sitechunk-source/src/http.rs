use std::time::Duration;

use reqwest::Client;

use sitechunk_chunking::TokenCounter;
use sitechunk_domain::{PageRecord, TeamMember, TopicRow};

use crate::{Error, Parser, Result};

/// Scrapes the configured site over HTTP.
pub struct HttpSource<C> {
	client: Client,
	base_url: String,
	page_paths: Vec<String>,
	team_path: String,
	topics_path: String,
	parser: Parser,
	counter: C,
}
impl<C> HttpSource<C>
where
	C: TokenCounter,
{
	pub fn new(cfg: &sitechunk_config::Source, counter: C) -> Result<Self> {
		let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;

		Ok(Self {
			client,
			base_url: cfg.base_url.trim_end_matches('/').to_string(),
			page_paths: cfg.page_paths.clone(),
			team_path: cfg.team_path.clone(),
			topics_path: cfg.topics_path.clone(),
			parser: Parser::new()?,
			counter,
		})
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	pub async fn fetch_html(&self, url: &str) -> Result<String> {
		self.get_text(url).await.map_err(|source| {
			tracing::error!(url, error = %source, "Failed to fetch HTML.");

			Error::Fetch { url: url.to_string(), source }
		})
	}

	pub async fn page(&self, path: &str) -> Result<PageRecord> {
		let url = self.url(path);
		let html = self.fetch_html(&url).await?;
		let page = self.parser.page(&html, &url, &self.counter);

		tracing::info!(url = %url, tokens = page.tokens, "Scraped page.");

		Ok(page)
	}

	/// Fetches every configured page, one after another, in configuration order.
	pub async fn pages(&self) -> Result<Vec<PageRecord>> {
		let mut pages = Vec::with_capacity(self.page_paths.len());

		for path in &self.page_paths {
			pages.push(self.page(path).await?);
		}

		Ok(pages)
	}

	pub async fn team_members(&self) -> Result<Vec<TeamMember>> {
		let url = self.url(&self.team_path);
		let html = self.fetch_html(&url).await?;
		let members = self.parser.team(&html, &self.base_url, &self.counter);

		tracing::info!(url = %url, count = members.len(), "Scraped team members.");

		Ok(members)
	}

	pub async fn topics(&self) -> Result<Vec<TopicRow>> {
		let url = self.url(&self.topics_path);
		let html = self.fetch_html(&url).await?;
		let topics = self.parser.topics(&html, &self.counter);

		tracing::info!(url = %url, count = topics.len(), "Scraped topics.");

		Ok(topics)
	}

	async fn get_text(&self, url: &str) -> reqwest::Result<String> {
		self.client.get(url).send().await?.error_for_status()?.text().await
	}
}
