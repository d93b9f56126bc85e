pub mod assemble;
pub mod pipeline;

mod error;

pub use assemble::total_tokens;
pub use error::{Error, Result};
pub use pipeline::{Enrichment, persist, run, run_accumulate, run_sentence};

use std::{future::Future, pin::Pin};

use sitechunk_chunking::TokenCounter;
use sitechunk_domain::{PageRecord, TeamMember, TopicRow};
use sitechunk_source::HttpSource;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Where pipelines get their records from.
pub trait PageSource
where
	Self: Send + Sync,
{
	/// Every configured page, in order.
	fn pages(&self) -> BoxFuture<'_, Result<Vec<PageRecord>>>;

	fn page<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<PageRecord>>;

	fn team_members(&self) -> BoxFuture<'_, Result<Vec<TeamMember>>>;

	fn topics(&self) -> BoxFuture<'_, Result<Vec<TopicRow>>>;
}

impl<C> PageSource for HttpSource<C>
where
	C: TokenCounter + Send + Sync,
{
	fn pages(&self) -> BoxFuture<'_, Result<Vec<PageRecord>>> {
		Box::pin(async move { Ok(HttpSource::pages(self).await?) })
	}

	fn page<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<PageRecord>> {
		Box::pin(async move { Ok(HttpSource::page(self, path).await?) })
	}

	fn team_members(&self) -> BoxFuture<'_, Result<Vec<TeamMember>>> {
		Box::pin(async move { Ok(HttpSource::team_members(self).await?) })
	}

	fn topics(&self) -> BoxFuture<'_, Result<Vec<TopicRow>>> {
		Box::pin(async move { Ok(HttpSource::topics(self).await?) })
	}
}
