pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Source(#[from] sitechunk_source::Error),
	#[error(transparent)]
	Storage(#[from] sitechunk_storage::Error),
	#[error("Page source failed for {url}: {message}")]
	PageSource { url: String, message: String },
}
