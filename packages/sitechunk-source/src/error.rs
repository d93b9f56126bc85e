pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to fetch {url}.")]
	Fetch { url: String, source: reqwest::Error },
	#[error(transparent)]
	Client(#[from] reqwest::Error),
	#[error(transparent)]
	Regex(#[from] regex::Error),
	#[error("Invalid selector {selector:?}: {message}")]
	Selector { selector: &'static str, message: String },
}
