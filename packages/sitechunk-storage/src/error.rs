#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to write {path:?}.")]
	Write { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to read {path:?}.")]
	Read { path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
}
