mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

use std::{fs, path::Path};

use serde::{Serialize, de::DeserializeOwned};

/// Writes `value` as two-space indented JSON, creating missing parent directories.
pub fn write_json<T>(path: &Path, value: &T) -> Result<()>
where
	T: Serialize + ?Sized,
{
	let payload = serde_json::to_string_pretty(value)?;

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.map_err(|err| Error::Write { path: path.to_path_buf(), source: err })?;
	}

	fs::write(path, payload).map_err(|err| Error::Write { path: path.to_path_buf(), source: err })?;

	tracing::info!(path = %path.display(), "Data saved to file.");

	Ok(())
}

pub fn read_json<T>(path: &Path) -> Result<T>
where
	T: DeserializeOwned,
{
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

	Ok(serde_json::from_str(&raw)?)
}
