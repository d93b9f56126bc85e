mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Chunking, Config, Output, Service, Source, Strategy};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if !is_http_url(&cfg.source.base_url) {
		return Err(Error::Validation {
			message: "source.base_url must be an http or https URL.".to_string(),
		});
	}
	if cfg.source.page_paths.is_empty() {
		return Err(Error::Validation {
			message: "source.page_paths must be non-empty.".to_string(),
		});
	}

	for (label, path) in cfg
		.source
		.page_paths
		.iter()
		.map(|path| ("source.page_paths", path))
		.chain([("source.team_path", &cfg.source.team_path)])
		.chain([("source.topics_path", &cfg.source.topics_path)])
	{
		if !path.starts_with('/') {
			return Err(Error::Validation {
				message: format!("{label} must start with '/', got {path:?}."),
			});
		}
	}

	if cfg.source.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "source.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.chunking.budget == 0 {
		return Err(Error::Validation {
			message: "chunking.budget must be greater than zero.".to_string(),
		});
	}
	if cfg.chunking.min_chunk_tokens >= cfg.chunking.budget {
		return Err(Error::Validation {
			message: "chunking.min_chunk_tokens must be less than chunking.budget.".to_string(),
		});
	}
	if cfg.output.path.as_os_str().is_empty() {
		return Err(Error::Validation { message: "output.path must be non-empty.".to_string() });
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.source.base_url = cfg.source.base_url.trim().trim_end_matches('/').to_string();
	cfg.source.team_page_title = cfg.source.team_page_title.trim().to_lowercase();

	if cfg.chunking.tokenizer_repo.as_deref().map(|repo| repo.trim().is_empty()).unwrap_or(false) {
		cfg.chunking.tokenizer_repo = None;
	}
	if cfg.chunking.tokenizer_file.as_ref().map(|path| path.as_os_str().is_empty()).unwrap_or(false)
	{
		cfg.chunking.tokenizer_file = None;
	}
}

fn is_http_url(url: &str) -> bool {
	let Some(rest) = url.strip_prefix("http://").or_else(|| url.strip_prefix("https://")) else {
		return false;
	};
	let host = rest.split(['/', '?', '#']).next().unwrap_or_default();

	!host.is_empty() && !host.contains(char::is_whitespace)
}
