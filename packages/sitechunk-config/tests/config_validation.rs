use std::fs;

use toml::Value;

use sitechunk_config::{Config, Strategy};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let table = root
		.as_table_mut()
		.and_then(|root| root.get_mut(section))
		.and_then(Value::as_table_mut)
		.unwrap_or_else(|| panic!("Template config must include [{section}]."));

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render template config.")
}

fn load_payload(payload: &str) -> sitechunk_config::Result<Config> {
	let path = sitechunk_testkit::write_temp("sitechunk_config_test", "toml", payload);
	let result = sitechunk_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn expect_validation(payload: &str, needle: &str) {
	let err = load_payload(payload).expect_err("Expected validation error.");
	let message = err.to_string();

	assert!(message.contains(needle), "Unexpected error message: {message}");
}

#[test]
fn loads_and_normalizes_sample_config() {
	let cfg = load_payload(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to load sample config.");

	assert_eq!(cfg.source.base_url, "https://prealxse.com");
	assert_eq!(cfg.source.team_page_title, "community");
	assert_eq!(cfg.source.page_paths.len(), 4);
	assert_eq!(cfg.chunking.strategy, Strategy::Accumulate);
	assert_eq!(cfg.chunking.budget, 200);
	assert_eq!(cfg.chunking.tokenizer_repo.as_deref(), Some("openai-community/gpt2"));
	assert!(cfg.chunking.tokenizer_file.is_none());
	assert_eq!(cfg.service.log_level, "info");
}

#[test]
fn parses_sentence_strategy() {
	let payload = sample_with("chunking", "strategy", Value::String("sentence".to_string()));
	let cfg = load_payload(&payload).expect("Failed to load config.");

	assert_eq!(cfg.chunking.strategy, Strategy::Sentence);
}

#[test]
fn rejects_unknown_strategy() {
	let payload = sample_with("chunking", "strategy", Value::String("paragraph".to_string()));
	let err = load_payload(&payload).expect_err("Expected parse error.");

	assert!(matches!(err, sitechunk_config::Error::ParseConfig { .. }), "Unexpected error: {err}");
}

#[test]
fn missing_file_is_a_read_error() {
	let path = sitechunk_testkit::temp_path("sitechunk_config_missing", "toml");
	let err = sitechunk_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, sitechunk_config::Error::ReadConfig { .. }));
}

#[test]
fn base_url_must_be_http() {
	let payload = sample_with("source", "base_url", Value::String("ftp://site".to_string()));

	expect_validation(&payload, "source.base_url must be an http or https URL.");
}

#[test]
fn base_url_must_name_a_host() {
	for base_url in ["https://", "http:///intro/", "https://?page=1"] {
		let payload = sample_with("source", "base_url", Value::String(base_url.to_string()));

		expect_validation(&payload, "source.base_url must be an http or https URL.");
	}
}

#[test]
fn page_paths_must_be_non_empty() {
	let payload = sample_with("source", "page_paths", Value::Array(Vec::new()));

	expect_validation(&payload, "source.page_paths must be non-empty.");
}

#[test]
fn paths_must_be_root_relative() {
	let payload = sample_with(
		"source",
		"page_paths",
		Value::Array(vec![Value::String("intro/".to_string())]),
	);

	expect_validation(&payload, "source.page_paths must start with '/'");

	let payload = sample_with("source", "topics_path", Value::String("topics".to_string()));

	expect_validation(&payload, "source.topics_path must start with '/'");
}

#[test]
fn timeout_must_be_positive() {
	let payload = sample_with("source", "timeout_ms", Value::Integer(0));

	expect_validation(&payload, "source.timeout_ms must be greater than zero.");
}

#[test]
fn budget_must_be_positive() {
	let payload = sample_with("chunking", "budget", Value::Integer(0));

	expect_validation(&payload, "chunking.budget must be greater than zero.");
}

#[test]
fn min_chunk_tokens_must_be_below_budget() {
	let payload = sample_with("chunking", "min_chunk_tokens", Value::Integer(200));

	expect_validation(&payload, "chunking.min_chunk_tokens must be less than chunking.budget.");
}

#[test]
fn output_path_must_be_non_empty() {
	let payload = sample_with("output", "path", Value::String(String::new()));

	expect_validation(&payload, "output.path must be non-empty.");
}

#[test]
fn log_level_defaults_to_info() {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");

	root.as_table_mut()
		.and_then(|root| root.get_mut("service"))
		.and_then(Value::as_table_mut)
		.expect("Template config must include [service].")
		.remove("log_level");

	let payload = toml::to_string(&root).expect("Failed to render template config.");
	let cfg = load_payload(&payload).expect("Failed to load config.");

	assert_eq!(cfg.service.log_level, "info");
}
