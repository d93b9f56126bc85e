use std::path::PathBuf;

use clap::Parser;

use sitechunk::{Args, StrategyArg};
use sitechunk_config::Strategy;

#[test]
fn parses_config_flag() {
	let args =
		Args::try_parse_from(["sitechunk", "-c", "sitechunk.toml"]).expect("Failed to parse.");

	assert_eq!(args.config, PathBuf::from("sitechunk.toml"));

	let args =
		Args::try_parse_from(["sitechunk", "--config", "other.toml"]).expect("Failed to parse.");

	assert_eq!(args.config, PathBuf::from("other.toml"));
}

#[test]
fn parses_strategy_override() {
	let args = Args::try_parse_from(["sitechunk", "-c", "sitechunk.toml"])
		.expect("Failed to parse.");

	assert_eq!(args.strategy, None);

	let args =
		Args::try_parse_from(["sitechunk", "-c", "sitechunk.toml", "--strategy", "sentence"])
			.expect("Failed to parse.");

	assert_eq!(args.strategy, Some(StrategyArg::Sentence));
	assert_eq!(Strategy::from(StrategyArg::Sentence), Strategy::Sentence);
	assert_eq!(Strategy::from(StrategyArg::Accumulate), Strategy::Accumulate);
}

#[test]
fn rejects_unknown_strategy() {
	let args = Args::try_parse_from(["sitechunk", "-c", "sitechunk.toml", "--strategy", "words"]);

	assert!(args.is_err());
}

#[test]
fn config_flag_is_required() {
	assert!(Args::try_parse_from(["sitechunk"]).is_err());
}

#[tokio::test]
async fn missing_config_fails_the_run() {
	let config = std::env::temp_dir().join("sitechunk_missing_config_does_not_exist.toml");
	let err = sitechunk::run(Args { config, strategy: None }).await.expect_err("Expected config error.");

	assert!(err.to_string().contains("Failed to read config file"), "Unexpected error: {err}");
}
