use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A row scraped from a topics table.
///
/// Columns follow whatever headings the table carried, so they are kept as an open mapping.
/// `heading` and `tokens` are reserved keys layered on top of it. `tokens` is string encoded:
/// usually a single integer, but the interview-preparation row stores two space-separated
/// counts (heading tokens, list tokens).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRow {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub heading: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tokens: Option<String>,
	#[serde(flatten)]
	pub columns: BTreeMap<String, String>,
}
impl TopicRow {
	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
		self.columns.insert(column.into(), value.into());
	}

	pub fn get(&self, column: &str) -> Option<&str> {
		self.columns.get(column).map(String::as_str)
	}

	/// Numeric value of the `tokens` field.
	///
	/// Every whitespace-separated part must parse as an integer; the parts are summed so the
	/// two-count form yields the row's real total. Missing or non-numeric values count as zero.
	pub fn token_count(&self) -> usize {
		let Some(raw) = self.tokens.as_deref() else {
			return 0;
		};

		raw.split_whitespace()
			.map(str::parse::<usize>)
			.sum::<Result<usize, _>>()
			.unwrap_or(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(tokens: Option<&str>) -> TopicRow {
		TopicRow { tokens: tokens.map(str::to_string), ..Default::default() }
	}

	#[test]
	fn token_count_reads_single_and_dual_forms() {
		assert_eq!(row(Some("12")).token_count(), 12);
		assert_eq!(row(Some("3 45")).token_count(), 48);
		assert_eq!(row(Some(" 7 ")).token_count(), 7);
	}

	#[test]
	fn token_count_falls_back_to_zero() {
		assert_eq!(row(None).token_count(), 0);
		assert_eq!(row(Some("")).token_count(), 0);
		assert_eq!(row(Some("many")).token_count(), 0);
		assert_eq!(row(Some("4 x")).token_count(), 0);
		assert_eq!(row(Some("-3")).token_count(), 0);
	}
}
