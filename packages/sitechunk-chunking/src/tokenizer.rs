use std::path::Path;

pub use tokenizers::Tokenizer;

pub type TokenizerError = tokenizers::Error;

/// GPT-2 byte-level BPE, the vocabulary the scraped corpus was measured with.
pub const DEFAULT_TOKENIZER_REPO: &str = "openai-community/gpt2";

/// Measures text length in tokens.
///
/// Implementations must be deterministic and return 0 for the empty string.
pub trait TokenCounter {
	fn count(&self, text: &str) -> usize;
}
impl<T> TokenCounter for &T
where
	T: TokenCounter + ?Sized,
{
	fn count(&self, text: &str) -> usize {
		(**self).count(text)
	}
}
impl TokenCounter for Tokenizer {
	fn count(&self, text: &str) -> usize {
		if text.is_empty() {
			return 0;
		}

		match self.encode(text, false) {
			Ok(encoding) => encoding.len(),
			Err(err) => {
				tracing::error!(error = %err, "Tokenizer failed to encode text.");

				0
			},
		}
	}
}

/// Loads a local `tokenizer.json` when `file` is set, otherwise fetches `repo` from the hub.
pub fn load_tokenizer(repo: &str, file: Option<&Path>) -> Result<Tokenizer, TokenizerError> {
	match file {
		Some(path) => Tokenizer::from_file(path),
		None => Tokenizer::from_pretrained(repo, None),
	}
}
