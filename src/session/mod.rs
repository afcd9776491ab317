// Session module: transcript model and the interactive chat layer

pub mod chat;
pub mod controller;
pub mod preferences;

pub use controller::{ChatSession, QuickAction};
pub use preferences::{Preferences, Purpose, Tone};

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Who wrote a transcript entry
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Author {
	User,
	Bot,
}

/// One entry of the linear chat transcript
///
/// Entries are append-only: nothing in the session ever edits or removes
/// one once it has been pushed. Bot entries optionally carry the name
/// suggestions that came back from the service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranscriptEntry {
	pub author: Author,
	pub text: String,

	/// Set on bot entries that report a failed generation attempt
	#[serde(default)]
	pub is_error: bool,

	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub meaningful_names: Vec<String>,

	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub creative_names: Vec<String>,

	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub concepts: Vec<String>,

	/// Unix timestamp (seconds) of when the entry was appended
	pub timestamp: u64,
}

fn current_timestamp() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.unwrap_or_default()
		.as_secs()
}

impl TranscriptEntry {
	pub fn user(text: &str) -> Self {
		Self {
			author: Author::User,
			text: text.to_string(),
			is_error: false,
			meaningful_names: Vec::new(),
			creative_names: Vec::new(),
			concepts: Vec::new(),
			timestamp: current_timestamp(),
		}
	}

	pub fn bot(text: &str) -> Self {
		Self {
			author: Author::Bot,
			text: text.to_string(),
			is_error: false,
			meaningful_names: Vec::new(),
			creative_names: Vec::new(),
			concepts: Vec::new(),
			timestamp: current_timestamp(),
		}
	}

	pub fn bot_error(text: &str) -> Self {
		Self {
			is_error: true,
			..Self::bot(text)
		}
	}

	pub fn with_names(
		mut self,
		meaningful: Vec<String>,
		creative: Vec<String>,
		concepts: Vec<String>,
	) -> Self {
		self.meaningful_names = meaningful;
		self.creative_names = creative;
		self.concepts = concepts;
		self
	}

	pub fn has_names(&self) -> bool {
		!self.meaningful_names.is_empty() || !self.creative_names.is_empty()
	}

	/// All suggested names in display order: meaningful first, then creative
	pub fn suggested_names(&self) -> Vec<&str> {
		self.meaningful_names
			.iter()
			.chain(self.creative_names.iter())
			.map(String::as_str)
			.collect()
	}
}
