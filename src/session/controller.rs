// Copyright 2025 Braion Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Chat session controller: transcript state machine and generation flow

use crate::client::{GenerateRequest, NameGenClient};
use crate::session::preferences::{Preferences, Tone};
use crate::session::{Author, TranscriptEntry};
use crate::{log_debug, log_info};
use std::time::Duration;

/// Greeting seeded as the first bot entry of every new session
pub const GREETING: &str =
	"Hi! I'm Braion. Tell me about your team or project, and I'll create amazing names for you! 🚀";

/// Text of every successful suggestion entry
pub const SUCCESS_LABEL: &str = "Here are your team names! 🎯";

/// Minimum time the loading indicator stays visible, in milliseconds.
/// The request itself may finish sooner; the reply is held back until
/// this floor has passed.
pub const MIN_LOADING_MS: u64 = 1500;

/// One-tap generation shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
	Cool,
	Professional,
	Funny,
	Regenerate,
}

impl QuickAction {
	/// Fixed instruction sent in place of a typed message
	pub fn instruction(&self) -> &'static str {
		match self {
			QuickAction::Cool => "Generate cool and catchy names",
			QuickAction::Professional => "Generate professional and formal names",
			QuickAction::Funny => "Generate funny and creative names",
			QuickAction::Regenerate => "Generate more name options",
		}
	}

	// Regenerate keeps whatever tone is currently selected
	fn tone(&self) -> Option<Tone> {
		match self {
			QuickAction::Cool => Some(Tone::Cool),
			QuickAction::Professional => Some(Tone::Professional),
			QuickAction::Funny => Some(Tone::Funny),
			QuickAction::Regenerate => None,
		}
	}
}

/// Interactive chat session against the name generation backend
///
/// The transcript grows strictly by appending: a user entry per typed
/// message and exactly one bot entry per generation attempt, success or
/// failure. While a request is in flight every further trigger is
/// ignored instead of queued.
pub struct ChatSession {
	client: NameGenClient,
	preferences: Preferences,
	transcript: Vec<TranscriptEntry>,
	draft: String,
	in_flight: bool,
}

impl ChatSession {
	pub fn new(client: NameGenClient, mut preferences: Preferences) -> Self {
		preferences.normalize();
		Self {
			client,
			preferences,
			transcript: vec![TranscriptEntry::bot(GREETING)],
			draft: String::new(),
			in_flight: false,
		}
	}

	pub fn transcript(&self) -> &[TranscriptEntry] {
		&self.transcript
	}

	pub fn preferences(&self) -> &Preferences {
		&self.preferences
	}

	pub fn preferences_mut(&mut self) -> &mut Preferences {
		&mut self.preferences
	}

	pub fn is_busy(&self) -> bool {
		self.in_flight
	}

	pub fn endpoint(&self) -> &str {
		self.client.base_url()
	}

	pub fn client(&self) -> &NameGenClient {
		&self.client
	}

	/// Remember partially composed input; used as the request message
	/// when a quick action fires before the user presses enter.
	pub fn set_draft(&mut self, text: &str) {
		self.draft = text.to_string();
	}

	pub fn draft(&self) -> &str {
		&self.draft
	}

	/// Most recent bot entry that actually carries name suggestions
	pub fn last_suggestions(&self) -> Option<&TranscriptEntry> {
		self.transcript
			.iter()
			.rev()
			.find(|entry| entry.author == Author::Bot && entry.has_names())
	}

	/// Submit a typed message: append the user entry, then run one
	/// generation attempt. Empty input and input during an in-flight
	/// request are silently dropped.
	pub async fn submit_user_message(&mut self, text: &str) {
		let trimmed = text.trim();
		if trimmed.is_empty() || self.in_flight {
			return;
		}

		self.transcript.push(TranscriptEntry::user(trimmed));
		self.draft.clear();
		self.generate_names(Some(trimmed)).await;
	}

	/// Run a quick action: adjust the tone when the action implies one,
	/// then generate with the action's fixed instruction. No user entry
	/// is appended for quick actions.
	pub async fn quick_action(&mut self, action: QuickAction) {
		if let Some(tone) = action.tone() {
			self.preferences.tone = tone;
		}
		self.generate_names(Some(action.instruction())).await;
	}

	/// One generation attempt. Appends exactly one bot entry: the
	/// suggestions on success, a flagged connectivity entry on failure.
	pub async fn generate_names(&mut self, message: Option<&str>) {
		if self.in_flight {
			return;
		}
		self.in_flight = true;

		let effective = self.effective_message(message);
		let request = GenerateRequest::from_preferences(&self.preferences, &effective);

		log_debug!("Generation request payload: {:?}", request);

		// Run the call and the display floor together: the reply is not
		// appended until both are done, so the indicator never flashes.
		let min_display = tokio::time::sleep(Duration::from_millis(MIN_LOADING_MS));
		let (result, _) = tokio::join!(self.client.generate(&request), min_display);

		let entry = match result {
			Ok(response) => {
				log_info!(
					"Received {} meaningful and {} creative names",
					response.meaningful_names.len(),
					response.creative_names.len()
				);
				TranscriptEntry::bot(SUCCESS_LABEL).with_names(
					response.meaningful_names,
					response.creative_names,
					response.concepts,
				)
			}
			Err(err) => {
				log_debug!("Generation request failed: {:#}", err);
				TranscriptEntry::bot_error(&connection_error_message(self.client.base_url()))
			}
		};

		self.transcript.push(entry);
		self.in_flight = false;
	}

	// The message sent to the backend: explicit argument first, then the
	// saved draft, then a sentence synthesized from the preferences.
	fn effective_message(&self, message: Option<&str>) -> String {
		if let Some(text) = message {
			let trimmed = text.trim();
			if !trimmed.is_empty() {
				return trimmed.to_string();
			}
		}

		let draft = self.draft.trim();
		if !draft.is_empty() {
			return draft.to_string();
		}

		self.preferences.synthesized_request()
	}
}

/// Connectivity failure text shown in the transcript, naming the
/// endpoint the session expected to reach
pub fn connection_error_message(endpoint: &str) -> String {
	format!(
		"❌ Oops! Could not connect to the backend. Make sure the server is running on {}",
		endpoint
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Instant;

	// Nothing listens on this port, so every request fails fast with
	// connection refused.
	fn unreachable_session() -> ChatSession {
		let client = NameGenClient::new("http://127.0.0.1:1");
		ChatSession::new(client, Preferences::default())
	}

	#[test]
	fn test_new_session_starts_with_greeting() {
		let session = unreachable_session();

		assert_eq!(session.transcript().len(), 1);
		let first = &session.transcript()[0];
		assert_eq!(first.author, Author::Bot);
		assert_eq!(first.text, GREETING);
		assert!(!first.is_error);
		assert!(!session.is_busy());
	}

	#[test]
	fn test_new_session_normalizes_config_domains() {
		let prefs = Preferences {
			domains: vec!["AI".to_string(), "AI".to_string(), "IoT".to_string()],
			..Default::default()
		};
		let session = ChatSession::new(NameGenClient::new("http://127.0.0.1:1"), prefs);

		assert_eq!(
			session.preferences().domains,
			vec!["AI".to_string(), "IoT".to_string()]
		);
	}

	#[tokio::test]
	async fn test_empty_input_is_dropped() {
		let mut session = unreachable_session();

		session.submit_user_message("").await;
		session.submit_user_message("   \t ").await;

		// Only the greeting, no user echo and no request attempt
		assert_eq!(session.transcript().len(), 1);
	}

	#[tokio::test]
	async fn test_submit_while_busy_is_dropped() {
		let mut session = unreachable_session();
		session.in_flight = true;

		session.submit_user_message("names please").await;

		assert_eq!(session.transcript().len(), 1);
		assert!(session.is_busy());
	}

	#[tokio::test]
	async fn test_generate_while_busy_is_dropped() {
		let mut session = unreachable_session();
		session.in_flight = true;

		session.generate_names(Some("ignored")).await;

		assert_eq!(session.transcript().len(), 1);
	}

	#[tokio::test]
	async fn test_failed_submit_appends_user_and_error_entries() {
		let mut session = unreachable_session();

		session.submit_user_message("  a team that builds rockets  ").await;

		let transcript = session.transcript();
		assert_eq!(transcript.len(), 3);

		assert_eq!(transcript[1].author, Author::User);
		assert_eq!(transcript[1].text, "a team that builds rockets");

		assert_eq!(transcript[2].author, Author::Bot);
		assert!(transcript[2].is_error);
		assert!(transcript[2].text.contains("http://127.0.0.1:1"));

		// Flag is released even on failure
		assert!(!session.is_busy());
	}

	#[tokio::test]
	async fn test_quick_action_appends_only_bot_entry() {
		let mut session = unreachable_session();

		session.quick_action(QuickAction::Funny).await;

		let transcript = session.transcript();
		assert_eq!(transcript.len(), 2);
		assert_eq!(transcript[1].author, Author::Bot);

		// Tone actions persist their tone even when the request fails
		assert_eq!(session.preferences().tone, Tone::Funny);
	}

	#[tokio::test]
	async fn test_regenerate_keeps_current_tone() {
		let mut session = unreachable_session();
		session.preferences_mut().tone = Tone::Aggressive;

		session.quick_action(QuickAction::Regenerate).await;

		assert_eq!(session.preferences().tone, Tone::Aggressive);
	}

	#[tokio::test]
	async fn test_error_path_respects_minimum_display_time() {
		let mut session = unreachable_session();

		// Connection refused resolves almost instantly, the floor must
		// still hold the reply back.
		let started = Instant::now();
		session.generate_names(Some("quick fail")).await;
		let elapsed = started.elapsed();

		assert!(
			elapsed >= Duration::from_millis(MIN_LOADING_MS),
			"reply appeared after {:?}",
			elapsed
		);
		assert!(session.transcript().last().unwrap().is_error);
	}

	#[test]
	fn test_draft_feeds_generation_message() {
		let mut session = unreachable_session();
		session.set_draft("half typed idea");

		assert_eq!(session.effective_message(None), "half typed idea");
		assert_eq!(session.effective_message(Some("explicit wins")), "explicit wins");
	}

	#[test]
	fn test_fallback_message_is_synthesized_from_preferences() {
		let mut session = unreachable_session();
		session.preferences_mut().toggle_domain("Gaming");

		assert_eq!(
			session.effective_message(None),
			"Generate names for a hackathon team in Gaming domain with a cool tone"
		);
	}

	#[test]
	fn test_last_suggestions_skips_error_entries() {
		let mut session = unreachable_session();
		session.transcript.push(
			TranscriptEntry::bot(SUCCESS_LABEL).with_names(
				vec!["NeuraCore".to_string()],
				vec![],
				vec![],
			),
		);
		session
			.transcript
			.push(TranscriptEntry::bot_error("connection lost"));

		let latest = session.last_suggestions().unwrap();
		assert_eq!(latest.meaningful_names, vec!["NeuraCore".to_string()]);
	}

	#[test]
	fn test_quick_action_instructions() {
		assert_eq!(QuickAction::Cool.instruction(), "Generate cool and catchy names");
		assert_eq!(
			QuickAction::Professional.instruction(),
			"Generate professional and formal names"
		);
		assert_eq!(
			QuickAction::Funny.instruction(),
			"Generate funny and creative names"
		);
		assert_eq!(QuickAction::Regenerate.instruction(), "Generate more name options");
	}
}
