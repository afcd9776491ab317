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

// HTTP client for the name generation backend

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::session::preferences::Preferences;

/// Request body for POST /generate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerateRequest {
	pub description: String,
	pub project_description: String,
	pub custom_prompt: String,
	pub tone: String,
	pub domain: String,
	pub purpose: String,
}

impl GenerateRequest {
	/// Compose the wire payload from the current preferences and the
	/// effective user message. The free-text preferences win over the
	/// message when they are set.
	pub fn from_preferences(prefs: &Preferences, effective_message: &str) -> Self {
		let domain_summary = prefs.domain_summary();

		Self {
			description: format!("{} team for {}", prefs.purpose, domain_summary),
			project_description: prefs
				.project_description
				.clone()
				.unwrap_or_else(|| effective_message.to_string()),
			custom_prompt: prefs
				.custom_prompt
				.clone()
				.unwrap_or_else(|| effective_message.to_string()),
			tone: prefs.tone.to_string(),
			domain: domain_summary,
			purpose: prefs.purpose.to_string(),
		}
	}
}

/// Response body of POST /generate
///
/// The backend also returns a `context` object which we do not use, so
/// unknown fields are ignored. Every list defaults to empty when absent.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GenerateResponse {
	#[serde(default)]
	pub meaningful_names: Vec<String>,

	#[serde(default)]
	pub creative_names: Vec<String>,

	#[serde(default)]
	pub concepts: Vec<String>,
}

/// Response body of GET /health
#[derive(Debug, Deserialize, Clone)]
pub struct HealthStatus {
	pub status: String,

	#[serde(default)]
	pub service: Option<String>,
}

/// Thin client around the two backend endpoints.
/// One attempt per call, no retries: a transport failure surfaces as an
/// error the session turns into a transcript entry.
pub struct NameGenClient {
	http: Client,
	base_url: String,
}

impl NameGenClient {
	pub fn new(base_url: &str) -> Self {
		Self {
			http: Client::new(),
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// POST /generate with the composed payload
	pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
		let url = format!("{}/generate", self.base_url);

		let response = self
			.http
			.post(&url)
			.header("Content-Type", "application/json")
			.json(request)
			.send()
			.await
			.context(format!("Failed to reach the generation service at {}", url))?;

		let status = response.status();
		let body = response
			.text()
			.await
			.context("Failed to read generation response body")?;

		if !status.is_success() {
			return Err(anyhow::anyhow!(
				"Generation service returned HTTP {}: {}",
				status,
				body
			));
		}

		let parsed: GenerateResponse = serde_json::from_str(&body)
			.context(format!("Failed to parse generation response: {}", body))?;

		Ok(parsed)
	}

	/// GET /health to probe whether the backend is reachable
	pub async fn health(&self) -> Result<HealthStatus> {
		let url = format!("{}/health", self.base_url);

		let response = self
			.http
			.get(&url)
			.send()
			.await
			.context(format!("Failed to reach the backend at {}", url))?;

		let status = response.status();
		let body = response
			.text()
			.await
			.context("Failed to read health response body")?;

		if !status.is_success() {
			return Err(anyhow::anyhow!("Health check returned HTTP {}", status));
		}

		let parsed: HealthStatus =
			serde_json::from_str(&body).context(format!("Failed to parse health response: {}", body))?;

		Ok(parsed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::session::preferences::{Purpose, Tone};

	#[test]
	fn test_payload_with_default_preferences() {
		let prefs = Preferences::default();
		let request = GenerateRequest::from_preferences(&prefs, "need a name for my robot team");

		assert_eq!(request.description, "hackathon team for general");
		assert_eq!(request.project_description, "need a name for my robot team");
		assert_eq!(request.custom_prompt, "need a name for my robot team");
		assert_eq!(request.tone, "cool");
		assert_eq!(request.domain, "general");
		assert_eq!(request.purpose, "hackathon");
	}

	#[test]
	fn test_payload_joins_domains_with_and() {
		let mut prefs = Preferences::default();
		prefs.purpose = Purpose::Startup;
		prefs.tone = Tone::Professional;
		prefs.toggle_domain("AI");
		prefs.toggle_domain("Fintech");

		let request = GenerateRequest::from_preferences(&prefs, "something sleek");

		assert_eq!(request.description, "startup team for AI and Fintech");
		assert_eq!(request.domain, "AI and Fintech");
		assert_eq!(request.purpose, "startup");
		assert_eq!(request.tone, "professional");
	}

	#[test]
	fn test_payload_prefers_stored_free_text() {
		let mut prefs = Preferences::default();
		prefs.project_description = Some("an app that waters plants".to_string());
		prefs.custom_prompt = Some("prefer short names".to_string());

		let request = GenerateRequest::from_preferences(&prefs, "typed message");

		assert_eq!(request.project_description, "an app that waters plants");
		assert_eq!(request.custom_prompt, "prefer short names");
	}

	#[test]
	fn test_response_defaults_missing_lists_to_empty() {
		let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
		assert!(parsed.meaningful_names.is_empty());
		assert!(parsed.creative_names.is_empty());
		assert!(parsed.concepts.is_empty());
	}

	#[test]
	fn test_response_ignores_unknown_fields() {
		let raw = r#"{
			"concepts": ["speed", "light"],
			"meaningful_names": ["SwiftBeam"],
			"creative_names": ["Zyntra", "Velocty"],
			"context": {"purpose": "hackathon", "tone": "cool"}
		}"#;
		let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();

		assert_eq!(parsed.meaningful_names, vec!["SwiftBeam".to_string()]);
		assert_eq!(
			parsed.creative_names,
			vec!["Zyntra".to_string(), "Velocty".to_string()]
		);
		assert_eq!(parsed.concepts, vec!["speed".to_string(), "light".to_string()]);
	}

	#[test]
	fn test_health_status_parse() {
		let parsed: HealthStatus =
			serde_json::from_str(r#"{"status": "healthy", "service": "braion-api"}"#).unwrap();
		assert_eq!(parsed.status, "healthy");
		assert_eq!(parsed.service.as_deref(), Some("braion-api"));

		let bare: HealthStatus = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
		assert!(bare.service.is_none());
	}

	#[test]
	fn test_base_url_trailing_slash_is_trimmed() {
		let client = NameGenClient::new("http://127.0.0.1:8000/");
		assert_eq!(client.base_url(), "http://127.0.0.1:8000");
	}
}
