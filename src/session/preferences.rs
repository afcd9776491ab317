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

// User preferences that shape every name generation request

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain tags offered by default. Arbitrary tags are accepted too,
/// this list only drives the help output.
pub const KNOWN_DOMAINS: [&str; 12] = [
	"AI",
	"IoT",
	"Cybersecurity",
	"Healthcare",
	"Sustainability",
	"Fintech",
	"EdTech",
	"Gaming",
	"Blockchain",
	"Cloud Computing",
	"Robotics",
	"Data Science",
];

/// What kind of team the name is for
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
	Hackathon,
	Startup,
	Club,
	Research,
	Competition,
}

impl Default for Purpose {
	fn default() -> Self {
		Purpose::Hackathon
	}
}

impl Purpose {
	pub const ALL: [Purpose; 5] = [
		Purpose::Hackathon,
		Purpose::Startup,
		Purpose::Club,
		Purpose::Research,
		Purpose::Competition,
	];

	/// Wire value sent to the backend
	pub fn as_str(&self) -> &'static str {
		match self {
			Purpose::Hackathon => "hackathon",
			Purpose::Startup => "startup",
			Purpose::Club => "club",
			Purpose::Research => "research",
			Purpose::Competition => "competition",
		}
	}

	/// Human readable label for display
	pub fn label(&self) -> &'static str {
		match self {
			Purpose::Hackathon => "Hackathon Team",
			Purpose::Startup => "Startup",
			Purpose::Club => "College Club",
			Purpose::Research => "Research Group",
			Purpose::Competition => "Competition Team",
		}
	}

	pub fn parse(value: &str) -> Option<Purpose> {
		match value.to_lowercase().as_str() {
			"hackathon" => Some(Purpose::Hackathon),
			"startup" => Some(Purpose::Startup),
			"club" => Some(Purpose::Club),
			"research" => Some(Purpose::Research),
			"competition" => Some(Purpose::Competition),
			_ => None,
		}
	}
}

impl fmt::Display for Purpose {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Tone of the suggested names
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
	Professional,
	Cool,
	Funny,
	Aggressive,
	Minimal,
}

impl Default for Tone {
	fn default() -> Self {
		Tone::Cool
	}
}

impl Tone {
	pub const ALL: [Tone; 5] = [
		Tone::Professional,
		Tone::Cool,
		Tone::Funny,
		Tone::Aggressive,
		Tone::Minimal,
	];

	/// Wire value sent to the backend
	pub fn as_str(&self) -> &'static str {
		match self {
			Tone::Professional => "professional",
			Tone::Cool => "cool",
			Tone::Funny => "funny",
			Tone::Aggressive => "aggressive",
			Tone::Minimal => "minimal",
		}
	}

	pub fn parse(value: &str) -> Option<Tone> {
		match value.to_lowercase().as_str() {
			"professional" => Some(Tone::Professional),
			"cool" => Some(Tone::Cool),
			"funny" => Some(Tone::Funny),
			"aggressive" => Some(Tone::Aggressive),
			"minimal" => Some(Tone::Minimal),
			_ => None,
		}
	}
}

impl fmt::Display for Tone {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Session-scoped generation preferences
///
/// Domains behave like a toggle set: selecting a tag twice removes it
/// again. The two free-text fields stay None until the user sets them,
/// at which point they take priority over the typed message in the
/// request payload.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Preferences {
	#[serde(default)]
	pub purpose: Purpose,

	#[serde(default)]
	pub domains: Vec<String>,

	#[serde(default)]
	pub tone: Tone,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub project_description: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub custom_prompt: Option<String>,
}

impl Preferences {
	/// Toggle a domain tag and report whether it is now selected
	pub fn toggle_domain(&mut self, domain: &str) -> bool {
		if let Some(pos) = self.domains.iter().position(|d| d == domain) {
			self.domains.remove(pos);
			false
		} else {
			self.domains.push(domain.to_string());
			true
		}
	}

	pub fn has_domain(&self, domain: &str) -> bool {
		self.domains.iter().any(|d| d == domain)
	}

	/// Drop duplicate tags while keeping first-seen order. Config files
	/// edited by hand can contain repeats; toggle_domain never creates them.
	pub fn normalize(&mut self) {
		let mut seen: Vec<String> = Vec::with_capacity(self.domains.len());
		for domain in self.domains.drain(..) {
			if !seen.contains(&domain) {
				seen.push(domain);
			}
		}
		self.domains = seen;
	}

	/// Selected domains joined with " and ", or "general" when empty
	pub fn domain_summary(&self) -> String {
		if self.domains.is_empty() {
			"general".to_string()
		} else {
			self.domains.join(" and ")
		}
	}

	/// Sentence used as the request message when the user typed nothing
	pub fn synthesized_request(&self) -> String {
		let domains = if self.domains.is_empty() {
			"general".to_string()
		} else {
			self.domains.join(", ")
		};
		format!(
			"Generate names for a {} team in {} domain with a {} tone",
			self.purpose, domains, self.tone
		)
	}
}
