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

use anyhow::Result;
use braion::client::NameGenClient;
use braion::config::Config;
use braion::session::chat::runner::{run_generation, GenerationTrigger};
use braion::session::controller::ChatSession;
use clap::Args;

#[derive(Args, Debug)]
pub struct GenerateArgs {
	/// What the team or project is about
	#[arg(value_name = "MESSAGE")]
	pub message: Option<String>,

	/// Team purpose: hackathon, startup, club, research or competition
	#[arg(long)]
	pub purpose: Option<String>,

	/// Name tone: professional, cool, funny, aggressive or minimal
	#[arg(long)]
	pub tone: Option<String>,

	/// Domain tag to select (repeatable)
	#[arg(long = "domain", value_name = "TAG")]
	pub domains: Vec<String>,

	/// Project description sent with the request
	#[arg(long)]
	pub describe: Option<String>,

	/// Custom prompt sent with the request
	#[arg(long)]
	pub prompt: Option<String>,

	/// Print the reply as JSON instead of the colored listing
	#[arg(long)]
	pub json: bool,

	/// Backend endpoint override, e.g. http://127.0.0.1:8000
	#[arg(long)]
	pub endpoint: Option<String>,
}

/// One-shot generation: same session flow as the chat, without the loop
pub async fn execute(args: &GenerateArgs, mut config: Config) -> Result<()> {
	if let Some(endpoint) = &args.endpoint {
		config.endpoint = endpoint.clone();
	}

	braion::config::set_thread_config(&config);

	let mut preferences = config.preferences.clone();
	super::apply_preference_flags(&mut preferences, &args.purpose, &args.tone, &args.domains)?;
	if let Some(text) = &args.describe {
		preferences.project_description = Some(text.clone());
	}
	if let Some(text) = &args.prompt {
		preferences.custom_prompt = Some(text.clone());
	}

	let client = NameGenClient::new(&config.endpoint);
	let mut session = ChatSession::new(client, preferences);

	// The message rides in as the draft so no user echo is printed
	if let Some(message) = &args.message {
		session.set_draft(message);
	}

	if args.json {
		// No spinner when emitting machine readable output
		session.generate_names(None).await;
	} else {
		run_generation(&mut session, GenerationTrigger::Auto).await;
	}

	let entry = match session.transcript().last() {
		Some(entry) => entry,
		None => anyhow::bail!("Generation produced no reply"),
	};

	if args.json {
		println!("{}", serde_json::to_string_pretty(entry)?);
	}

	if entry.is_error {
		anyhow::bail!("Could not reach the backend at {}", config.endpoint);
	}

	Ok(())
}
