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
use braion::config::Config;
use braion::session::chat::runner::run_interactive_session;
use clap::Args;

#[derive(Args, Debug, Default)]
pub struct ChatArgs {
	/// Backend endpoint override, e.g. http://127.0.0.1:8000
	#[arg(long)]
	pub endpoint: Option<String>,

	/// Team purpose for this session: hackathon, startup, club, research or competition
	#[arg(long)]
	pub purpose: Option<String>,

	/// Name tone for this session: professional, cool, funny, aggressive or minimal
	#[arg(long)]
	pub tone: Option<String>,

	/// Domain tag to select at startup (repeatable)
	#[arg(long = "domain", value_name = "TAG")]
	pub domains: Vec<String>,
}

pub async fn execute(args: &ChatArgs, mut config: Config) -> Result<()> {
	if let Some(endpoint) = &args.endpoint {
		config.endpoint = endpoint.clone();
	}
	super::apply_preference_flags(&mut config.preferences, &args.purpose, &args.tone, &args.domains)?;

	run_interactive_session(&config).await
}
