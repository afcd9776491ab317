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

// Info command handler

use crate::config::{Config, LogLevel};
use crate::session::controller::ChatSession;
use crate::session::Author;
use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;

pub fn handle_info(session: &ChatSession, config: &Config) -> Result<bool> {
	println!("{}", "───────────── Session Information ─────────────".bright_cyan());

	println!("{} {}", "Endpoint:".yellow(), session.endpoint().bright_white());

	let transcript = session.transcript();

	// The greeting is appended when the session starts
	if let Some(first) = transcript.first() {
		let started = DateTime::<Utc>::from_timestamp(first.timestamp as i64, 0)
			.map(|dt| dt.naive_local().format("%Y-%m-%d %H:%M").to_string())
			.unwrap_or_default();
		println!("{} {}", "Started:".yellow(), started);
	}

	let user_entries = transcript
		.iter()
		.filter(|e| e.author == Author::User)
		.count();
	let bot_entries = transcript.len() - user_entries;
	let failed = transcript.iter().filter(|e| e.is_error).count();
	let suggested: usize = transcript
		.iter()
		.map(|e| e.meaningful_names.len() + e.creative_names.len())
		.sum();

	println!("{} {}", "Entries:".yellow(), transcript.len());
	println!(
		"{} {} from you, {} from Braion",
		"Breakdown:".yellow(),
		user_entries.to_string().bright_blue(),
		bot_entries.to_string().bright_green()
	);
	println!("{} {}", "Failed generations:".yellow(), failed);
	println!("{} {}", "Names suggested so far:".yellow(), suggested);

	let level = match config.get_log_level() {
		LogLevel::None => "none",
		LogLevel::Info => "info",
		LogLevel::Debug => "debug",
	};
	println!("{} {}", "Log level:".yellow(), level);

	println!();

	Ok(false)
}
