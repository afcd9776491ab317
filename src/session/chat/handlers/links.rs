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

// Lookup command handlers: domain availability and GitHub

use super::parse_name_index;
use crate::links;
use crate::session::controller::ChatSession;
use anyhow::Result;
use colored::Colorize;
use url::Url;

pub fn handle_check(session: &ChatSession, params: &[&str]) -> Result<bool> {
	lookup(session, params, "/check", |name| {
		links::domain_lookup_url(name)
	})
}

pub fn handle_github(session: &ChatSession, params: &[&str]) -> Result<bool> {
	lookup(session, params, "/github", |name| links::repo_lookup_url(name))
}

// Shared flow: pick the name by number, build the URL, open the browser
fn lookup(
	session: &ChatSession,
	params: &[&str],
	usage: &str,
	build_url: impl Fn(&str) -> Result<Url>,
) -> Result<bool> {
	let entry = match session.last_suggestions() {
		Some(entry) => entry,
		None => {
			println!(
				"{}",
				"No name suggestions yet. Ask for names first.".bright_yellow()
			);
			return Ok(false);
		}
	};

	let names = entry.suggested_names();
	if params.is_empty() {
		println!(
			"{}",
			format!("Usage: {} <number> (1-{})", usage, names.len()).bright_yellow()
		);
		return Ok(false);
	}

	let name = match parse_name_index(params[0], names.len()) {
		Ok(idx) => names[idx],
		Err(message) => {
			println!("{}", message.bright_red());
			return Ok(false);
		}
	};

	let url = build_url(name)?;
	match links::open_in_browser(&url) {
		Ok(_) => {
			println!(
				"{}",
				format!("Opening {} for \"{}\"...", url, name).bright_green()
			);
		}
		Err(e) => {
			println!("{}: {}", "Failed to open the browser".bright_red(), e);
			println!("{}", format!("Visit manually: {}", url).yellow());
		}
	}

	Ok(false)
}
