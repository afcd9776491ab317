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

// Slash command processing, one module per command family

mod clear;
mod copy;
mod exit;
mod health;
mod help;
mod info;
mod links;
mod loglevel;
mod prefs;
mod transcript;

use super::commands::*;
use super::runner::{run_generation, GenerationTrigger};
use crate::config::Config;
use crate::session::controller::{ChatSession, QuickAction};
use anyhow::Result;
use colored::Colorize;

/// Process one slash command. Returns true when the session should end.
pub async fn process_command(
	session: &mut ChatSession,
	input: &str,
	config: &mut Config,
) -> Result<bool> {
	// Extract command and potential parameters
	let input_parts: Vec<&str> = input.split_whitespace().collect();
	let command = input_parts[0];
	let params = if input_parts.len() > 1 {
		&input_parts[1..]
	} else {
		&[]
	};

	match command {
		EXIT_COMMAND | QUIT_COMMAND => exit::handle_exit(),
		HELP_COMMAND => help::handle_help(),
		CLEAR_COMMAND => clear::handle_clear(),
		COPY_COMMAND => copy::handle_copy(session, params),
		CHECK_COMMAND => links::handle_check(session, params),
		GITHUB_COMMAND => links::handle_github(session, params),
		GENERATE_COMMAND => handle_generate(session, params).await,
		COOL_COMMAND => handle_quick_action(session, QuickAction::Cool).await,
		PROFESSIONAL_COMMAND => handle_quick_action(session, QuickAction::Professional).await,
		FUNNY_COMMAND => handle_quick_action(session, QuickAction::Funny).await,
		REGENERATE_COMMAND => handle_quick_action(session, QuickAction::Regenerate).await,
		PURPOSE_COMMAND => prefs::handle_purpose(session, params),
		TONE_COMMAND => prefs::handle_tone(session, params),
		DOMAIN_COMMAND => prefs::handle_domain(session, params),
		DOMAINS_COMMAND => prefs::handle_domains(session),
		DESCRIBE_COMMAND => prefs::handle_describe(session, params),
		PROMPT_COMMAND => prefs::handle_prompt(session, params),
		PREFS_COMMAND => prefs::handle_prefs(session),
		HEALTH_COMMAND => health::handle_health(session).await,
		TRANSCRIPT_COMMAND => transcript::handle_transcript(session),
		INFO_COMMAND => info::handle_info(session, config),
		LOGLEVEL_COMMAND => loglevel::handle_loglevel(config, params),
		_ => {
			println!(
				"{}",
				format!("Unknown command: {}. Type /help for available commands.", command)
					.bright_yellow()
			);
			Ok(false)
		}
	}
}

// Quick actions reuse the generation flow with a fixed instruction
async fn handle_quick_action(session: &mut ChatSession, action: QuickAction) -> Result<bool> {
	run_generation(session, GenerationTrigger::Action(action)).await;
	Ok(false)
}

// /generate with text behaves like typing that text; without text it
// falls back to the draft or the preference summary
async fn handle_generate(session: &mut ChatSession, params: &[&str]) -> Result<bool> {
	if params.is_empty() {
		run_generation(session, GenerationTrigger::Auto).await;
	} else {
		let message = params.join(" ");
		run_generation(session, GenerationTrigger::Message(&message)).await;
	}
	Ok(false)
}

// Resolve a 1-based name number as printed next to the suggestions
pub(super) fn parse_name_index(param: &str, count: usize) -> Result<usize, String> {
	match param.parse::<usize>() {
		Ok(n) if n >= 1 && n <= count => Ok(n - 1),
		Ok(_) => Err(format!(
			"Name number out of range. Pick a number between 1 and {}.",
			count
		)),
		Err(_) => Err(format!(
			"Not a number: {}. Use the number shown next to a name.",
			param
		)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_name_index() {
		assert_eq!(parse_name_index("1", 3), Ok(0));
		assert_eq!(parse_name_index("3", 3), Ok(2));
		assert!(parse_name_index("0", 3).is_err());
		assert!(parse_name_index("4", 3).is_err());
		assert!(parse_name_index("first", 3).is_err());
	}
}
