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

// Help command handler

use super::super::commands::*;
use crate::session::preferences::KNOWN_DOMAINS;
use anyhow::Result;
use colored::Colorize;

pub fn handle_help() -> Result<bool> {
	println!("{}", "\nAvailable commands:\n".bright_cyan());

	println!("{}", "Generating names:".bright_yellow());
	println!("Type any message to ask for names, or use:");
	println!(
		"{} [text] - Generate with the given text, or from your preferences",
		GENERATE_COMMAND.cyan()
	);
	println!("{} - Generate cool and catchy names", COOL_COMMAND.cyan());
	println!(
		"{} - Generate professional and formal names",
		PROFESSIONAL_COMMAND.cyan()
	);
	println!("{} - Generate funny and creative names", FUNNY_COMMAND.cyan());
	println!("{} - Generate more name options", REGENERATE_COMMAND.cyan());
	println!();

	println!("{}", "Working with suggestions:".bright_yellow());
	println!(
		"{} [number] - Copy one name, or all of them, to the clipboard",
		COPY_COMMAND.cyan()
	);
	println!(
		"{} <number> - Check domain availability for a name on Namecheap",
		CHECK_COMMAND.cyan()
	);
	println!(
		"{} <number> - Look the name up on GitHub",
		GITHUB_COMMAND.cyan()
	);
	println!();

	println!("{}", "Preferences:".bright_yellow());
	println!(
		"{} [value] - Show or set the team purpose: hackathon, startup, club, research, competition",
		PURPOSE_COMMAND.cyan()
	);
	println!(
		"{} [value] - Show or set the tone: professional, cool, funny, aggressive, minimal",
		TONE_COMMAND.cyan()
	);
	println!("{} <tag> - Toggle a domain tag on or off", DOMAIN_COMMAND.cyan());
	println!("{} - List domain tags", DOMAINS_COMMAND.cyan());
	println!(
		"{} [text] - Set the project description; empty clears it",
		DESCRIBE_COMMAND.cyan()
	);
	println!(
		"{} [text] - Set a custom prompt; empty clears it",
		PROMPT_COMMAND.cyan()
	);
	println!("{} - Show all current preferences", PREFS_COMMAND.cyan());
	println!();

	println!("{}", "Session:".bright_yellow());
	println!("{} - Show this help message", HELP_COMMAND.cyan());
	println!("{} - Replay the whole conversation", TRANSCRIPT_COMMAND.cyan());
	println!("{} - Show session details", INFO_COMMAND.cyan());
	println!("{} - Check whether the backend is reachable", HEALTH_COMMAND.cyan());
	println!(
		"{} [level] - Set logging level: none, info, or debug",
		LOGLEVEL_COMMAND.cyan()
	);
	println!("{} - Clear the screen", CLEAR_COMMAND.cyan());
	println!(
		"{} or {} - Exit the session\n",
		EXIT_COMMAND.cyan(),
		QUIT_COMMAND.cyan()
	);

	println!("{}", "Keyboard shortcuts:\n".bright_cyan());
	println!("{} - Complete a command", "Tab".bright_green());
	println!("{} - Accept hint/completion", "Ctrl+E".bright_green());
	println!("{} - Cancel input", "Ctrl+C".bright_green());
	println!("{} - Exit session", "Ctrl+D".bright_green());
	println!();

	println!("{}", "Common domain tags:".bright_cyan());
	println!("{}", KNOWN_DOMAINS.join(", "));
	println!("Any other tag works too, e.g. /domain SpaceTech\n");

	Ok(false)
}
