// Slash command completion and hints for rustyline

use colored::*;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow::{self, Borrowed, Owned};

use super::commands::COMMANDS;
use crate::session::preferences::KNOWN_DOMAINS;

/// Rustyline helper: completes slash commands and domain tags, hints the
/// rest of a partially typed command and falls back to history hints for
/// plain text
pub struct CommandHelper {
	commands: Vec<String>,
	hinter: HistoryHinter,
}

impl CommandHelper {
	pub fn new() -> Self {
		Self {
			commands: COMMANDS.iter().map(|&s| s.to_string()).collect(),
			hinter: HistoryHinter {},
		}
	}
}

impl Default for CommandHelper {
	fn default() -> Self {
		Self::new()
	}
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
	type Candidate = Pair;

	fn complete(
		&self,
		line: &str,
		_pos: usize,
		_ctx: &rustyline::Context<'_>,
	) -> Result<(usize, Vec<Self::Candidate>), ReadlineError> {
		// Only complete slash commands
		if !line.starts_with('/') {
			return Ok((0, vec![]));
		}

		// The /domain argument completes from the canonical tag list;
		// any other tag can still be typed out in full
		if let Some(partial) = line.strip_prefix("/domain ") {
			let needle = partial.to_lowercase();
			let candidates: Vec<Pair> = KNOWN_DOMAINS
				.iter()
				.filter(|tag| tag.to_lowercase().starts_with(&needle))
				.map(|tag| Pair {
					display: tag.to_string(),
					replacement: tag.to_string(),
				})
				.collect();
			return Ok((line.len() - partial.len(), candidates));
		}

		let candidates: Vec<Pair> = self
			.commands
			.iter()
			.filter(|cmd| cmd.starts_with(line))
			.map(|cmd| Pair {
				display: cmd.clone(),
				replacement: cmd.clone(),
			})
			.collect();

		Ok((0, candidates))
	}
}

impl Hinter for CommandHelper {
	type Hint = String;

	fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
		if line.is_empty() {
			return None;
		}

		if line.starts_with('/') {
			return self
				.commands
				.iter()
				.find(|cmd| cmd.starts_with(line))
				.map(|cmd| cmd[line.len()..].to_string());
		}

		// Plain messages fall back to history based hints
		self.hinter.hint(line, pos, ctx)
	}
}

impl Highlighter for CommandHelper {
	fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
		// Known commands render green while being typed
		if line.starts_with('/') {
			let is_known = self
				.commands
				.iter()
				.any(|cmd| line == cmd || cmd.starts_with(line));
			if is_known {
				return Owned(line.green().to_string());
			}
		}
		Borrowed(line)
	}

	fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
		false
	}

	fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
		// Dim gray hints, like shell autosuggestions
		Owned(hint.bright_black().to_string())
	}
}

impl Validator for CommandHelper {}
