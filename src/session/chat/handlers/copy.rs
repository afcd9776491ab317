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

// Copy command handler

use super::parse_name_index;
use crate::session::controller::ChatSession;
use anyhow::Result;
use arboard::Clipboard;
use colored::Colorize;

/// Copy one suggested name (by its printed number), or all of them,
/// from the latest suggestion entry
pub fn handle_copy(session: &ChatSession, params: &[&str]) -> Result<bool> {
	let entry = match session.last_suggestions() {
		Some(entry) => entry,
		None => {
			println!(
				"{}",
				"No name suggestions to copy yet. Ask for names first.".bright_yellow()
			);
			return Ok(false);
		}
	};

	let names = entry.suggested_names();
	let (text, what) = if params.is_empty() {
		(names.join("\n"), format!("All {} names", names.len()))
	} else {
		match parse_name_index(params[0], names.len()) {
			Ok(idx) => (names[idx].to_string(), format!("\"{}\"", names[idx])),
			Err(message) => {
				println!("{}", message.bright_red());
				return Ok(false);
			}
		}
	};

	match Clipboard::new() {
		Ok(mut clipboard) => match clipboard.set_text(text) {
			Ok(_) => {
				println!("{}", format!("{} copied to clipboard.", what).bright_green());
			}
			Err(e) => {
				println!("{}: {}", "Failed to copy to clipboard".bright_red(), e);
			}
		},
		Err(e) => {
			println!("{}: {}", "Failed to access clipboard".bright_red(), e);
		}
	}

	Ok(false)
}
