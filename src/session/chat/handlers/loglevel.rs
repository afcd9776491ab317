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

// Log level command handler

use crate::config::{Config, LogLevel};
use anyhow::Result;
use colored::Colorize;

pub fn handle_loglevel(config: &mut Config, params: &[&str]) -> Result<bool> {
	// Runtime-only change, nothing is saved to disk
	if params.is_empty() {
		let level_str = match config.get_log_level() {
			LogLevel::None => "none",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
		};
		println!(
			"{}",
			format!("Current log level: {}", level_str).bright_cyan()
		);
		println!("{}", "Available levels: none, info, debug".bright_yellow());
		return Ok(false);
	}

	let new_level = match params[0].to_lowercase().as_str() {
		"none" => LogLevel::None,
		"info" => LogLevel::Info,
		"debug" => LogLevel::Debug,
		_ => {
			println!(
				"{}",
				"Invalid log level. Use: none, info, or debug".bright_red()
			);
			return Ok(false);
		}
	};

	config.log_level = new_level.clone();
	// The logging macros read the thread-local copy
	crate::config::set_thread_config(config);

	match new_level {
		LogLevel::None => {
			println!("{}", "Log level set to NONE.".bright_yellow());
			println!("{}", "Only essential information will be displayed.".bright_blue());
		}
		LogLevel::Info => {
			println!("{}", "Log level set to INFO.".bright_green());
			println!("{}", "Moderate logging will be shown.".bright_yellow());
		}
		LogLevel::Debug => {
			println!("{}", "Log level set to DEBUG.".bright_green());
			println!(
				"{}",
				"Request payloads and failures will be shown in detail.".bright_yellow()
			);
		}
	}
	println!(
		"{}",
		"Note: This change is runtime-only and will not persist after session ends.".bright_blue()
	);

	Ok(false)
}
