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

// Configuration loading and logging macros

use crate::session::preferences::Preferences;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;

/// Log level controlling how chatty the terminal output is
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	None,
	Info,
	Debug,
}

impl Default for LogLevel {
	fn default() -> Self {
		LogLevel::None
	}
}

impl LogLevel {
	/// Info messages are shown at Info and Debug levels
	pub fn is_info_enabled(&self) -> bool {
		matches!(self, LogLevel::Info | LogLevel::Debug)
	}

	/// Debug messages are shown only at Debug level
	pub fn is_debug_enabled(&self) -> bool {
		matches!(self, LogLevel::Debug)
	}
}

// Default endpoint of the local name generation backend
fn default_endpoint() -> String {
	"http://127.0.0.1:8000".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
	/// Log level: none (default), info or debug
	#[serde(default)]
	pub log_level: LogLevel,

	/// Base URL of the name generation service
	#[serde(default = "default_endpoint")]
	pub endpoint: String,

	/// Preference defaults applied when a new chat session starts
	#[serde(default)]
	pub preferences: Preferences,

	// Path the config was loaded from, never serialized
	#[serde(skip)]
	config_path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: LogLevel::default(),
			endpoint: default_endpoint(),
			preferences: Preferences::default(),
			config_path: None,
		}
	}
}

impl Config {
	/// Load the configuration from the default location, falling back to
	/// defaults when no file exists. The BRAION_ENDPOINT environment
	/// variable overrides the configured endpoint.
	pub fn load() -> Result<Config> {
		let config_path = crate::directories::get_config_file_path()?;

		let mut config: Config = if config_path.exists() {
			let raw = std::fs::read_to_string(&config_path).context(format!(
				"Failed to read config file: {}",
				config_path.display()
			))?;
			toml::from_str(&raw).context(format!(
				"Failed to parse config file: {}",
				config_path.display()
			))?
		} else {
			Config::default()
		};

		config.config_path = Some(config_path);

		// Environment override for the backend endpoint
		if let Ok(endpoint) = std::env::var("BRAION_ENDPOINT") {
			if !endpoint.is_empty() {
				config.endpoint = endpoint;
			}
		}

		Ok(config)
	}

	/// Save the configuration back to the file it was loaded from
	pub fn save(&self) -> Result<()> {
		let config_path = match &self.config_path {
			Some(path) => path.clone(),
			None => crate::directories::get_config_file_path()?,
		};

		let raw = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
		std::fs::write(&config_path, raw).context(format!(
			"Failed to write config file: {}",
			config_path.display()
		))?;

		Ok(())
	}

	/// Write a default config file if none exists yet and return its path
	pub fn create_default_config() -> Result<PathBuf> {
		let config_path = crate::directories::get_config_file_path()?;

		if !config_path.exists() {
			let config = Config::default();
			let raw = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
			std::fs::write(&config_path, raw).context(format!(
				"Failed to write config file: {}",
				config_path.display()
			))?;
		}

		Ok(config_path)
	}

	/// System-wide log level getter used by the logging macros
	pub fn get_log_level(&self) -> LogLevel {
		self.log_level.clone()
	}
}

// Logging macros for different log levels
// These macros automatically check the current log level and only print if appropriate

thread_local! {
	static CURRENT_CONFIG: RefCell<Option<Config>> = const { RefCell::new(None) };
}

/// Set the current config for the thread (to be used by logging macros)
pub fn set_thread_config(config: &Config) {
	CURRENT_CONFIG.with(|c| {
		*c.borrow_mut() = Some(config.clone());
	});
}

/// Get the current config for the thread
pub fn with_thread_config<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&Config) -> R,
{
	CURRENT_CONFIG.with(|c| (*c.borrow()).as_ref().map(f))
}

/// Info logging macro with automatic cyan coloring
/// Shows info messages when log level is Info OR Debug
#[macro_export]
macro_rules! log_info {
	($fmt:expr) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_info_enabled()) {
		if should_log {
		use colored::Colorize;
		println!("{}", $fmt.cyan());
		}
		}
	};
	($fmt:expr, $($arg:expr),*) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_info_enabled()) {
		if should_log {
		use colored::Colorize;
	println!("{}", format!($fmt, $($arg),*).cyan());
	}
	}
	};
}

/// Debug logging macro with automatic bright blue coloring
#[macro_export]
macro_rules! log_debug {
	($fmt:expr) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_debug_enabled()) {
		if should_log {
		use colored::Colorize;
		println!("{}", $fmt.bright_blue());
		}
		}
	};
	($fmt:expr, $($arg:expr),*) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_debug_enabled()) {
		if should_log {
		use colored::Colorize;
	println!("{}", format!($fmt, $($arg),*).bright_blue());
	}
	}
	};
}

/// Error logging macro with automatic bright red coloring
/// Always visible regardless of log level (errors should always be shown)
#[macro_export]
macro_rules! log_error {
	($fmt:expr) => {{
		use colored::Colorize;
		eprintln!("{}", $fmt.bright_red());
		}};
	($fmt:expr, $($arg:expr),*) => {{
		use colored::Colorize;
		eprintln!("{}", format!($fmt, $($arg),*).bright_red());
		}};
}
