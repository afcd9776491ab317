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
use braion::config::{Config, LogLevel};
use clap::Args;

#[derive(Args, Debug)]
pub struct ConfigArgs {
	/// Set the backend endpoint, e.g. http://127.0.0.1:8000
	#[arg(long)]
	pub endpoint: Option<String>,

	/// Set the log level: none, info or debug
	#[arg(long)]
	pub log_level: Option<String>,
}

// Handle the configuration command
pub fn execute(args: &ConfigArgs, mut config: Config) -> Result<()> {
	let mut modified = false;

	// Update endpoint if specified
	if let Some(endpoint) = &args.endpoint {
		config.endpoint = endpoint.clone();
		println!("Set endpoint to {}", endpoint);
		modified = true;
	}

	// Update log level if specified
	if let Some(level) = &args.log_level {
		match level.to_lowercase().as_str() {
			"none" => config.log_level = LogLevel::None,
			"info" => config.log_level = LogLevel::Info,
			"debug" => config.log_level = LogLevel::Debug,
			_ => {
				println!("Unknown log level: {}", level);
				println!("Valid levels are 'none', 'info' or 'debug'.");
				return Ok(());
			}
		}
		println!("Set log level to {}", level.to_lowercase());
		modified = true;
	}

	// If no modifications were made, create a default config
	if !modified {
		let config_path = Config::create_default_config()?;
		println!(
			"Created default configuration file at: {}",
			config_path.display()
		);
	} else {
		// Save the updated configuration
		config.save()?;
		println!("Configuration saved successfully");
	}

	// Show current configuration
	println!("\nCurrent configuration:");
	println!("Endpoint: {}", config.endpoint);
	let level = match config.get_log_level() {
		LogLevel::None => "none",
		LogLevel::Info => "info",
		LogLevel::Debug => "debug",
	};
	println!("Log level: {}", level);
	println!("Default purpose: {}", config.preferences.purpose);
	println!("Default tone: {}", config.preferences.tone);
	println!("Default domains: {}", config.preferences.domain_summary());

	Ok(())
}
