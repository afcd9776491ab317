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

// Preference command handlers

use super::super::display;
use crate::session::controller::ChatSession;
use crate::session::preferences::{Purpose, Tone, KNOWN_DOMAINS};
use anyhow::Result;
use colored::Colorize;

pub fn handle_purpose(session: &mut ChatSession, params: &[&str]) -> Result<bool> {
	if params.is_empty() {
		let current = session.preferences().purpose;
		println!(
			"{}",
			format!("Current purpose: {} ({})", current, current.label()).bright_cyan()
		);
		let values: Vec<&str> = Purpose::ALL.iter().map(|p| p.as_str()).collect();
		println!(
			"{}",
			format!("Available purposes: {}", values.join(", ")).bright_yellow()
		);
		return Ok(false);
	}

	match Purpose::parse(params[0]) {
		Some(purpose) => {
			session.preferences_mut().purpose = purpose;
			println!(
				"{}",
				format!("Purpose set to {} ({}).", purpose, purpose.label()).bright_green()
			);
		}
		None => {
			let values: Vec<&str> = Purpose::ALL.iter().map(|p| p.as_str()).collect();
			println!(
				"{}",
				format!("Invalid purpose. Use one of: {}", values.join(", ")).bright_red()
			);
		}
	}

	Ok(false)
}

pub fn handle_tone(session: &mut ChatSession, params: &[&str]) -> Result<bool> {
	if params.is_empty() {
		println!(
			"{}",
			format!("Current tone: {}", session.preferences().tone).bright_cyan()
		);
		let values: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
		println!(
			"{}",
			format!("Available tones: {}", values.join(", ")).bright_yellow()
		);
		return Ok(false);
	}

	match Tone::parse(params[0]) {
		Some(tone) => {
			session.preferences_mut().tone = tone;
			println!("{}", format!("Tone set to {}.", tone).bright_green());
		}
		None => {
			let values: Vec<&str> = Tone::ALL.iter().map(|t| t.as_str()).collect();
			println!(
				"{}",
				format!("Invalid tone. Use one of: {}", values.join(", ")).bright_red()
			);
		}
	}

	Ok(false)
}

/// Toggle a domain tag; multi-word tags like "Cloud Computing" work
pub fn handle_domain(session: &mut ChatSession, params: &[&str]) -> Result<bool> {
	if params.is_empty() {
		println!("{}", "Usage: /domain <tag>".bright_yellow());
		println!(
			"{}",
			format!("Common tags: {}", KNOWN_DOMAINS.join(", ")).bright_yellow()
		);
		return Ok(false);
	}

	let tag = params.join(" ");
	let selected = session.preferences_mut().toggle_domain(&tag);
	if selected {
		println!("{}", format!("Domain \"{}\" selected.", tag).bright_green());
	} else {
		println!("{}", format!("Domain \"{}\" removed.", tag).bright_yellow());
	}
	println!(
		"{}",
		format!("Domains now: {}", session.preferences().domain_summary()).bright_cyan()
	);

	Ok(false)
}

pub fn handle_domains(session: &ChatSession) -> Result<bool> {
	let prefs = session.preferences();

	println!("{}", "Domain tags (✓ = selected):".bright_cyan());
	for tag in KNOWN_DOMAINS {
		if prefs.has_domain(tag) {
			println!("  {} {}", "✓".bright_green(), tag.bright_white());
		} else {
			println!("    {}", tag);
		}
	}

	// Tags toggled by hand that are not in the built-in list
	let custom: Vec<&str> = prefs
		.domains
		.iter()
		.map(String::as_str)
		.filter(|tag| !KNOWN_DOMAINS.contains(tag))
		.collect();
	if !custom.is_empty() {
		println!("{}", "Custom tags:".bright_cyan());
		for tag in custom {
			println!("  {} {}", "✓".bright_green(), tag.bright_white());
		}
	}

	Ok(false)
}

pub fn handle_describe(session: &mut ChatSession, params: &[&str]) -> Result<bool> {
	if params.is_empty() {
		session.preferences_mut().project_description = None;
		println!("{}", "Project description cleared.".bright_yellow());
	} else {
		let text = params.join(" ");
		println!("{}", format!("Project description set: {}", text).bright_green());
		session.preferences_mut().project_description = Some(text);
	}

	Ok(false)
}

pub fn handle_prompt(session: &mut ChatSession, params: &[&str]) -> Result<bool> {
	if params.is_empty() {
		session.preferences_mut().custom_prompt = None;
		println!("{}", "Custom prompt cleared.".bright_yellow());
	} else {
		let text = params.join(" ");
		println!("{}", format!("Custom prompt set: {}", text).bright_green());
		session.preferences_mut().custom_prompt = Some(text);
	}

	Ok(false)
}

pub fn handle_prefs(session: &ChatSession) -> Result<bool> {
	display::print_preferences(session.preferences());
	Ok(false)
}
