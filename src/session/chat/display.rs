// Transcript rendering for the terminal

use crate::session::preferences::Preferences;
use crate::session::{Author, TranscriptEntry};
use chrono::{DateTime, Utc};
use colored::*;

/// Print one transcript entry the way the live chat renders it
pub fn print_entry(entry: &TranscriptEntry) {
	match entry.author {
		Author::User => {
			println!("> {}", entry.text.bright_blue());
		}
		Author::Bot if entry.is_error => {
			println!("{}", entry.text.bright_red());
		}
		Author::Bot => {
			println!("{}", entry.text.bright_green());
			print_name_sections(entry);
		}
	}
}

// Numbered suggestion sections. Numbering runs on across both sections
// so /copy, /check and /github address any name with a single number.
fn print_name_sections(entry: &TranscriptEntry) {
	if !entry.meaningful_names.is_empty() {
		println!();
		println!("{}", "💡 Meaningful Names".bright_yellow());
		println!("{}", "Based on your concepts and domain".bright_black());
		for (idx, name) in entry.meaningful_names.iter().enumerate() {
			println!("  {}. {}", idx + 1, name.bright_white());
		}
	}

	if !entry.creative_names.is_empty() {
		println!();
		println!("{}", "✨ Creative Names".bright_yellow());
		let offset = entry.meaningful_names.len();
		for (idx, name) in entry.creative_names.iter().enumerate() {
			println!("  {}. {}", offset + idx + 1, name.bright_white());
		}
	}

	if !entry.concepts.is_empty() {
		println!();
		println!(
			"{}",
			format!("💡 Key concepts: {}", entry.concepts.join(", ")).cyan()
		);
	}

	if entry.has_names() {
		println!();
		println!(
			"{}",
			"Use /copy [number], /check <number> or /github <number> on any name above.".bright_black()
		);
	}
}

/// Print the bot entries appended after the given transcript index
pub fn print_new_bot_entries(transcript: &[TranscriptEntry], from: usize) {
	for entry in &transcript[from.min(transcript.len())..] {
		if entry.author == Author::Bot {
			print_entry(entry);
		}
	}
}

// Format entry timestamp for the replay
fn entry_time(entry: &TranscriptEntry) -> String {
	DateTime::<Utc>::from_timestamp(entry.timestamp as i64, 0)
		.map(|dt| dt.naive_local().format("%H:%M:%S").to_string())
		.unwrap_or_default()
}

/// Replay the whole transcript from the beginning, with the time each
/// entry was appended
pub fn print_transcript(transcript: &[TranscriptEntry]) {
	println!("{}", "───────────── Transcript ─────────────".bright_cyan());
	for entry in transcript {
		println!("{}", format!("[{}]", entry_time(entry)).bright_black());
		print_entry(entry);
	}
	println!("{}", "──────────────────────────────────────".bright_cyan());
}

/// Show the current generation preferences
pub fn print_preferences(prefs: &Preferences) {
	println!("{}", "───────────── Preferences ─────────────".bright_cyan());
	println!(
		"{} {} ({})",
		"Purpose:".yellow(),
		prefs.purpose.label().bright_white(),
		prefs.purpose
	);
	println!("{} {}", "Tone:".yellow(), prefs.tone.to_string().bright_white());
	println!(
		"{} {}",
		"Domains:".yellow(),
		prefs.domain_summary().bright_white()
	);

	match &prefs.project_description {
		Some(text) => println!(
			"{} {}",
			"Project description:".yellow(),
			text.bright_white()
		),
		None => println!(
			"{} {}",
			"Project description:".yellow(),
			"(not set)".bright_black()
		),
	}
	match &prefs.custom_prompt {
		Some(text) => println!("{} {}", "Custom prompt:".yellow(), text.bright_white()),
		None => println!("{} {}", "Custom prompt:".yellow(), "(not set)".bright_black()),
	}
	println!();
}
