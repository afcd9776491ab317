// Interactive session runner

use super::animation::show_loading_animation;
use super::commands::{EXIT_COMMAND, QUIT_COMMAND};
use super::display;
use super::handlers::process_command;
use super::input;
use crate::client::NameGenClient;
use crate::config::Config;
use crate::log_info;
use crate::session::controller::{ChatSession, QuickAction};
use anyhow::Result;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What kicked off a generation attempt
pub enum GenerationTrigger<'a> {
	/// A typed message; appends a user entry before the bot reply
	Message(&'a str),
	/// A quick action with its fixed instruction; bot reply only
	Action(QuickAction),
	/// Bare /generate; message falls back to draft or preferences
	Auto,
}

/// Run one generation attempt with the loading indicator spinning while
/// the session works, then print whatever the attempt appended
pub async fn run_generation(session: &mut ChatSession, trigger: GenerationTrigger<'_>) {
	let before = session.transcript().len();

	let cancel = Arc::new(AtomicBool::new(false));
	let animation_cancel = cancel.clone();
	let animation_task = tokio::spawn(async move {
		let _ = show_loading_animation(animation_cancel).await;
	});

	match trigger {
		GenerationTrigger::Message(text) => session.submit_user_message(text).await,
		GenerationTrigger::Action(action) => session.quick_action(action).await,
		GenerationTrigger::Auto => session.generate_names(None).await,
	}

	cancel.store(true, Ordering::SeqCst);
	let _ = animation_task.await;

	display::print_new_bot_entries(session.transcript(), before);
}

/// Run the interactive chat session until the user exits
pub async fn run_interactive_session(config: &Config) -> Result<()> {
	// Thread-local config feeds the logging macros
	crate::config::set_thread_config(config);

	let client = NameGenClient::new(&config.endpoint);
	let mut session = ChatSession::new(client, config.preferences.clone());

	// Runtime copy so /loglevel can adjust without touching the file
	let mut runtime_config = config.clone();

	println!("Braion chat session started. Describe your team to get name ideas.");
	println!("Type /help for available commands.");
	println!(
		"{}",
		"💡 Tip: Use ↑/↓ arrows for input history and Tab for command completion".bright_yellow()
	);
	println!();

	// Greeting seeded by the session
	display::print_new_bot_entries(session.transcript(), 0);

	// Probe the backend once so a missing server is visible before the
	// first generation attempt fails
	match session.client().health().await {
		Ok(status) => {
			log_info!("Backend reports \"{}\" at {}", status.status, session.endpoint());
		}
		Err(_) => {
			println!(
				"{}",
				format!(
					"⚠ Backend not reachable at {} yet. Start it, or generation will fail.",
					session.endpoint()
				)
				.yellow()
			);
		}
	}
	println!();

	let mut editor = input::create_editor()?;

	// Main interaction loop
	loop {
		let input = input::read_user_input(&mut editor)?;

		// Ctrl+D arrives as the exit command
		if input == EXIT_COMMAND || input == QUIT_COMMAND {
			println!("Ending session.");
			break;
		}

		// Empty input (e.g. after Ctrl+C) just re-prompts
		if input.trim().is_empty() {
			continue;
		}

		if input.starts_with('/') {
			let exit = process_command(&mut session, &input, &mut runtime_config).await?;
			if exit {
				break;
			}
			continue;
		}

		run_generation(&mut session, GenerationTrigger::Message(&input)).await;
	}

	Ok(())
}
