// User input handling module

use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config as RustylineConfig, EditMode, Editor};

use super::commands::EXIT_COMMAND;
use super::helper::CommandHelper;

/// Build the line editor with slash command completion. Created once per
/// session so the arrow-key history survives across prompts.
pub fn create_editor() -> Result<Editor<CommandHelper, DefaultHistory>> {
	// Configure rustyline
	let config = RustylineConfig::builder()
		.completion_type(CompletionType::List)
		.edit_mode(EditMode::Emacs)
		.auto_add_history(true) // Automatically add lines to history
		.bell_style(rustyline::config::BellStyle::None) // No bell
		.build();

	let mut editor = Editor::with_config(config)?;
	editor.set_helper(Some(CommandHelper::new()));

	Ok(editor)
}

// Read one line of user input; Ctrl+D maps to the exit command
pub fn read_user_input(editor: &mut Editor<CommandHelper, DefaultHistory>) -> Result<String> {
	let prompt = "> ".bright_blue().to_string();

	match editor.readline(&prompt) {
		Ok(line) => Ok(line),
		Err(ReadlineError::Interrupted) => {
			// Ctrl+C cancels the current line
			println!("\nCancelled");
			Ok(String::new())
		}
		Err(ReadlineError::Eof) => {
			// Ctrl+D
			println!("\nExiting session.");
			Ok(EXIT_COMMAND.to_string())
		}
		Err(err) => {
			println!("Error: {:?}", err);
			Ok(String::new())
		}
	}
}
