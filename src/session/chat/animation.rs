// Animation module for loading indicators

use anyhow::Result;
use colored::*;
use crossterm::{cursor, execute};
use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

// Animation frames for the loading indicator
const LOADING_FRAMES: [&str; 8] = [
	"⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧",
];

// Spin until the cancel flag is set, then wipe the indicator line
pub async fn show_loading_animation(cancel_flag: Arc<AtomicBool>) -> Result<()> {
	let mut stdout = stdout();
	let mut frame_idx = 0;
	let started = Instant::now();

	// Save cursor position so every frame redraws in place
	execute!(stdout, cursor::SavePosition)?;

	while !cancel_flag.load(Ordering::SeqCst) {
		execute!(stdout, cursor::RestorePosition)?;

		print!(
			" {} {} {}",
			LOADING_FRAMES[frame_idx].cyan(),
			"Generating names...".bright_blue(),
			format!("{}s", started.elapsed().as_secs()).bright_black()
		);

		stdout.flush()?;

		// Update frame index
		frame_idx = (frame_idx + 1) % LOADING_FRAMES.len();

		// Delay
		tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
	}

	// Clear the indicator completely before the reply is printed
	execute!(stdout, cursor::RestorePosition)?;
	print!("                                        ");
	execute!(stdout, cursor::RestorePosition)?;
	stdout.flush()?;

	Ok(())
}
