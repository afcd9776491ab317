mod commands;

use anyhow::Result;
use braion::config::Config;
use clap::{Parser, Subcommand};
use commands::{ChatArgs, ConfigArgs, GenerateArgs};

#[derive(Parser)]
#[command(name = "braion")]
#[command(version = "0.1.0")]
#[command(about = "Braion suggests team and project names through a chat interface")]
struct BraionArgs {
	#[command(subcommand)]
	command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
	/// Start an interactive chat session (the default)
	Chat(ChatArgs),

	/// Generate names once and exit
	Generate(GenerateArgs),

	/// Generate a default configuration file or update settings
	Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
	let args = BraionArgs::parse();

	// Load configuration
	let config = Config::load()?;

	// Running without a subcommand drops straight into the chat
	match &args.command {
		Some(Commands::Chat(chat_args)) => commands::chat::execute(chat_args, config).await,
		Some(Commands::Generate(generate_args)) => {
			commands::generate::execute(generate_args, config).await
		}
		Some(Commands::Config(config_args)) => commands::config::execute(config_args, config),
		None => commands::chat::execute(&ChatArgs::default(), config).await,
	}
}
