// Chat commands module

// Chat commands
pub const HELP_COMMAND: &str = "/help";
pub const EXIT_COMMAND: &str = "/exit";
pub const QUIT_COMMAND: &str = "/quit";
pub const CLEAR_COMMAND: &str = "/clear";
pub const COPY_COMMAND: &str = "/copy";
pub const CHECK_COMMAND: &str = "/check";
pub const GITHUB_COMMAND: &str = "/github";
pub const GENERATE_COMMAND: &str = "/generate";
pub const COOL_COMMAND: &str = "/cool";
pub const PROFESSIONAL_COMMAND: &str = "/professional";
pub const FUNNY_COMMAND: &str = "/funny";
pub const REGENERATE_COMMAND: &str = "/regenerate";
pub const PURPOSE_COMMAND: &str = "/purpose";
pub const TONE_COMMAND: &str = "/tone";
pub const DOMAIN_COMMAND: &str = "/domain";
pub const DOMAINS_COMMAND: &str = "/domains";
pub const DESCRIBE_COMMAND: &str = "/describe";
pub const PROMPT_COMMAND: &str = "/prompt";
pub const PREFS_COMMAND: &str = "/prefs";
pub const HEALTH_COMMAND: &str = "/health";
pub const TRANSCRIPT_COMMAND: &str = "/transcript";
pub const INFO_COMMAND: &str = "/info";
pub const LOGLEVEL_COMMAND: &str = "/loglevel";

// List of all available commands for autocomplete
pub const COMMANDS: [&str; 23] = [
	HELP_COMMAND,
	EXIT_COMMAND,
	QUIT_COMMAND,
	CLEAR_COMMAND,
	COPY_COMMAND,
	CHECK_COMMAND,
	GITHUB_COMMAND,
	GENERATE_COMMAND,
	COOL_COMMAND,
	PROFESSIONAL_COMMAND,
	FUNNY_COMMAND,
	REGENERATE_COMMAND,
	PURPOSE_COMMAND,
	TONE_COMMAND,
	DOMAIN_COMMAND,
	DOMAINS_COMMAND,
	DESCRIBE_COMMAND,
	PROMPT_COMMAND,
	PREFS_COMMAND,
	HEALTH_COMMAND,
	TRANSCRIPT_COMMAND,
	INFO_COMMAND,
	LOGLEVEL_COMMAND,
];
