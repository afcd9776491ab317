pub mod chat;
pub mod config;
pub mod generate;

// Re-export all the command structs
pub use chat::ChatArgs;
pub use config::ConfigArgs;
pub use generate::GenerateArgs;

use anyhow::Result;
use braion::session::preferences::{Preferences, Purpose, Tone};

// Apply --purpose/--tone/--domain overrides on top of the config defaults
pub(crate) fn apply_preference_flags(
	preferences: &mut Preferences,
	purpose: &Option<String>,
	tone: &Option<String>,
	domains: &[String],
) -> Result<()> {
	if let Some(purpose) = purpose {
		preferences.purpose = Purpose::parse(purpose).ok_or_else(|| {
			anyhow::anyhow!(
				"Invalid purpose: {}. Use hackathon, startup, club, research or competition.",
				purpose
			)
		})?;
	}
	if let Some(tone) = tone {
		preferences.tone = Tone::parse(tone).ok_or_else(|| {
			anyhow::anyhow!(
				"Invalid tone: {}. Use professional, cool, funny, aggressive or minimal.",
				tone
			)
		})?;
	}
	for tag in domains {
		preferences.toggle_domain(tag);
	}
	Ok(())
}
