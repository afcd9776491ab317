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

// External lookup links for suggested names

use anyhow::{Context, Result};
use std::process::Command;
use url::Url;

const DOMAIN_LOOKUP_BASE: &str = "https://www.namecheap.com/domains/registration/results/?domain=";
const REPO_LOOKUP_BASE: &str = "https://github.com/";

/// Domain availability page for a name: lower-cased, whitespace removed.
/// "Cloud Nine" becomes a lookup for "cloudnine".
pub fn domain_lookup_url(name: &str) -> Result<Url> {
	let clean: String = name.to_lowercase().split_whitespace().collect();
	Url::parse(&format!("{}{}", DOMAIN_LOOKUP_BASE, clean))
		.context(format!("Invalid domain lookup URL for name: {}", name))
}

/// GitHub page for a name: lower-cased, whitespace collapsed to hyphens.
/// "Cloud Nine" becomes "cloud-nine".
pub fn repo_lookup_url(name: &str) -> Result<Url> {
	let clean = name
		.to_lowercase()
		.split_whitespace()
		.collect::<Vec<_>>()
		.join("-");
	Url::parse(&format!("{}{}", REPO_LOOKUP_BASE, clean))
		.context(format!("Invalid repository lookup URL for name: {}", name))
}

/// Hand a URL to the platform opener. Fire-and-forget: the spawned
/// process is not waited on. Only http and https schemes are allowed.
pub fn open_in_browser(url: &Url) -> Result<()> {
	if url.scheme() != "http" && url.scheme() != "https" {
		return Err(anyhow::anyhow!("Refusing to open non-http URL: {}", url));
	}

	#[cfg(target_os = "macos")]
	Command::new("open")
		.arg(url.as_str())
		.spawn()
		.context("Failed to launch the default browser")?;

	#[cfg(target_os = "windows")]
	Command::new("cmd")
		.args(["/C", "start", "", url.as_str()])
		.spawn()
		.context("Failed to launch the default browser")?;

	#[cfg(all(unix, not(target_os = "macos")))]
	Command::new("xdg-open")
		.arg(url.as_str())
		.spawn()
		.context("Failed to launch the default browser")?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_domain_lookup_strips_spaces() {
		let url = domain_lookup_url("Cloud Nine").unwrap();
		assert_eq!(
			url.as_str(),
			"https://www.namecheap.com/domains/registration/results/?domain=cloudnine"
		);
	}

	#[test]
	fn test_domain_lookup_lowercases() {
		let url = domain_lookup_url("NeuraCore").unwrap();
		assert!(url.as_str().ends_with("?domain=neuracore"));
	}

	#[test]
	fn test_repo_lookup_hyphenates_spaces() {
		let url = repo_lookup_url("Cloud Nine").unwrap();
		assert_eq!(url.as_str(), "https://github.com/cloud-nine");
	}

	#[test]
	fn test_repo_lookup_collapses_whitespace_runs() {
		let url = repo_lookup_url("  Deep   Mind  ").unwrap();
		assert_eq!(url.as_str(), "https://github.com/deep-mind");
	}

	#[test]
	fn test_open_rejects_non_http_schemes() {
		let url = Url::parse("file:///etc/passwd").unwrap();
		assert!(open_in_browser(&url).is_err());
	}
}
