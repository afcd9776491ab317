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

// Health command handler

use crate::log_debug;
use crate::session::controller::ChatSession;
use anyhow::Result;
use colored::Colorize;

pub async fn handle_health(session: &ChatSession) -> Result<bool> {
	match session.client().health().await {
		Ok(status) => {
			println!(
				"{}",
				format!("Backend is {} at {}", status.status, session.endpoint()).bright_green()
			);
			if let Some(service) = status.service {
				println!("{}", format!("Service: {}", service).bright_cyan());
			}
		}
		Err(err) => {
			log_debug!("Health check failed: {:#}", err);
			println!(
				"{}",
				format!("Backend unreachable at {}", session.endpoint()).bright_red()
			);
			println!("{}", "Start the server and try again.".yellow());
		}
	}

	Ok(false)
}
