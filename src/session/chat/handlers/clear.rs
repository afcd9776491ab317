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

// Clear command handler

use anyhow::Result;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute};
use std::io::stdout;

// Clears the screen only; the transcript itself is untouched and can be
// replayed with /transcript
pub fn handle_clear() -> Result<bool> {
	execute!(stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
	Ok(false)
}
