// Copyright 2025 Fernando Borretti
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

use std::fs::read_to_string;

/// The default pronoun cheat sheet.
pub const DEFAULT_CHEAT_SHEET_FILE: &str = "pronouns.txt";

/// One row of the pronoun cheat sheet shown next to the quiz:
/// `english;german_pronoun;present_tense_ending`.
#[derive(Clone, Debug, PartialEq)]
pub struct PronounHint {
    pub english: String,
    pub german: String,
    pub ending: String,
}

/// Load the cheat sheet. A missing file just disables the popover; malformed
/// lines are skipped. Same blank-line and `#`-comment conventions as the
/// question format.
pub fn load_cheat_sheet(path: &str) -> Vec<PronounHint> {
    let text = match read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("no cheat sheet at '{path}': {e}");
            return Vec::new();
        }
    };
    let mut hints = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        match fields.as_slice() {
            [english, german, ending] => hints.push(PronounHint {
                english: (*english).to_string(),
                german: (*german).to_string(),
                ending: (*ending).to_string(),
            }),
            _ => log::warn!("'{path}' line {}: skipping malformed cheat sheet line", idx + 1),
        }
    }
    hints
}
