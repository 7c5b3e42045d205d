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

use verbdrill_core::question::Question;
use verbdrill_core::question::extract_frontmatter;
use verbdrill_core::question::parse_questions;

/// The default question source.
pub const DEFAULT_QUESTIONS_FILE: &str = "questions.txt";

/// A question source after loading: the frontmatter title, if any, and the
/// questions in source order.
pub struct LoadedSource {
    pub title: Option<String>,
    pub questions: Vec<Question>,
}

/// Load a question source from disk.
///
/// This never fails the caller: an unreadable file yields a single sentinel
/// question, broken frontmatter is downgraded to a warning, and malformed
/// lines are logged and skipped. A readable file with zero valid lines
/// yields an empty set; the caller decides what that means.
pub fn load_source(path: &str) -> LoadedSource {
    let text = match read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("could not read question file '{path}': {e}");
            return LoadedSource {
                title: None,
                questions: vec![Question::missing_source(path)],
            };
        }
    };

    let (title, content) = match extract_frontmatter(&text) {
        Ok((metadata, content)) => (metadata.and_then(|m| m.title), content),
        Err(e) => {
            log::warn!("'{path}': {e}; parsing the whole file as question lines");
            (None, text.as_str())
        }
    };

    let parsed = parse_questions(content);
    for line in &parsed.malformed {
        log::warn!(
            "'{path}' line {}: skipping malformed line ({}): {}",
            line.line_num,
            line.reason,
            line.text
        );
    }
    LoadedSource {
        title,
        questions: parsed.questions,
    }
}
