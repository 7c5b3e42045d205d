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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::QuizError;

/// The field delimiter of the question line format. Fields cannot contain a
/// literal `;`: there is no escaping mechanism.
pub const FIELD_SEPARATOR: char = ';';

/// A single translate-and-conjugate prompt.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Question {
    english_sentence: String,
    german_verb: String,
    german_answer: String,
}

impl Question {
    pub fn new(
        english_sentence: impl Into<String>,
        german_verb: impl Into<String>,
        german_answer: impl Into<String>,
    ) -> Self {
        Question {
            english_sentence: english_sentence.into(),
            german_verb: german_verb.into(),
            german_answer: german_answer.into(),
        }
    }

    /// The placeholder question substituted when a source cannot be read, so
    /// that downstream code always has at least one question to render.
    pub fn missing_source(path: &str) -> Self {
        Question {
            english_sentence: "The question file could not be read".to_string(),
            german_verb: "fehlen".to_string(),
            german_answer: format!("Die Datei '{path}' fehlt"),
        }
    }

    pub fn english_sentence(&self) -> &str {
        &self.english_sentence
    }

    pub fn german_verb(&self) -> &str {
        &self.german_verb
    }

    pub fn german_answer(&self) -> &str {
        &self.german_answer
    }
}

/// Metadata that can be specified in TOML frontmatter at the top of a
/// question file.
#[derive(Debug, Deserialize)]
pub struct SourceMetadata {
    pub title: Option<String>,
}

/// Extract TOML frontmatter (delimited by `---` lines) from a question file.
/// Returns the metadata, if any, and the text after the frontmatter block.
pub fn extract_frontmatter(text: &str) -> Fallible<(Option<SourceMetadata>, &str)> {
    match text.lines().next() {
        Some(line) if line.trim() == "---" => {}
        _ => return Ok((None, text)),
    }

    let Some(first_line_end) = text.find('\n') else {
        return Err(QuizError::parse(
            "frontmatter opening '---' found but no closing '---'",
        ));
    };
    let body = &text[first_line_end + 1..];

    let mut offset = 0;
    let mut close = None;
    for line in body.split_inclusive('\n') {
        if line.trim() == "---" {
            close = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }
    let Some((frontmatter_end, content_start)) = close else {
        return Err(QuizError::parse(
            "frontmatter opening '---' found but no closing '---'",
        ));
    };

    let metadata: SourceMetadata = toml::from_str(&body[..frontmatter_end])
        .map_err(|e| QuizError::parse(format!("invalid frontmatter: {e}")))?;
    Ok((Some(metadata), &body[content_start..]))
}

/// Why a line was skipped during parsing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum MalformedReason {
    /// The line did not split into exactly three `;`-separated fields.
    WrongFieldCount(usize),
    /// A field was empty after trimming.
    EmptyField,
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::WrongFieldCount(n) => {
                write!(f, "expected 3 fields separated by ';', found {n}")
            }
            MalformedReason::EmptyField => write!(f, "a field is empty"),
        }
    }
}

/// A line that could not be parsed into a question.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MalformedLine {
    /// 1-based line number in the source.
    pub line_num: usize,
    pub text: String,
    pub reason: MalformedReason,
}

/// The result of parsing a question source: the questions in source order,
/// plus a record of every line that was skipped.
#[derive(Debug, Default)]
pub struct ParsedQuestions {
    pub questions: Vec<Question>,
    pub malformed: Vec<MalformedLine>,
}

/// Parse the line-oriented question format: one question per line,
/// `english;german_verb;german_answer`, with blank lines and `#`-prefixed
/// comment lines ignored. Malformed lines are recorded, not fatal.
pub fn parse_questions(text: &str) -> ParsedQuestions {
    let mut parsed = ParsedQuestions::default();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        let line_num = idx + 1;
        if fields.len() != 3 {
            parsed.malformed.push(MalformedLine {
                line_num,
                text: line.to_string(),
                reason: MalformedReason::WrongFieldCount(fields.len()),
            });
            continue;
        }
        if fields.iter().any(|field| field.is_empty()) {
            parsed.malformed.push(MalformedLine {
                line_num,
                text: line.to_string(),
                reason: MalformedReason::EmptyField,
            });
            continue;
        }
        parsed
            .questions
            .push(Question::new(fields[0], fields[1], fields[2]));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_empty_string() {
        let parsed = parse_questions("");
        assert!(parsed.questions.is_empty());
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let parsed = parse_questions("\n\n# a comment\n   \n");
        assert!(parsed.questions.is_empty());
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_single_question_trimmed() {
        let parsed = parse_questions("  I eat ; essen ; Ich esse  \n");
        assert_eq!(parsed.questions.len(), 1);
        let q = &parsed.questions[0];
        assert_eq!(q.english_sentence(), "I eat");
        assert_eq!(q.german_verb(), "essen");
        assert_eq!(q.german_answer(), "Ich esse");
    }

    #[test]
    fn test_round_trip_with_noise() {
        let input = "I eat;essen;Ich esse\n#comment\n\n";
        let parsed = parse_questions(input);
        assert_eq!(parsed.questions.len(), 1);
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_source_order_preserved() {
        let input = "I eat;essen;Ich esse\nWe go;gehen;Wir gehen\n";
        let parsed = parse_questions(input);
        assert_eq!(parsed.questions[0].german_verb(), "essen");
        assert_eq!(parsed.questions[1].german_verb(), "gehen");
    }

    #[test]
    fn test_malformed_line_skipped() {
        let input = "a;b\nWe go;gehen;Wir gehen\n";
        let parsed = parse_questions(input);
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.questions[0].german_verb(), "gehen");
        assert_eq!(
            parsed.malformed,
            vec![MalformedLine {
                line_num: 1,
                text: "a;b".to_string(),
                reason: MalformedReason::WrongFieldCount(2),
            }]
        );
    }

    #[test]
    fn test_too_many_fields() {
        let parsed = parse_questions("a;b;c;d\n");
        assert_eq!(
            parsed.malformed[0].reason,
            MalformedReason::WrongFieldCount(4)
        );
    }

    #[test]
    fn test_empty_field_is_malformed() {
        let parsed = parse_questions("I eat; ;Ich esse\n");
        assert!(parsed.questions.is_empty());
        assert_eq!(parsed.malformed[0].reason, MalformedReason::EmptyField);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let input = "# header\nI eat;essen;Ich esse\nbroken\n";
        let parsed = parse_questions(input);
        assert_eq!(parsed.malformed[0].line_num, 3);
    }

    #[test]
    fn test_no_frontmatter() -> Fallible<()> {
        let input = "I eat;essen;Ich esse\n";
        let (metadata, content) = extract_frontmatter(input)?;
        assert!(metadata.is_none());
        assert_eq!(content, input);
        Ok(())
    }

    #[test]
    fn test_frontmatter_title() -> Fallible<()> {
        let input = "---\ntitle = \"Week 3 verbs\"\n---\nI eat;essen;Ich esse\n";
        let (metadata, content) = extract_frontmatter(input)?;
        assert_eq!(metadata.unwrap().title.as_deref(), Some("Week 3 verbs"));
        assert_eq!(content, "I eat;essen;Ich esse\n");
        Ok(())
    }

    #[test]
    fn test_frontmatter_without_title() -> Fallible<()> {
        let input = "---\n---\nI eat;essen;Ich esse\n";
        let (metadata, content) = extract_frontmatter(input)?;
        assert!(metadata.unwrap().title.is_none());
        assert_eq!(content, "I eat;essen;Ich esse\n");
        Ok(())
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let input = "---\ntitle = \"nope\"\n";
        assert!(extract_frontmatter(input).is_err());
    }

    #[test]
    fn test_invalid_frontmatter_toml() {
        let input = "---\ntitle =\n---\n";
        assert!(extract_frontmatter(input).is_err());
    }

    #[test]
    fn test_sentinel_names_the_missing_file() {
        let q = Question::missing_source("questions.txt");
        assert!(q.german_answer().contains("questions.txt"));
        assert!(q.german_answer().contains("fehlt"));
    }
}
