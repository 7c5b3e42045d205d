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

use std::collections::HashMap;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fs::read_to_string;

use clap::ValueEnum;
use serde::Serialize;

use verbdrill_core::error::Fallible;
use verbdrill_core::error::QuizError;
use verbdrill_core::question::MalformedLine;
use verbdrill_core::question::Question;
use verbdrill_core::question::extract_frontmatter;
use verbdrill_core::question::parse_questions;

use crate::store::DEFAULT_QUESTIONS_FILE;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum CheckFormat {
    Text,
    Json,
}

impl Display for CheckFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckFormat::Text => write!(f, "text"),
            CheckFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct CheckReport {
    path: String,
    title: Option<String>,
    valid: usize,
    malformed: Vec<MalformedLine>,
    duplicates: Vec<Question>,
}

/// Lint a question file. Unlike the drill loader, this is strict: a missing
/// file or broken frontmatter is a hard error, and malformed lines fail the
/// command after being reported.
pub fn check_questions(file: Option<String>, format: CheckFormat) -> Fallible<()> {
    let path = file.unwrap_or_else(|| DEFAULT_QUESTIONS_FILE.to_string());
    let report = build_report(&path)?;
    match format {
        CheckFormat::Text => print_text(&report),
        CheckFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| QuizError::parse(format!("could not serialize report: {e}")))?;
            println!("{json}");
        }
    }
    if report.malformed.is_empty() {
        Ok(())
    } else {
        Err(QuizError::parse(format!(
            "{} malformed line(s) in '{path}'",
            report.malformed.len()
        )))
    }
}

fn build_report(path: &str) -> Fallible<CheckReport> {
    let text = read_to_string(path)?;
    let (metadata, content) = extract_frontmatter(&text)?;
    let parsed = parse_questions(content);

    // Identical question lines are almost always a copy-paste mistake.
    let mut counts: HashMap<&Question, usize> = HashMap::new();
    for question in &parsed.questions {
        *counts.entry(question).or_insert(0) += 1;
    }
    let mut duplicates = Vec::new();
    for question in &parsed.questions {
        if counts.get(question).copied().unwrap_or(0) > 1 && !duplicates.contains(question) {
            duplicates.push(question.clone());
        }
    }

    Ok(CheckReport {
        path: path.to_string(),
        title: metadata.and_then(|m| m.title),
        valid: parsed.questions.len(),
        malformed: parsed.malformed,
        duplicates,
    })
}

fn print_text(report: &CheckReport) {
    match &report.title {
        Some(title) => println!("{}: \"{}\", {} valid question(s)", report.path, title, report.valid),
        None => println!("{}: {} valid question(s)", report.path, report.valid),
    }
    for question in &report.duplicates {
        println!(
            "duplicate: {};{};{}",
            question.english_sentence(),
            question.german_verb(),
            question.german_answer()
        );
    }
    for line in &report.malformed {
        println!("line {}: {} ({})", line.line_num, line.text, line.reason);
    }
}
