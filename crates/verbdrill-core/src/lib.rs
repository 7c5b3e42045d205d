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

//! verbdrill-core: Core library for the verbdrill conjugation trainer.
//!
//! This library provides the I/O-free pieces of the trainer:
//! - Parsing the line-oriented question format (with TOML frontmatter)
//! - The quiz session state machine (sampling, progression, scoring)
//! - A seedable RNG for pool sampling

pub mod error;
pub mod question;
pub mod quiz;
pub mod rng;

// Re-exports for convenience
pub use error::{Fallible, QuizError, fail};
pub use question::{
    MalformedLine, MalformedReason, ParsedQuestions, Question, SourceMetadata,
    extract_frontmatter, parse_questions,
};
pub use quiz::QuizSession;
pub use rng::{TinyRng, sample, shuffle};
