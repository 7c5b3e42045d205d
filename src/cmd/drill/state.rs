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

use std::sync::Arc;
use std::sync::Mutex;

use chrono::DateTime;
use chrono::Local;
use tokio::sync::oneshot::Sender;
use verbdrill_core::question::Question;
use verbdrill_core::quiz::QuizSession;
use verbdrill_core::rng::TinyRng;

use crate::cheatsheet::PronounHint;

/// Immutable server-wide state plus the mutable quiz state behind a mutex.
/// One user at a time: the mutex serializes interaction turns, the UI itself
/// disables the answer form while feedback is pending.
#[derive(Clone)]
pub struct ServerState {
    pub title: Option<String>,
    pub default_count: usize,
    pub cheat_sheet: Vec<PronounHint>,
    pub mutable: Arc<Mutex<MutableState>>,
    pub shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}

pub struct MutableState {
    /// The full question set, loaded once at startup and reused for every
    /// restart.
    pub all_questions: Vec<Question>,
    /// The running quiz, or `None` while on the setup screen.
    pub session: Option<QuizSession>,
    /// Outcome of the last answer check, cleared on advance.
    pub feedback: Option<Feedback>,
    pub rng: TinyRng,
    pub quiz_started_at: Option<DateTime<Local>>,
    pub finished_at: Option<DateTime<Local>>,
}

pub struct Feedback {
    pub correct: bool,
    /// The reference answer, revealed when the user got it wrong.
    pub expected: String,
}
