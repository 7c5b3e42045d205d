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

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use chrono::Local;
use serde::Deserialize;
use verbdrill_core::quiz::QuizSession;

use crate::cmd::drill::state::Feedback;
use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::template::goodbye_page;
use crate::cmd::drill::template::render_page;

#[derive(Deserialize)]
pub struct ActionForm {
    action: String,
    #[serde(default)]
    answer: Option<String>,
    /// Kept as a string so that a cleared number input falls back to
    /// "use all questions" instead of failing extraction.
    #[serde(default)]
    count: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<ActionForm>,
) -> Html<String> {
    let mut mutable = state.mutable.lock().unwrap();
    match form.action.as_str() {
        "Start" => {
            let requested = form
                .count
                .as_deref()
                .and_then(|count| count.trim().parse::<usize>().ok());
            let questions = mutable.all_questions.clone();
            match QuizSession::new(questions, requested, &mut mutable.rng) {
                Ok(session) => {
                    mutable.session = Some(session);
                    mutable.feedback = None;
                    mutable.quiz_started_at = Some(Local::now());
                    mutable.finished_at = None;
                }
                Err(e) => log::error!("could not start quiz: {e}"),
            }
        }
        "Check" => {
            let answer = form.answer.unwrap_or_default();
            // An empty submission is ignored, not graded.
            if !answer.trim().is_empty() {
                if let Some(session) = mutable.session.as_mut() {
                    if !session.is_finished() {
                        let correct = session.check_answer(&answer);
                        let expected = session
                            .current_question()
                            .map(|q| q.german_answer().to_string())
                            .unwrap_or_default();
                        mutable.feedback = Some(Feedback { correct, expected });
                    }
                }
            }
        }
        "Next" => {
            if let Some(session) = mutable.session.as_mut() {
                session.advance();
                let finished = session.is_finished();
                mutable.feedback = None;
                if finished && mutable.finished_at.is_none() {
                    mutable.finished_at = Some(Local::now());
                }
            }
        }
        "Restart" => {
            mutable.session = None;
            mutable.feedback = None;
            mutable.quiz_started_at = None;
            mutable.finished_at = None;
        }
        "End" => {
            let shutdown_tx = state.shutdown_tx.lock().unwrap().take();
            if let Some(tx) = shutdown_tx {
                let _ = tx.send(());
            }
            return Html(goodbye_page().into_string());
        }
        other => log::warn!("ignoring unknown action '{other}'"),
    }
    Html(render_page(&state, &mutable).into_string())
}
