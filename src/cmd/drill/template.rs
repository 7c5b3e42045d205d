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

use maud::DOCTYPE;
use maud::Markup;
use maud::html;
use verbdrill_core::quiz::QuizSession;

use crate::cmd::drill::state::Feedback;
use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::utils::format_elapsed;

const DEFAULT_TITLE: &str = "German Verb Conjugation Practice";

pub fn page_template(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "verbdrill" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                (body)
            }
        }
    }
}

/// Render the page for the current state: setup screen, question screen, or
/// score summary.
pub fn render_page(state: &ServerState, mutable: &MutableState) -> Markup {
    let body = match &mutable.session {
        None => setup_page(state, mutable.all_questions.len()),
        Some(session) if session.is_finished() => summary_page(session, mutable),
        Some(session) => question_page(state, session, mutable.feedback.as_ref()),
    };
    page_template(body)
}

pub fn goodbye_page() -> Markup {
    page_template(html! {
        main {
            h2 { "Session ended." }
            p { "You can close this tab." }
        }
    })
}

fn heading(state: &ServerState) -> Markup {
    html! {
        h1 { (state.title.as_deref().unwrap_or(DEFAULT_TITLE)) }
    }
}

fn setup_page(state: &ServerState, available: usize) -> Markup {
    html! {
        main {
            (heading(state))
            (cheat_sheet_block(state))
            h2 { "Start a New Quiz" }
            form method="post" action="/" {
                label for="count" {
                    "How many questions would you like? (1 - " (available) ")"
                }
                input type="number" id="count" name="count"
                    min="1" max=(available) value=(state.default_count);
                button name="action" value="Start" { "Start Quiz" }
            }
        }
    }
}

fn question_page(
    state: &ServerState,
    session: &QuizSession,
    feedback: Option<&Feedback>,
) -> Markup {
    // The session is not finished here, so there is a current question.
    let question = session.current_question();
    html! {
        main {
            (heading(state))
            (cheat_sheet_block(state))
            @if let Some(question) = question {
                p class="progress" {
                    "Question " (session.position() + 1) " of " (session.total())
                }
                h2 { "Translate and conjugate the verb:" }
                p class="field-label" { "English Sentence:" }
                div class="prompt-box" {
                    p class="sentence" { (question.english_sentence()) }
                }
                p class="field-label" { "German Verb:" }
                div class="prompt-box" {
                    p class="verb" { (question.german_verb()) }
                }
                form method="post" action="/" {
                    input type="text" name="answer"
                        placeholder="Type the full German sentence..."
                        autocomplete="off"
                        autofocus[feedback.is_none()]
                        disabled[feedback.is_some()];
                    @if feedback.is_none() {
                        button name="action" value="Check" { "Check Answer" }
                    }
                }
                @if let Some(feedback) = feedback {
                    @if feedback.correct {
                        div class="feedback correct" { "Correct! Well done." }
                    } @else {
                        div class="feedback wrong" {
                            "Not quite. The correct answer is: "
                            code { (feedback.expected) }
                        }
                    }
                    form method="post" action="/" {
                        button name="action" value="Next" { "Next Question" }
                    }
                }
            }
            form class="end-form" method="post" action="/" {
                button class="quiet" name="action" value="End" { "End Session" }
            }
        }
    }
}

fn summary_page(session: &QuizSession, mutable: &MutableState) -> Markup {
    let (score, total) = session.score();
    let percentage = if total > 0 {
        score as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let elapsed = match (mutable.quiz_started_at, mutable.finished_at) {
        (Some(started), Some(finished)) => Some(finished - started),
        _ => None,
    };
    html! {
        main {
            h2 { "Quiz Complete!" }
            p class="score-label" { "Your Score" }
            p class="score-value" { (score) "/" (total) }
            p class="score-percent" { (format!("{percentage:.1}%")) }
            @if let Some(elapsed) = elapsed {
                p class="elapsed" { "Finished in " (format_elapsed(elapsed)) }
            }
            form method="post" action="/" {
                button name="action" value="Restart" { "Practice Again" }
                button class="quiet" name="action" value="End" { "End Session" }
            }
        }
    }
}

fn cheat_sheet_block(state: &ServerState) -> Markup {
    html! {
        @if !state.cheat_sheet.is_empty() {
            details class="cheatsheet" {
                summary { "Pronoun & Endings Cheat Sheet" }
                table {
                    thead {
                        tr {
                            th { "English" }
                            th { "German Pronoun" }
                            th { "Present Tense Ending" }
                        }
                    }
                    tbody {
                        @for hint in &state.cheat_sheet {
                            tr {
                                td { (hint.english) }
                                td { (hint.german) }
                                td { (hint.ending) }
                            }
                        }
                    }
                }
            }
        }
    }
}
