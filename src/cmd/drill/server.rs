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
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::select;
use tokio::signal;
use tokio::sync::oneshot::Receiver;
use tokio::sync::oneshot::channel;
use verbdrill_core::error::Fallible;
use verbdrill_core::error::fail;
use verbdrill_core::rng::TinyRng;

use crate::cheatsheet::DEFAULT_CHEAT_SHEET_FILE;
use crate::cheatsheet::load_cheat_sheet;
use crate::cmd::drill::get::get_handler;
use crate::cmd::drill::post::post_handler;
use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::store::DEFAULT_QUESTIONS_FILE;
use crate::store::load_source;

/// The setup screen offers at most this many questions by default.
const DEFAULT_SESSION_SIZE: usize = 20;

pub struct ServerConfig {
    /// Path to the question file. Defaults to `questions.txt`.
    pub file: Option<String>,
    pub host: String,
    pub port: u16,
    /// Pre-filled question count on the setup screen.
    pub default_count: Option<usize>,
    /// Path to the pronoun cheat sheet. Defaults to `pronouns.txt`.
    pub cheat_sheet: Option<String>,
    /// Fixed RNG seed; `None` seeds from the clock. Tests pin this down.
    pub seed: Option<u64>,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let path = config
        .file
        .unwrap_or_else(|| DEFAULT_QUESTIONS_FILE.to_string());
    let source = load_source(&path);
    if source.questions.is_empty() {
        println!("No questions found in '{path}'.");
        return Ok(());
    }

    let cheat_sheet_path = config
        .cheat_sheet
        .unwrap_or_else(|| DEFAULT_CHEAT_SHEET_FILE.to_string());
    let cheat_sheet = load_cheat_sheet(&cheat_sheet_path);

    let seed = match config.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64,
    };
    let rng = TinyRng::from_seed(seed);

    let default_count = config
        .default_count
        .unwrap_or(DEFAULT_SESSION_SIZE)
        .clamp(1, source.questions.len());

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = channel();

    let state = ServerState {
        title: source.title,
        default_count,
        cheat_sheet,
        mutable: Arc::new(Mutex::new(MutableState {
            all_questions: source.questions,
            session: None,
            feedback: None,
            rng,
            quiz_started_at: None,
            finished_at: None,
        })),
        shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
    };

    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state.clone());
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C or the End button.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    // The exit code reflects whether the quiz ran to completion.
    let mutable = state.mutable.lock().unwrap();
    match &mutable.session {
        None => Ok(()),
        Some(session) if session.is_finished() => Ok(()),
        Some(_) => fail("Session interrupted before completion"),
    }
}

async fn style_handler() -> (StatusCode, [(HeaderName, &'static str); 1], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (StatusCode::OK, [(CONTENT_TYPE, "text/css")], bytes)
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}

async fn shutdown_signal(shutdown_rx: Receiver<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let shutdown = async {
        shutdown_rx.await.ok();
    };

    select! {
        _ = ctrl_c => {
            log::debug!("Received Ctrl+C, shutting down gracefully");
        },
        _ = shutdown => {
            log::debug!("Received shutdown signal, shutting down gracefully");
        },
    }
}
