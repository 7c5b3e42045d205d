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

use axum::extract::State;
use axum::response::Html;

use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::template::render_page;

pub async fn get_handler(State(state): State<ServerState>) -> Html<String> {
    let mutable = state.mutable.lock().unwrap();
    Html(render_page(&state, &mutable).into_string())
}
