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

use std::process::exit;

use clap::Parser;
use tokio::spawn;
use verbdrill_core::error::Fallible;

use crate::cmd::check::CheckFormat;
use crate::cmd::check::check_questions;
use crate::cmd::drill::server::ServerConfig;
use crate::cmd::drill::server::start_server;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Practice verb conjugation through a web interface.
    Drill {
        /// Path to the question file. By default, 'questions.txt' is used.
        file: Option<String>,
        /// Default number of questions offered on the setup screen.
        #[arg(long)]
        count: Option<usize>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
        /// Path to the pronoun cheat sheet. By default, 'pronouns.txt' is used.
        #[arg(long)]
        cheat_sheet: Option<String>,
    },
    /// Check a question file for problems.
    Check {
        /// Path to the question file. By default, 'questions.txt' is used.
        file: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = CheckFormat::Text)]
        format: CheckFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            file,
            count,
            host,
            port,
            open_browser,
            cheat_sheet,
        } => {
            if open_browser.unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                file,
                host,
                port,
                default_count: count,
                cheat_sheet,
                seed: None,
            };
            start_server(config).await
        }
        Command::Check { file, format } => check_questions(file, format),
    }
}
