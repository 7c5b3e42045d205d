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

use std::time::Duration;

use chrono::TimeDelta;
use tokio::net::TcpStream;
use tokio::time::sleep;

use verbdrill_core::error::Fallible;

pub async fn wait_for_server(host: &str, port: u16) -> Fallible<()> {
    loop {
        if let Ok(stream) = TcpStream::connect(format!("{host}:{port}")).await {
            drop(stream);
            break;
        }
        sleep(Duration::from_millis(1)).await;
    }
    Ok(())
}

/// Format an elapsed time for the summary screen, e.g. "4m 07s".
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let seconds = elapsed.num_seconds().max(0);
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_seconds_only() {
        assert_eq!(format_elapsed(TimeDelta::seconds(42)), "42s");
    }

    #[test]
    fn test_format_elapsed_with_minutes() {
        assert_eq!(format_elapsed(TimeDelta::seconds(247)), "4m 07s");
    }

    #[test]
    fn test_format_elapsed_negative_clamps_to_zero() {
        assert_eq!(format_elapsed(TimeDelta::seconds(-3)), "0s");
    }
}
