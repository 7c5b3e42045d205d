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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

#[derive(Debug, PartialEq)]
pub enum QuizError {
    /// A quiz was configured in a way that cannot produce a session, e.g.
    /// constructing one from an empty question set.
    InvalidConfiguration { message: String },
    /// An I/O failure in a context where it is a hard error. The question
    /// store itself never surfaces this; it falls back to a sentinel.
    Io { message: String },
    /// A question source could not be parsed (e.g. broken frontmatter).
    Parse { message: String },
}

impl QuizError {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        QuizError::InvalidConfiguration {
            message: msg.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        QuizError::Parse {
            message: msg.into(),
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(value: std::io::Error) -> Self {
        QuizError::Io {
            message: format!("I/O error: {value}"),
        }
    }
}

impl Display for QuizError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            QuizError::InvalidConfiguration { message } => {
                write!(f, "error: invalid configuration: {message}")
            }
            QuizError::Io { message } => write!(f, "error: {message}"),
            QuizError::Parse { message } => write!(f, "error: {message}"),
        }
    }
}

impl Error for QuizError {}

pub type Fallible<T> = Result<T, QuizError>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(QuizError::Io {
        message: msg.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = QuizError::invalid_configuration("no questions");
        assert_eq!(
            err.to_string(),
            "error: invalid configuration: no questions"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: QuizError = io.into();
        assert!(matches!(err, QuizError::Io { .. }));
    }
}
