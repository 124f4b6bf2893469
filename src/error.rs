//! Error taxonomy shared by the interactive and command front ends.

use std::io;

use thiserror::Error;

use crate::pass::config::{MAX_LENGTH, MIN_LENGTH};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Length is not a number: {0:?}")]
    Parse(String),

    #[error(
        "Invalid password length {length}: must be between {min} and {max} (exclusive)",
        min = MIN_LENGTH,
        max = MAX_LENGTH
    )]
    Range { length: i64 },

    #[error("No character class selected after {attempts} attempt(s)")]
    EmptySelection { attempts: usize },

    #[error("{0}")]
    Usage(String),

    #[error("Settings line {line}: {message}")]
    Settings { line: usize, message: String },

    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("Cancelled")]
    Cancelled,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn usage<T: Into<String>>(msg: T) -> Self {
        Self::Usage(msg.into())
    }

    pub fn settings<T: Into<String>>(line: usize, msg: T) -> Self {
        Self::Settings {
            line,
            message: msg.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse(_) | Error::Range { .. } => 1,
            Error::Usage(_) | Error::Settings { .. } => 2,
            Error::EmptySelection { .. } => 3,
            Error::InputClosed | Error::Clipboard(_) | Error::Io(_) => 4,
            Error::Cancelled => 130,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
