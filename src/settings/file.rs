//! Settings file parsing.
//!
//! One `key = value` per line; `#` starts a comment.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::Settings;
use crate::cli::prompts;
use crate::entropy::EntropySource;
use crate::error::{Error, Result};
use crate::pass::{ClassSet, LengthPolicy};

pub fn load(settings: &mut Settings, path: &Path) -> Result<()> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no settings file at {}, using defaults", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    log::debug!("loading settings from {}", path.display());
    parse(settings, &text)
}

pub fn parse(settings: &mut Settings, text: &str) -> Result<()> {
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::settings(line_no, format!("expected `key = value`, got {line:?}")));
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            "length" => settings.pass_length = parse_number(line_no, key, value)?,
            "number" => settings.number_of_passwords = parse_number(line_no, key, value)?,
            "max_selection_attempts" => {
                settings.max_selection_attempts = parse_number(line_no, key, value)?
            }
            "classes" => {
                settings.classes = ClassSet::parse_list(value)
                    .filter(|set| !set.is_empty())
                    .ok_or_else(|| {
                        Error::settings(line_no, format!("invalid class list {value:?}"))
                    })?;
            }
            "length_policy" => {
                settings.length_policy = LengthPolicy::from_keyword(value).ok_or_else(|| {
                    Error::settings(line_no, format!("length_policy must be reject or warn, got {value:?}"))
                })?;
            }
            "entropy" => {
                settings.entropy = EntropySource::from_keyword(value).ok_or_else(|| {
                    Error::settings(line_no, format!("entropy must be thread or urandom, got {value:?}"))
                })?;
            }
            other => prompts::warn(&format!("Settings line {line_no}: unknown key {other:?} ignored")),
        }
    }
    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    if let Ok(path) = env::var("PWFORGE_CONFIG") {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/pwforge/settings", home))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_number<T: FromStr>(line: usize, key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::settings(line, format!("{key} must be an integer, got {value:?}")))
}
