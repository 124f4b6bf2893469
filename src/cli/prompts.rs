//! Centralized warnings, notices and yes/no prompts.
//!
//! Warnings and notices go to stderr and respect quiet mode. Errors are
//! always shown.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::pass::config::{MAX_LENGTH, MIN_LENGTH};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn range_warning(length: i64) {
    warn(&format!(
        "Warning: password length {length} is outside {MIN_LENGTH} < length < {MAX_LENGTH}"
    ));
}

pub fn range_retry(length: i64) {
    error(&format!(
        "Invalid password length {length}: enter a value greater than {MIN_LENGTH} and less than {MAX_LENGTH}."
    ));
}

pub fn no_class_selected(attempt: usize) {
    log::debug!("empty class selection on attempt {attempt}");
    error("No character class selected. Choose at least one.");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        println!("*** -COPIED {count} PASSWORD(S) TO CLIPBOARD- ***");
    }
}

/// Prompt when the clipboard is unavailable. Returns true to fall back to stdout.
/// In quiet/non-interactive mode, silently falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet() || !stdin_is_tty() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
