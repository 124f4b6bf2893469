//! Random sources and entropy estimates.
//!
//! Both sources are cryptographically secure. `Thread` is a ChaCha
//! generator seeded from the OS and reseeded periodically; `Urandom`
//! reads every draw straight from the OS.

use std::fmt;

use rand::RngCore;
use rand::rngs::OsRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropySource {
    #[default]
    Thread,
    Urandom,
}

impl EntropySource {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "thread" | "chacha" => Some(EntropySource::Thread),
            "urandom" | "os" => Some(EntropySource::Urandom),
            _ => None,
        }
    }

    /// Short name for summaries.
    pub fn name(self) -> &'static str {
        match self {
            EntropySource::Thread => "ChaCha (OS-seeded)",
            EntropySource::Urandom => "/dev/urandom",
        }
    }

    pub fn rng(self) -> Box<dyn RngCore> {
        log::debug!("entropy source: {}", self.name());
        match self {
            EntropySource::Thread => Box::new(rand::thread_rng()),
            EntropySource::Urandom => Box::new(OsRng),
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropySource::Thread => write!(f, "thread"),
            EntropySource::Urandom => write!(f, "urandom"),
        }
    }
}

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
