//! Password generation.

use std::fmt;

use rand::RngCore;
use rand::distributions::{Distribution, Uniform};
use zeroize::Zeroize;

use super::charset;
use super::config::GenerationConfig;
use crate::error::{Error, Result};

/// Generated password. The buffer is wiped on drop.
pub struct Password(Vec<u8>);

impl Password {
    pub fn as_str(&self) -> &str {
        // Alphabets are ASCII, so this never fails.
        std::str::from_utf8(&self.0).unwrap_or("")
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.0.len())
    }
}

/// Generate one password: `length` uniform draws, with replacement, from the union alphabet.
pub fn generate<R: RngCore + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<Password> {
    let mut chars = charset::build(config.classes);
    let password = generate_from_charset(&chars, config.length, rng);
    chars.zeroize();
    password
}

/// Generate `count` independent passwords sharing one prebuilt charset.
pub fn generate_batch<R: RngCore + ?Sized>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>> {
    let chars = charset::build(config.classes);
    log::debug!(
        "generating {count} password(s) of {} chars from a {}-char alphabet",
        config.length,
        chars.len()
    );
    (0..count)
        .map(|_| generate_from_charset(&chars, config.length, rng))
        .collect()
}

#[inline]
fn generate_from_charset<R: RngCore + ?Sized>(
    chars: &[u8],
    length: usize,
    rng: &mut R,
) -> Result<Password> {
    if chars.is_empty() {
        return Err(Error::EmptySelection { attempts: 1 });
    }
    let dist = Uniform::from(0..chars.len());
    let bytes = (0..length).map(|_| chars[dist.sample(rng)]).collect();
    Ok(Password(bytes))
}
