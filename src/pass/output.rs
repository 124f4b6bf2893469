//! Password output: a buffered writer that wipes what it held.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::Password;

const CAPACITY: usize = 8 * 1024;

/// Buffered writer whose buffer is zeroized on every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.flush_buf()?;
        }
        if data.len() >= self.buf.capacity() {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}

/// Write each password on its own line.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[Password]) -> io::Result<()> {
    let mut writer = SecureBufWriter::new(out);
    for pass in passwords {
        writer.write_all(pass.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Join passwords with newlines for the clipboard. Caller zeroizes the result.
pub fn join_lines(passwords: &[Password]) -> String {
    let mut joined = String::with_capacity(passwords.iter().map(|p| p.len() + 1).sum());
    for pass in passwords {
        joined.push_str(pass.as_str());
        joined.push('\n');
    }
    joined
}
