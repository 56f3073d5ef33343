//! Credential output.

use std::io::{self, Write};

use zeroize::Zeroize;

/// Buffered writer that scrubs its internal buffer once the bytes have
/// been handed to the OS, so credentials do not linger in freed heap.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        SecureBufWriter {
            inner,
            buf: Vec::with_capacity(256),
        }
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Write the credential and a single trailing newline to stdout, then
/// scrub the owned string.
pub fn write_line(mut credential: String) {
    let stdout = io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());
    let _ = out.write_all(credential.as_bytes());
    let _ = out.write_all(b"\n");
    let _ = out.flush();
    credential.zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_buffers_until_flush() {
        let mut sink = Vec::new();
        let mut out = SecureBufWriter::new(&mut sink);
        out.write_all(b"abc").unwrap();
        out.write_all(b"\n").unwrap();
        out.flush().unwrap();
        drop(out);
        assert_eq!(sink, b"abc\n");
    }

    #[test]
    fn drop_flushes_pending_bytes() {
        let mut sink = Vec::new();
        {
            let mut out = SecureBufWriter::new(&mut sink);
            out.write_all(b"xyz").unwrap();
        }
        assert_eq!(sink, b"xyz");
    }
}
