//! Console progress log.
//!
//! Every user-facing line goes through [`OutputManager`]. The writers are
//! injectable so tests can capture exactly what an operator would see.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Emoji-prefixed progress output with verbose and quiet modes.
///
/// Warnings and errors are always printed. In quiet mode everything else is
/// suppressed; verbose lines are only printed in verbose mode.
#[derive(Clone)]
pub struct OutputManager {
    out: Sink,
    err: Sink,
    verbose: bool,
    quiet: bool,
}

impl std::fmt::Debug for OutputManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputManager")
            .field("verbose", &self.verbose)
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}

impl OutputManager {
    /// Writes to the process's stdout and stderr.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), verbose, quiet)
    }

    pub fn with_writers<O, E>(out: O, err: E, verbose: bool, quiet: bool) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Arc::new(Mutex::new(Box::new(out))),
            err: Arc::new(Mutex::new(Box::new(err))),
            verbose,
            quiet,
        }
    }

    /// Sends both streams to one in-memory buffer, preserving line order.
    pub fn captured() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let manager = Self::with_writers(buffer.clone(), buffer.clone(), false, false);
        (manager, buffer)
    }

    /// Opening line followed by a blank line.
    pub fn banner(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_out(&format!("{message}\n"))
    }

    /// Section heading, separated from the previous section by a blank line.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_out(&format!("\n{title}"))
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_out(&format!("  ✅ {message}"))
    }

    /// Per-item failure marker inside a section (e.g. a missing file).
    pub fn failure(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_out(&format!("  ❌ {message}"))
    }

    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.write_out(&format!("  ⚠️  {message}"))
    }

    pub fn hint(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_out(&format!("  💡 {message}"))
    }

    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_out(&format!("  {message}"))
    }

    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.write_out(&format!("  {message}"))
    }

    /// Error line on the error stream.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut err = lock(&self.err);
        writeln!(err, "{message}")?;
        err.flush()
    }

    fn write_out(&self, line: &str) -> io::Result<()> {
        let mut out = lock(&self.out);
        writeln!(out, "{line}")?;
        out.flush()
    }
}

fn lock(sink: &Sink) -> MutexGuard<'_, Box<dyn Write + Send>> {
    // A panic while holding the lock leaves the writer usable.
    sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Clonable in-memory writer.
#[derive(Clone, Default, Debug)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|p| p.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
