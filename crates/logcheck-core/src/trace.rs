//! Trace sink: where verdict and failure lines are written.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Destination named on the command line or in `[trace] output`.
///
/// `stdout`, `stderr`, and `none`/`off` are reserved words; anything else is
/// a file path, truncated on open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceTarget {
    Stdout,
    Stderr,
    File(PathBuf),
    Disabled,
}

impl TraceTarget {
    pub fn open(&self) -> io::Result<TraceSink> {
        Ok(match self {
            TraceTarget::Stdout => TraceSink::Stdout(io::stdout()),
            TraceTarget::Stderr => TraceSink::Stderr(io::stderr()),
            TraceTarget::File(path) => TraceSink::File(BufWriter::new(File::create(path)?)),
            TraceTarget::Disabled => TraceSink::Disabled,
        })
    }
}

impl FromStr for TraceTarget {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "stdout" => TraceTarget::Stdout,
            "stderr" => TraceTarget::Stderr,
            "none" | "off" => TraceTarget::Disabled,
            path => TraceTarget::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for TraceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceTarget::Stdout => write!(f, "stdout"),
            TraceTarget::Stderr => write!(f, "stderr"),
            TraceTarget::File(path) => write!(f, "{}", path.display()),
            TraceTarget::Disabled => write!(f, "none"),
        }
    }
}

/// An opened trace destination. Writes to [`TraceSink::Disabled`] are
/// accepted and dropped.
pub enum TraceSink {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    File(BufWriter<File>),
    Disabled,
}

impl Write for TraceSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            TraceSink::Stdout(out) => out.write(buf),
            TraceSink::Stderr(err) => err.write(buf),
            TraceSink::File(file) => file.write(buf),
            TraceSink::Disabled => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            TraceSink::Stdout(out) => out.flush(),
            TraceSink::Stderr(err) => err.flush(),
            TraceSink::File(file) => file.flush(),
            TraceSink::Disabled => Ok(()),
        }
    }
}
