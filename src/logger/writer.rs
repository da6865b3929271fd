//! Log writer module
//!
//! Thread-safe log output to stdout/stderr or files. Targets are fixed at
//! startup; there is no runtime reconfiguration.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global log sink instance
static LOG_SINK: OnceLock<LogSink> = OnceLock::new();

/// Where a log stream ends up
enum Target {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl Target {
    fn from_path(path: Option<&str>, fallback: Self) -> io::Result<Self> {
        match path {
            Some(p) => Ok(Self::File(Mutex::new(open_log_file(p)?))),
            None => Ok(fallback),
        }
    }

    fn write_line(&self, message: &str) {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Stderr => eprintln!("{message}"),
            Self::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{message}");
                }
            }
        }
    }
}

/// Operation and error streams
pub struct LogSink {
    operation: Target,
    error: Target,
}

impl LogSink {
    /// Write one line to the operation log
    pub fn write_operation(&self, message: &str) {
        self.operation.write_line(message);
    }

    /// Write one line to the error log
    pub fn write_error(&self, message: &str) {
        self.error.write_line(message);
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the global log sink, once, at startup.
///
/// Operation lines default to stdout and error lines to stderr unless a file
/// path is given for either.
pub fn init(operation_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let sink = LogSink {
        operation: Target::from_path(operation_log_file, Target::Stdout)?,
        error: Target::from_path(error_log_file, Target::Stderr)?,
    };
    LOG_SINK
        .set(sink)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "log sink already initialized"))
}

/// Get the global log sink, if initialized
pub fn get() -> Option<&'static LogSink> {
    LOG_SINK.get()
}
