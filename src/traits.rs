//! I/O boundary traits for testability
//!
//! These traits abstract the two points where an application touches the
//! process environment: the output sink and the argument vector. Real
//! implementations live next to in-memory ones so tests can inject either.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Destination for application messages.
///
/// `write` emits the message verbatim: no newline is appended and no
/// formatting is applied. Write errors on a standard stream have no recovery
/// path here, so implementations swallow them rather than making every
/// message call site fallible.
pub trait MessageSink: Send {
    /// Write the message verbatim to the sink.
    fn write(&mut self, message: &str);
}

/// Source of the invocation's argument vector (program name excluded).
pub trait ArgSource: Send {
    fn args(&self) -> Vec<String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real sink writing to the process standard output.
///
/// Owns the stdout handle for the lifetime of the owning application
/// instance: acquired at construction, released on drop, never closed in
/// between.
#[derive(Debug)]
pub struct StdoutSink {
    out: std::io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSink for StdoutSink {
    fn write(&mut self, message: &str) {
        let _ = self.out.write_all(message.as_bytes());
        let _ = self.out.flush();
    }
}

/// Real argument source reading the actual process invocation.
#[derive(Debug, Default)]
pub struct ProcessArgs;

impl ArgSource for ProcessArgs {
    fn args(&self) -> Vec<String> {
        std::env::args().skip(1).collect()
    }
}

// ============================================================
// IN-MEMORY IMPLEMENTATIONS
// ============================================================

/// In-memory sink collecting everything written, for inspection in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the captured output, usable after the sink has been
    /// moved into an application.
    pub fn buffer(&self) -> Arc<Mutex<String>> {
        Arc::clone(&self.buffer)
    }
}

impl MessageSink for MemorySink {
    fn write(&mut self, message: &str) {
        self.buffer
            .lock()
            .expect("message sink buffer poisoned")
            .push_str(message);
    }
}

/// Fixed argument vector that records whether it was ever consulted.
#[derive(Debug, Default)]
pub struct StaticArgs {
    args: Vec<String>,
    consulted: Arc<AtomicBool>,
}

impl StaticArgs {
    pub fn new(args: &[&str]) -> Self {
        Self {
            args: args.iter().map(|s| s.to_string()).collect(),
            consulted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag that flips once `args()` has been called.
    pub fn consulted(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.consulted)
    }
}

impl ArgSource for StaticArgs {
    fn args(&self) -> Vec<String> {
        self.consulted.store(true, Ordering::SeqCst);
        self.args.clone()
    }
}
