//! Application lifecycle: per-invocation state and the `CliApp` contract
//!
//! A concrete application embeds an [`AppContext`] and implements the two
//! [`CliApp`] hooks. The provided `run`/`run_with` drive the lifecycle:
//! resolve the options source, call `read_opts`, call `main`, and return
//! `main`'s result as the exit status. The sequence is strictly linear and
//! fully synchronous; one context equals one invocation.

use tracing::debug;

use crate::error::AppResult;
use crate::options::{parse, Options, OptionsInput, OptionsSpec};
use crate::traits::{ArgSource, MessageSink, ProcessArgs, StdoutSink};
use crate::verbosity::Verbosity;

/// Per-invocation application state.
///
/// Holds the option descriptors, the parsed options, the verbosity and debug
/// settings, and the two injected I/O boundaries. The output sink is acquired
/// when the context is created and released when it is dropped; every write
/// during the invocation goes through the same handle.
pub struct AppContext {
    spec: OptionsSpec,
    options: Options,
    verbosity: Verbosity,
    message_default: Verbosity,
    debug_mode: bool,
    debug_pattern: String,
    sink: Box<dyn MessageSink>,
    args: Box<dyn ArgSource>,
}

impl AppContext {
    /// Create a context wired to the real process: stdout sink, real
    /// argument vector.
    pub fn new(spec: OptionsSpec) -> Self {
        Self::with_deps(spec, Box::new(StdoutSink::new()), Box::new(ProcessArgs))
    }

    /// Create a context with injected boundaries (for testing or embedding).
    pub fn with_deps(
        spec: OptionsSpec,
        sink: Box<dyn MessageSink>,
        args: Box<dyn ArgSource>,
    ) -> Self {
        Self {
            spec,
            options: Options::new(),
            verbosity: Verbosity::Normal,
            message_default: Verbosity::Normal,
            debug_mode: false,
            debug_pattern: "[DEBUG] {}".to_string(),
            sink,
            args,
        }
    }

    /// The parsed options of the current invocation. Empty until `run` has
    /// resolved the options source.
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// The verbosity assumed for [`message`](Self::message) calls.
    pub fn message_default(&self) -> Verbosity {
        self.message_default
    }

    pub fn set_message_default(&mut self, verbosity: Verbosity) {
        self.message_default = verbosity;
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn set_debug_mode(&mut self, on: bool) {
        self.debug_mode = on;
    }

    /// Set the debug message template. Must contain exactly one `{}` slot;
    /// the message is substituted into it.
    pub fn set_debug_pattern(&mut self, pattern: &str) {
        self.debug_pattern = pattern.to_string();
    }

    /// Write the message verbatim to the sink, unconditionally. The single
    /// point of contact with the sink; the gated helpers route through here.
    pub fn write(&mut self, message: &str) {
        self.sink.write(message);
    }

    /// Write the message if the current verbosity admits the default message
    /// level. Dropped messages are gone; nothing is buffered.
    pub fn message(&mut self, message: &str) {
        self.message_at(message, self.message_default);
    }

    /// Write the message if the current verbosity is at least `level`.
    pub fn message_at(&mut self, message: &str, level: Verbosity) {
        if self.verbosity >= level {
            self.write(message);
        }
    }

    /// Write the message through the debug template. A no-op unless debug
    /// mode is on; independent of the verbosity gate.
    pub fn debug(&mut self, message: &str) {
        if self.debug_mode {
            let formatted = self.debug_pattern.replacen("{}", message, 1);
            self.write(&formatted);
        }
    }

    fn resolve_options(&mut self, input: OptionsInput) {
        self.options = match input {
            OptionsInput::Invocation => {
                let argv = self.args.args();
                debug!(count = argv.len(), "reading invocation arguments");
                parse(&argv, &self.spec)
            }
            OptionsInput::Explicit(options) => options,
            OptionsInput::Empty => Options::new(),
        };
    }
}

/// The contract a concrete command-line application implements.
///
/// Required: access to the embedded [`AppContext`] plus the two hooks.
/// `read_opts` inspects the resolved options and configures instance state;
/// it must not assume any particular option is present. `main` does the
/// actual work and returns the exit status. Errors from either hook
/// propagate out of `run` unmodified; converting them into a printed
/// message and a non-zero exit belongs to the entry point.
pub trait CliApp {
    fn context(&self) -> &AppContext;

    fn context_mut(&mut self) -> &mut AppContext;

    /// Inspect the resolved options and configure instance state.
    fn read_opts(&mut self) -> AppResult<()>;

    /// Perform the application's work. Called after `read_opts`.
    fn main(&mut self) -> AppResult<i32>;

    /// Run against the real process invocation.
    fn run(&mut self) -> AppResult<i32> {
        self.run_with(OptionsInput::Invocation)
    }

    /// Run with an explicit options source. `read_opts` always completes
    /// (or errors) before `main` begins.
    fn run_with(&mut self, input: OptionsInput) -> AppResult<i32> {
        self.context_mut().resolve_options(input);
        debug!("options resolved, reading");
        self.read_opts()?;
        debug!("options read, executing");
        let status = self.main()?;
        debug!(status, "main returned");
        Ok(status)
    }
}
