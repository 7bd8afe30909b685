//! Demo application: the canonical entry-point wiring for a `CliApp`.
//!
//! `greet` reads a handful of options, says hello at the configured
//! verbosity, and shows the expected-failure path: `AppError` is caught
//! here, printed to stderr, and turned into a non-zero exit code. Any other
//! failure is a defect and panics.

use std::process;

use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cliapp::{AppContext, AppError, AppResult, CliApp, OptionsSpec, Verbosity};

struct GreetApp {
    ctx: AppContext,
    name: String,
    count: u32,
}

impl GreetApp {
    fn new() -> Self {
        let spec = OptionsSpec::new()
            .flag('v', "verbose")
            .flag('s', "silent")
            .flag('d', "debug")
            .value('n', "name")
            .value('c', "count");
        Self {
            ctx: AppContext::new(spec),
            name: "world".to_string(),
            count: 1,
        }
    }
}

impl CliApp for GreetApp {
    fn context(&self) -> &AppContext {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut AppContext {
        &mut self.ctx
    }

    fn read_opts(&mut self) -> AppResult<()> {
        // Silent wins over verbose when both are supplied.
        if self.ctx.options().has("verbose") {
            self.ctx.set_verbosity(Verbosity::Verbose);
        }
        if self.ctx.options().has("silent") {
            self.ctx.set_verbosity(Verbosity::Silent);
        }
        self.ctx.set_debug_mode(self.ctx.options().has("debug"));

        if let Some(name) = self.ctx.options().value("name") {
            self.name = name.to_string();
        }
        if let Some(count) = self.ctx.options().value("count") {
            self.count = count
                .parse()
                .map_err(|_| AppError::InvalidArgs(format!("count must be a number: {count}")))?;
        }
        Ok(())
    }

    fn main(&mut self) -> AppResult<i32> {
        self.ctx.debug("starting greeting run\n");
        for i in 0..self.count {
            self.ctx
                .message_at(&format!("greeting {} of {}\n", i + 1, self.count), Verbosity::Verbose);
            let line = format!("Hello, {}!\n", self.name);
            self.ctx.message(&line);
        }
        self.ctx.debug("greeting run finished\n");
        Ok(cliapp::exitcode::OK)
    }
}

fn main() {
    setup_logging();

    let mut app = GreetApp::new();
    match app.run() {
        Ok(status) => process::exit(status),
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            process::exit(e.exit_code());
        }
    }
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();
}
