//! Minimal base framework for single-invocation command-line applications.
//!
//! An application embeds an [`AppContext`], declares the options it accepts
//! with an [`OptionsSpec`], and implements the two [`CliApp`] hooks:
//! `read_opts` (configure state from the parsed options) and `main` (do the
//! work, return an exit status). The provided `run` drives the lifecycle and
//! offers verbosity-gated message helpers plus an independent debug channel.
//!
//! ```no_run
//! use cliapp::{AppContext, AppResult, CliApp, OptionsSpec, Verbosity};
//!
//! struct Hello {
//!     ctx: AppContext,
//! }
//!
//! impl CliApp for Hello {
//!     fn context(&self) -> &AppContext {
//!         &self.ctx
//!     }
//!
//!     fn context_mut(&mut self) -> &mut AppContext {
//!         &mut self.ctx
//!     }
//!
//!     fn read_opts(&mut self) -> AppResult<()> {
//!         if self.ctx.options().has("verbose") {
//!             self.ctx.set_verbosity(Verbosity::Verbose);
//!         }
//!         Ok(())
//!     }
//!
//!     fn main(&mut self) -> AppResult<i32> {
//!         self.ctx.message("hello\n");
//!         Ok(0)
//!     }
//! }
//!
//! let mut app = Hello {
//!     ctx: AppContext::new(OptionsSpec::new().flag('v', "verbose")),
//! };
//! let status = app.run().unwrap();
//! std::process::exit(status);
//! ```

pub mod app;
pub mod error;
pub mod exitcode;
pub mod options;
pub mod traits;
pub mod util;
pub mod verbosity;

pub use app::{AppContext, CliApp};
pub use error::{AppError, AppResult};
pub use options::{OptValue, Options, OptionsInput, OptionsSpec};
pub use traits::{ArgSource, MessageSink};
pub use verbosity::Verbosity;
