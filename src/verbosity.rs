//! Output verbosity levels

use std::fmt;

/// Ordered output threshold: `Silent < Normal < Verbose`.
///
/// An application holds one current level; every message carries one. The
/// message is emitted only when the application's level is at least the
/// message's level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Verbosity {
    /// Suppress everything, including normal output.
    Silent = -1,
    /// Regular output.
    #[default]
    Normal = 0,
    /// Extra detail on top of regular output.
    Verbose = 1,
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Silent => "silent",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
        };
        write!(f, "{}", name)
    }
}
