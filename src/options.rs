//! Option descriptors, the parsed options mapping, and the getopt-style parser

use std::collections::BTreeMap;

use tracing::debug;

/// One recognized option: an optional short name, an optional long name, and
/// whether it takes a value.
#[derive(Debug, Clone)]
struct OptEntry {
    short: Option<char>,
    long: Option<String>,
    takes_value: bool,
}

impl OptEntry {
    /// Canonical key in the parsed mapping: the long name when declared,
    /// otherwise the short name as a one-character string.
    fn key(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => unreachable!("option entry with no name"),
        }
    }
}

/// Declarative descriptor of the options an application accepts.
///
/// Built once by the application (typically at construction) and consulted
/// only when options are parsed from the real invocation. Options supplied
/// explicitly by a caller bypass the spec entirely.
#[derive(Debug, Clone, Default)]
pub struct OptionsSpec {
    entries: Vec<OptEntry>,
}

impl OptionsSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a boolean flag with both a short and a long name.
    pub fn flag(mut self, short: char, long: &str) -> Self {
        self.entries.push(OptEntry {
            short: Some(short),
            long: Some(long.to_string()),
            takes_value: false,
        });
        self
    }

    /// Declare a boolean flag with only a long name.
    pub fn flag_long(mut self, long: &str) -> Self {
        self.entries.push(OptEntry {
            short: None,
            long: Some(long.to_string()),
            takes_value: false,
        });
        self
    }

    /// Declare a value-taking option with both a short and a long name.
    pub fn value(mut self, short: char, long: &str) -> Self {
        self.entries.push(OptEntry {
            short: Some(short),
            long: Some(long.to_string()),
            takes_value: true,
        });
        self
    }

    /// Declare a value-taking option with only a long name.
    pub fn value_long(mut self, long: &str) -> Self {
        self.entries.push(OptEntry {
            short: None,
            long: Some(long.to_string()),
            takes_value: true,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup_short(&self, short: char) -> Option<&OptEntry> {
        self.entries.iter().find(|e| e.short == Some(short))
    }

    fn lookup_long(&self, long: &str) -> Option<&OptEntry> {
        self.entries.iter().find(|e| e.long.as_deref() == Some(long))
    }
}

/// Value of one parsed option: present-without-argument, or a string argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptValue {
    /// Boolean flag, supplied with no argument.
    Present,
    /// Option supplied with an argument.
    Value(String),
}

/// The parsed flag-name-to-value mapping.
///
/// Produced by [`parse`] from the real invocation, or built by hand when one
/// application drives another programmatically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    map: BTreeMap<String, OptValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the named option was supplied at all.
    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// The argument of the named option, if it was supplied with one.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.map.get(name) {
            Some(OptValue::Value(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Record a boolean flag as present. Overwrites any earlier value.
    pub fn insert_flag(&mut self, name: &str) {
        self.map.insert(name.to_string(), OptValue::Present);
    }

    /// Record an option with an argument. Overwrites any earlier value.
    pub fn insert_value(&mut self, name: &str, value: &str) {
        self.map
            .insert(name.to_string(), OptValue::Value(value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, OptValue)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, OptValue)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Where `run` should take its options from.
#[derive(Debug, Clone, Default)]
pub enum OptionsInput {
    /// Parse the real argument vector against the application's
    /// [`OptionsSpec`]. The only path that reads process state.
    #[default]
    Invocation,
    /// Use a caller-supplied mapping verbatim (sub-app invocation).
    Explicit(Options),
    /// Run with no options at all.
    ///
    /// Kept for compatibility with callers that have nothing meaningful to
    /// pass; historically any unusable options source collapsed to an empty
    /// mapping rather than being rejected.
    Empty,
}

impl From<Options> for OptionsInput {
    fn from(options: Options) -> Self {
        OptionsInput::Explicit(options)
    }
}

/// Parse an argument vector against a spec, getopt-style.
///
/// Permissive on purpose: unrecognized options and positional arguments are
/// skipped, a value-taking option at the end of the vector with no value is
/// dropped, and a repeated option keeps its last occurrence. Parsing never
/// fails; it only produces a mapping.
pub fn parse(args: &[String], spec: &OptionsSpec) -> Options {
    let mut options = Options::new();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        } else if let Some(rest) = arg.strip_prefix("--") {
            let (name, inline) = match rest.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (rest, None),
            };
            let Some(entry) = spec.lookup_long(name) else {
                debug!(option = name, "skipping unrecognized long option");
                continue;
            };
            if !entry.takes_value {
                options.insert_flag(&entry.key());
            } else if let Some(value) = inline {
                options.insert_value(&entry.key(), value);
            } else if let Some(value) = iter.next() {
                options.insert_value(&entry.key(), value);
            } else {
                debug!(option = name, "dropping option with missing value");
            }
        } else if arg.len() > 1 && arg.starts_with('-') {
            let mut cluster = arg[1..].chars();
            while let Some(short) = cluster.next() {
                let Some(entry) = spec.lookup_short(short) else {
                    debug!(option = %short, "skipping unrecognized short option");
                    continue;
                };
                if !entry.takes_value {
                    options.insert_flag(&entry.key());
                    continue;
                }
                // Value is the rest of the cluster if non-empty, else the
                // next argument.
                let attached: String = cluster.collect();
                if !attached.is_empty() {
                    options.insert_value(&entry.key(), &attached);
                } else if let Some(value) = iter.next() {
                    options.insert_value(&entry.key(), value);
                } else {
                    debug!(option = %short, "dropping option with missing value");
                }
                break;
            }
        } else {
            debug!(arg = %arg, "ignoring positional argument");
        }
    }

    debug!(count = options.len(), "parsed options");
    options
}
