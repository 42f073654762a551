//! Command line argument construction.
//!
//! Arguments are kept as structured tokens. [`ProcessArguments::to_args`]
//! hands raw tokens to the OS (no shell, so no quote characters), while
//! [`ProcessArguments::render`] produces the human-readable command line used
//! in logs and `--dry-run` output.
//!
//! Values are stored as [`OsString`] so paths reach the process byte for
//! byte; only `render` is lossy.

use std::ffi::{OsStr, OsString};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Argument {
    Text(OsString),
    Switch {
        switch: OsString,
        value: OsString,
        quoted: bool,
    },
}

/// Ordered argument list for a single tool invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessArguments {
    arguments: Vec<Argument>,
}

impl ProcessArguments {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bare argument.
    pub fn append(&mut self, value: impl Into<OsString>) -> &mut Self {
        self.arguments.push(Argument::Text(value.into()));
        self
    }

    /// Appends a switch followed by an unquoted value.
    ///
    /// Only use this for values drawn from a closed set.
    pub fn append_switch(
        &mut self,
        switch: impl Into<OsString>,
        value: impl Into<OsString>,
    ) -> &mut Self {
        self.arguments.push(Argument::Switch {
            switch: switch.into(),
            value: value.into(),
            quoted: false,
        });
        self
    }

    /// Appends a switch followed by a value that is quoted when rendered.
    pub fn append_switch_quoted(
        &mut self,
        switch: impl Into<OsString>,
        value: impl Into<OsString>,
    ) -> &mut Self {
        self.arguments.push(Argument::Switch {
            switch: switch.into(),
            value: value.into(),
            quoted: true,
        });
        self
    }

    /// Number of argv tokens.
    pub fn len(&self) -> usize {
        self.arguments
            .iter()
            .map(|a| match a {
                Argument::Text(_) => 1,
                Argument::Switch { .. } => 2,
            })
            .sum()
    }

    /// Returns true when no arguments have been appended.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Raw argv tokens, in order, as passed to the spawned process.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.len());
        for argument in &self.arguments {
            match argument {
                Argument::Text(value) => args.push(value.clone()),
                Argument::Switch { switch, value, .. } => {
                    args.push(switch.clone());
                    args.push(value.clone());
                }
            }
        }
        args
    }

    /// Display form of the arguments with quoted values wrapped in `"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProcessArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match argument {
                Argument::Text(value) => write!(f, "{}", value.to_string_lossy())?,
                Argument::Switch {
                    switch,
                    value,
                    quoted: false,
                } => write!(f, "{} {}", switch.to_string_lossy(), value.to_string_lossy())?,
                Argument::Switch {
                    switch,
                    value,
                    quoted: true,
                } => write!(f, "{} {}", switch.to_string_lossy(), quote(value))?,
            }
        }
        Ok(())
    }
}

fn quote(value: &OsStr) -> String {
    format!("\"{}\"", value.to_string_lossy().replace('"', "\\\""))
}
