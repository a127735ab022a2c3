use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::credentials::Credentials;
use crate::env::EnvVars;
use crate::pipes::InputSource;
use crate::validation::ValidationPolicy;

/// Immutable description of a single prospective process invocation.
///
/// Every mutation produces a new value; an existing configuration is never
/// changed in place, so snapshots handed to the execution engine (or carried
/// inside errors) stay accurate.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandConfig {
    /// Path or name of the executable, batch file, or script to run.
    pub program: String,
    /// Pre-escaped argument string; empty means no arguments.
    pub arguments: String,
    /// Directory the child process starts in.
    pub working_dir: PathBuf,
    /// Identity the child runs under, passed through unexamined.
    pub credentials: Credentials,
    /// Environment overrides; a `None` value unsets the variable.
    pub env: EnvVars,
    /// Exit-code acceptance rule.
    pub validation: ValidationPolicy,
    /// Where standard input bytes come from.
    pub stdin: InputSource,
}

impl CommandConfig {
    /// Creates a configuration for the given program with every other field
    /// at its default. The working directory is captured from the ambient
    /// process at construction time.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            arguments: String::new(),
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            credentials: Credentials::default(),
            env: EnvVars::new(),
            validation: ValidationPolicy::default(),
            stdin: InputSource::Null,
        }
    }
}

impl fmt::Display for CommandConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.arguments.is_empty() {
            f.write_str(&self.program)
        } else {
            write!(f, "{} {}", self.program, self.arguments)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_has_documented_defaults() {
        let config = CommandConfig::new("foo");
        assert_eq!(config.program, "foo");
        assert!(config.arguments.is_empty());
        assert_eq!(config.working_dir, env::current_dir().unwrap());
        assert!(config.credentials.is_default());
        assert!(config.env.is_empty());
        assert_eq!(config.validation, ValidationPolicy::ZeroExitCode);
        assert_eq!(config.stdin, InputSource::Null);
    }

    #[test]
    fn display_is_program_plus_arguments() {
        let mut config = CommandConfig::new("git");
        assert_eq!(config.to_string(), "git");

        config.arguments = "status --short".to_string();
        assert_eq!(config.to_string(), "git status --short");
    }
}
