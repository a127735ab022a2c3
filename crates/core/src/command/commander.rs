use std::fmt;

use super::buffered::BufferedCommand;
use super::builder::CommandBuilder;
use super::config::CommandConfig;
use super::raw::RawCommand;

/// Unified command: carries the full configuration while deferring the
/// choice between buffered and raw output handling.
#[derive(Debug, Clone, PartialEq)]
pub struct Commander {
    config: CommandConfig,
}

impl Commander {
    /// Creates a new command targeting the specified executable, batch file,
    /// or script, with every other field at its default.
    pub fn wrap(program: impl Into<String>) -> Self {
        Self {
            config: CommandConfig::new(program),
        }
    }

    /// Wraps an existing configuration.
    pub fn from_config(config: CommandConfig) -> Self {
        Self { config }
    }

    /// Consumes the command, returning its configuration.
    pub fn into_config(self) -> CommandConfig {
        self.config
    }

    /// Converts into the buffered style: stdout and stderr are captured
    /// through in-process sinks, both initially discarding, so the result
    /// never blocks on unread output.
    pub fn to_buffered(&self) -> BufferedCommand {
        BufferedCommand::from_config(self.config.clone())
    }

    /// Converts into the raw style: stdin is always fed from the configured
    /// source (redirect on), while stdout and stderr inherit the parent's
    /// console unless `hide_output` redirects both to the null device.
    pub fn to_raw(&self, hide_output: bool) -> RawCommand {
        RawCommand::from_config(self.config.clone()).when(hide_output, RawCommand::with_hidden_output)
    }
}

impl CommandBuilder for Commander {
    fn config(&self) -> &CommandConfig {
        &self.config
    }

    fn map_config(self, f: impl FnOnce(CommandConfig) -> CommandConfig) -> Self {
        Self {
            config: f(self.config),
        }
    }
}

impl fmt::Display for Commander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.config, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::pipes::InputSource;
    use crate::validation::ValidationPolicy;

    use super::*;

    #[test]
    fn to_buffered_discards_output_and_preserves_the_config() {
        let cmd = Commander::wrap("foo")
            .with_raw_arguments("--bar")
            .with_validation(ValidationPolicy::None)
            .with_standard_input("stdin data");

        let buffered = cmd.to_buffered();
        assert!(buffered.standard_output().is_null());
        assert!(buffered.standard_error().is_null());
        assert_eq!(buffered.config(), cmd.config());
    }

    #[test]
    fn to_raw_defaults_to_inherited_output() {
        let raw = Commander::wrap("foo").to_raw(false);
        assert!(raw.redirect_standard_input());
        assert!(!raw.redirect_standard_output());
        assert!(!raw.redirect_standard_error());
    }

    #[test]
    fn to_raw_can_hide_all_output() {
        let raw = Commander::wrap("foo").to_raw(true);
        assert!(raw.redirect_standard_input());
        assert!(raw.redirect_standard_output());
        assert!(raw.redirect_standard_error());
    }

    #[test]
    fn raw_round_trip_preserves_every_shared_field() {
        let cmd = Commander::wrap("foo")
            .with_raw_arguments("a b")
            .with_working_directory("/tmp")
            .with_validation(ValidationPolicy::None)
            .with_standard_input(InputSource::from_file("/tmp/input"));

        let rebuilt = Commander::from_config(cmd.to_raw(true).into_config());
        assert_eq!(rebuilt, cmd);
    }

    #[test]
    fn display_matches_the_configuration() {
        let cmd = Commander::wrap("git").with_raw_arguments("log -1");
        assert_eq!(cmd.to_string(), "git log -1");
    }
}
