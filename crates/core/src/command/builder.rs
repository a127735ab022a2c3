use std::path::PathBuf;

use crate::args::ArgumentsBuilder;
use crate::credentials::{Credentials, CredentialsBuilder};
use crate::env::{EnvVars, EnvironmentBuilder};
use crate::error::Result;
use crate::pipes::InputSource;
use crate::validation::ValidationPolicy;

use super::config::CommandConfig;

/// Fluent mutation surface shared by every command representation.
///
/// Each `with_` method returns a new, fully independent value with exactly
/// one field replaced; the receiver is consumed, never modified. Implementors
/// only supply access to their configuration and a way to rebuild themselves
/// around an updated one. Representation-specific state (sinks, redirect
/// flags) is carried through untouched.
pub trait CommandBuilder: Sized {
    /// The shared configuration of this command.
    fn config(&self) -> &CommandConfig;

    /// Rebuilds this command around a configuration derived from the
    /// current one.
    fn map_config(self, f: impl FnOnce(CommandConfig) -> CommandConfig) -> Self;

    /// Copy with a different target program.
    fn with_program(self, program: impl Into<String>) -> Self {
        let program = program.into();
        self.map_config(|config| CommandConfig { program, ..config })
    }

    /// Copy with the given pre-escaped argument string, replacing any
    /// previous arguments.
    fn with_raw_arguments(self, arguments: impl Into<String>) -> Self {
        let arguments = arguments.into();
        self.map_config(|config| CommandConfig { arguments, ..config })
    }

    /// Copy with the given arguments, each escaped automatically.
    fn with_arguments<I, S>(self, arguments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_arguments_configured(|args| {
            args.add_all(arguments);
        })
    }

    /// Copy with arguments assembled by the given configurator callback.
    fn with_arguments_configured(
        self,
        configure: impl FnOnce(&mut ArgumentsBuilder),
    ) -> Result<Self> {
        let mut builder = ArgumentsBuilder::new();
        configure(&mut builder);
        Ok(self.with_raw_arguments(builder.build()?))
    }

    /// Copy with a different working directory.
    fn with_working_directory(self, working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        self.map_config(|config| CommandConfig { working_dir, ..config })
    }

    /// Copy with different credentials.
    fn with_credentials(self, credentials: Credentials) -> Self {
        self.map_config(|config| CommandConfig { credentials, ..config })
    }

    /// Copy with credentials assembled by the given configurator callback.
    fn with_credentials_configured(self, configure: impl FnOnce(&mut CredentialsBuilder)) -> Self {
        let mut builder = CredentialsBuilder::new();
        configure(&mut builder);
        self.with_credentials(builder.build())
    }

    /// Copy with a different environment mapping, replacing any previous one.
    fn with_environment(self, env: EnvVars) -> Self {
        self.map_config(|config| CommandConfig { env, ..config })
    }

    /// Copy with an environment assembled by the given configurator callback.
    fn with_environment_configured(self, configure: impl FnOnce(&mut EnvironmentBuilder)) -> Self {
        let mut builder = EnvironmentBuilder::new();
        configure(&mut builder);
        self.with_environment(builder.build())
    }

    /// Copy with a different exit-code validation policy.
    fn with_validation(self, validation: ValidationPolicy) -> Self {
        self.map_config(|config| CommandConfig { validation, ..config })
    }

    /// Copy with a different standard input source, replacing any previous
    /// one entirely.
    fn with_standard_input(self, source: impl Into<InputSource>) -> Self {
        let stdin = source.into();
        self.map_config(|config| CommandConfig { stdin, ..config })
    }

    /// Applies `f` iff `condition` holds; otherwise returns self unchanged.
    fn when(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition { f(self) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Commander;
    use super::*;

    #[test]
    fn each_mutator_changes_exactly_one_field() {
        let base = Commander::wrap("foo");

        let changed = base.clone().with_program("bar");
        assert_eq!(changed.config().program, "bar");
        assert_eq!(
            CommandConfig {
                program: base.config().program.clone(),
                ..changed.config().clone()
            },
            *base.config()
        );

        let changed = base.clone().with_raw_arguments("--version");
        assert_eq!(changed.config().arguments, "--version");
        assert_eq!(
            CommandConfig {
                arguments: String::new(),
                ..changed.config().clone()
            },
            *base.config()
        );

        let changed = base.clone().with_working_directory("/somewhere");
        assert_eq!(changed.config().working_dir, PathBuf::from("/somewhere"));
        assert_eq!(
            CommandConfig {
                working_dir: base.config().working_dir.clone(),
                ..changed.config().clone()
            },
            *base.config()
        );

        let changed = base.clone().with_validation(ValidationPolicy::None);
        assert_eq!(changed.config().validation, ValidationPolicy::None);

        let changed = base.clone().with_standard_input("data");
        assert_eq!(changed.config().stdin, InputSource::from_string("data"));
        assert_eq!(base.config().stdin, InputSource::Null);
    }

    #[test]
    fn mutators_leave_the_original_untouched() {
        let base = Commander::wrap("foo");
        let _ = base.clone().with_program("bar").with_raw_arguments("x");
        assert_eq!(base.config().program, "foo");
        assert!(base.config().arguments.is_empty());
    }

    #[test]
    fn arguments_configurator_escapes_values() {
        let cmd = Commander::wrap("foo")
            .with_arguments_configured(|args| {
                args.add("build").add("a value");
            })
            .unwrap();
        assert_eq!(cmd.config().arguments, "build \"a value\"");
    }

    #[test]
    fn argument_errors_surface_at_the_call_site() {
        let result = Commander::wrap("foo").with_arguments(["ok", "bad\0arg"]);
        assert!(result.is_err());
    }

    #[test]
    fn credentials_configurator_delegates_to_the_primitive() {
        let cmd = Commander::wrap("foo")
            .with_credentials_configured(|c| {
                c.set_username("svc");
            });
        assert_eq!(cmd.config().credentials.username.as_deref(), Some("svc"));
    }

    #[test]
    fn environment_configurator_delegates_to_the_primitive() {
        let cmd = Commander::wrap("foo").with_environment_configured(|env| {
            env.set("A", "1").unset("B");
        });
        assert_eq!(cmd.config().env.get("A"), Some(&Some("1".to_string())));
        assert_eq!(cmd.config().env.get("B"), Some(&None));
    }

    #[test]
    fn when_applies_only_on_true() {
        let base = Commander::wrap("foo");
        let unchanged = base
            .clone()
            .when(false, |c| c.with_validation(ValidationPolicy::None));
        assert_eq!(unchanged, base);

        let changed = base
            .clone()
            .when(true, |c| c.with_validation(ValidationPolicy::None));
        assert_eq!(changed.config().validation, ValidationPolicy::None);
    }
}
