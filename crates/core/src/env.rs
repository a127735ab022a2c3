//! Environment-variable overrides for the child process

use std::collections::HashMap;

/// Mapping of variable name to value. A `None` value tells the execution
/// engine to unset the variable in the child rather than inherit it.
pub type EnvVars = HashMap<String, Option<String>>;

/// Structured editor for assembling an [`EnvVars`] mapping. Later entries for
/// the same name win.
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    vars: EnvVars,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable in the child's environment.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(name.into(), Some(value.into()));
        self
    }

    /// Marks a variable to be removed from the child's environment.
    pub fn unset(&mut self, name: impl Into<String>) -> &mut Self {
        self.vars.insert(name.into(), None);
        self
    }

    pub fn build(&self) -> EnvVars {
        self.vars.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_unset_are_recorded() {
        let mut builder = EnvironmentBuilder::new();
        builder.set("RUST_LOG", "debug").unset("NO_COLOR");

        let vars = builder.build();
        assert_eq!(vars.get("RUST_LOG"), Some(&Some("debug".to_string())));
        assert_eq!(vars.get("NO_COLOR"), Some(&None));
    }

    #[test]
    fn later_entries_win() {
        let mut builder = EnvironmentBuilder::new();
        builder.set("PORT", "8080").set("PORT", "9090");
        assert_eq!(builder.build().get("PORT"), Some(&Some("9090".to_string())));

        builder.unset("PORT");
        assert_eq!(builder.build().get("PORT"), Some(&None));
    }
}
