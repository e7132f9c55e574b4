//! Ordered token list for a `docker run` invocation.

use std::fmt::Display;

/// Program prefix of every generated command.
pub const DOCKER_RUN: &str = "docker run";

/// Builder collecting `docker run` flag tokens in emission order.
///
/// A token is one argument segment such as `--name app` or `-d`. Tokens are
/// joined once by [`RunCommand::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunCommand {
    tokens: Vec<String>,
}

impl RunCommand {
    /// Create an empty command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a bare flag, e.g. `--privileged`.
    pub fn flag(&mut self, flag: &str) {
        self.tokens.push(flag.to_string());
    }

    /// Push a flag with its value, e.g. `--name app`.
    pub fn option(&mut self, flag: &str, value: impl Display) {
        self.tokens.push(format!("{flag} {value}"));
    }

    /// Push a flag only when `value` is non-empty.
    pub fn option_if_present(&mut self, flag: &str, value: &str) {
        if !value.is_empty() {
            self.option(flag, value);
        }
    }

    /// Push one `flag value` token per entry, keeping order.
    pub fn option_each<I, T>(&mut self, flag: &str, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        for value in values {
            self.option(flag, value);
        }
    }

    /// Push a positional argument verbatim.
    pub fn positional(&mut self, value: impl Into<String>) {
        self.tokens.push(value.into());
    }

    /// Tokens collected so far, without the `docker run` prefix.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Join the tokens into the final command line.
    ///
    /// Every token, the prefix included, is followed by a single space, so
    /// the result always ends with one.
    pub fn build(&self) -> String {
        let capacity =
            DOCKER_RUN.len() + 1 + self.tokens.iter().map(|t| t.len() + 1).sum::<usize>();
        let mut out = String::with_capacity(capacity);
        out.push_str(DOCKER_RUN);
        out.push(' ');
        for token in &self.tokens {
            out.push_str(token);
            out.push(' ');
        }
        out
    }
}
