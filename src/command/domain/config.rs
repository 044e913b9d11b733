//! Prefix matching configuration.

use serde::{Deserialize, Serialize};

/// How incoming messages are matched against command prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixConfig {
    /// Accepted prefixes, tried in order.
    pub prefixes: Vec<String>,
    /// Whether command names are matched ignoring case.
    pub case_insensitive: bool,
    /// Whether messages from bot accounts are ignored.
    pub ignore_bots: bool,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            prefixes: vec![String::from("!")],
            case_insensitive: false,
            ignore_bots: true,
        }
    }
}

impl PrefixConfig {
    /// Creates a configuration accepting `prefixes`.
    #[must_use]
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets case-insensitive command matching.
    #[must_use]
    pub const fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Sets whether bot authors are ignored.
    #[must_use]
    pub const fn ignore_bots(mut self, enabled: bool) -> Self {
        self.ignore_bots = enabled;
        self
    }

    /// Returns the first prefix `content` starts with.
    #[must_use]
    pub fn matching_prefix(&self, content: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| !prefix.is_empty() && content.starts_with(prefix))
    }
}
