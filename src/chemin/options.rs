use serde::{Deserialize, Serialize};

/// Slash placement when rendering a Chemin to a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlashOptions {
    pub leading_slash: bool,
    pub trailing_slash: bool,
}

impl Default for SlashOptions {
    fn default() -> Self {
        Self {
            leading_slash: true,
            trailing_slash: false,
        }
    }
}

impl SlashOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leading_slash(mut self, value: bool) -> Self {
        self.leading_slash = value;
        self
    }

    pub fn trailing_slash(mut self, value: bool) -> Self {
        self.trailing_slash = value;
        self
    }

    /// Used for nested Chemins, which are spliced into their parent.
    pub(crate) fn bare() -> Self {
        Self {
            leading_slash: false,
            trailing_slash: false,
        }
    }
}
