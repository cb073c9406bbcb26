//! `[plugins.group]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [plugins.group]
//! enable = true          # Group same-class siblings (default: true)
//! wrapper = "g"          # Tag of the synthesized wrapper (default: "g")
//! skip = ["switch"]      # Parents whose children are never grouped
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Run the class grouping pass.
    pub enable: bool,

    /// Tag name of the wrapper element.
    pub wrapper: String,

    /// Parent tags that are left untouched.
    /// `<switch>` must stay: its children are alternatives, not siblings.
    pub skip: Vec<String>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            enable: true,
            wrapper: "g".to_string(),
            skip: vec!["switch".to_string()],
        }
    }
}

impl GroupConfig {
    /// Check if children of `tag` are left ungrouped.
    #[inline]
    pub fn is_skipped(&self, tag: &str) -> bool {
        self.skip.iter().any(|t| t == tag)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.wrapper.trim().is_empty() {
            diag.error_with_hint(
                "plugins.group.wrapper",
                "wrapper tag must not be empty",
                "use \"g\"",
            );
        } else if self.wrapper.contains(char::is_whitespace) {
            diag.error(
                "plugins.group.wrapper",
                format!("`{}` is not a valid tag name", self.wrapper),
            );
        }

        if self.skip.iter().any(|t| t.trim().is_empty()) {
            diag.error("plugins.group.skip", "skip list contains an empty tag");
        }
    }
}
