//! Configuration section definitions.
//!
//! Each module corresponds to a section in `svg-tidy.toml`:
//!
//! | Module   | TOML Section       | Purpose                          |
//! |----------|--------------------|----------------------------------|
//! | `group`  | `[plugins.group]`  | Same-class sibling grouping      |
//! | `checks` | `[plugins.checks]` | Pre-optimization policy checks   |

mod checks;
mod group;

use serde::{Deserialize, Serialize};

pub use checks::{ChecksConfig, FillRule};
pub use group::GroupConfig;

use super::ConfigDiagnostics;

/// `[plugins]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub group: GroupConfig,
    pub checks: ChecksConfig,
}

impl PluginsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.group.enable {
            self.group.validate(diag);
        }
        if self.checks.enable {
            self.checks.validate(diag);
        }
    }
}
