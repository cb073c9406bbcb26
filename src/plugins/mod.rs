//! Document passes.
//!
//! # Modules
//!
//! - `checks`: Pre-optimization policy checks (whole document, may empty it)
//! - `group`: Promotes a shared class from sibling runs onto a `<g>` wrapper
//!
//! Passes implement [`Plugin`] and are chained by
//! [`Optimizer`](crate::pipeline::Optimizer).

pub mod checks;
pub mod group;

use std::path::{Path, PathBuf};

use crate::vdom::Document;

pub use checks::{CheckReport, PreChecks};
pub use group::GroupByClass;

/// Metadata about the document being processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginInfo {
    /// Source path of the document (may be empty for in-memory input).
    pub path: PathBuf,
}

impl PluginInfo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name shown in diagnostics.
    ///
    /// Splits on both separators so Windows-style paths read the same on
    /// every platform.
    pub fn file_name(&self) -> String {
        let path = self.path.to_string_lossy();
        path.rsplit(['\\', '/']).next().unwrap_or_default().to_string()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// What a pass reports back to the pipeline.
#[derive(Debug, Default)]
pub struct PluginOutcome {
    /// Wrappers or other nodes created.
    pub changes: usize,
    /// Policy report, present when the pass rejected the document.
    pub report: Option<CheckReport>,
}

impl PluginOutcome {
    pub fn changed(changes: usize) -> Self {
        Self {
            changes,
            report: None,
        }
    }

    pub fn rejected(report: CheckReport) -> Self {
        Self {
            changes: 0,
            report: Some(report),
        }
    }
}

/// A pass over a whole document.
pub trait Plugin: Send + Sync {
    /// Short name used as the log prefix.
    fn name(&self) -> &'static str;

    fn run(&self, doc: &mut Document, info: &PluginInfo) -> PluginOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(PluginInfo::new("C:\\icons\\logo.svg").file_name(), "logo.svg");
        assert_eq!(PluginInfo::new("icons/logo.svg").file_name(), "logo.svg");
        assert_eq!(PluginInfo::new("logo.svg").file_name(), "logo.svg");
        assert_eq!(PluginInfo::default().file_name(), "");
    }
}
