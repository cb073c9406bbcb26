//! `[plugins.checks]` section configuration.
//!
//! Policy for the pre-optimization checks. Any violation empties the
//! document.
//!
//! # Example
//!
//! ```toml
//! [plugins.checks]
//! enable = true
//! required = ["viewBox", "width", "height"]   # Attributes the root <svg> must have
//! themed = "themed"                          # Class substring marking themed shapes
//!
//! # Replaces the built-in table when present
//! [[plugins.checks.fills]]
//! fill = "#246fb5"
//! class = "defaultFill-BrandPrimary"
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// A fill color that requires a matching class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRule {
    /// Literal `fill` attribute value.
    pub fill: String,
    /// Substring the element's class must contain.
    pub class: String,
}

impl FillRule {
    pub fn new(fill: &str, class: &str) -> Self {
        Self {
            fill: fill.to_string(),
            class: class.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Run the checks.
    pub enable: bool,

    /// Attributes required on the root `<svg>`.
    pub required: Vec<String>,

    /// Class substring that marks a themed shape.
    pub themed: String,

    /// Fill colors that must carry a `defaultFill-*` class.
    pub fills: Vec<FillRule>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            enable: true,
            required: ["viewBox", "width", "height"].map(String::from).to_vec(),
            themed: "themed".to_string(),
            fills: default_fills(),
        }
    }
}

fn default_fills() -> Vec<FillRule> {
    vec![
        FillRule::new("#246fb5", "defaultFill-BrandPrimary"),
        FillRule::new("#0091ea", "defaultFill-BrandSecondary"),
        FillRule::new("#00a1db", "defaultFill-BrandTertiary"),
        FillRule::new("#52cc6e", "defaultFill-PositiveBright"),
        FillRule::new("#d9545b", "defaultFill-NegativeDim"),
    ]
}

impl ChecksConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.themed.is_empty() {
            diag.error_with_hint(
                "plugins.checks.themed",
                "themed marker must not be empty",
                "an empty marker matches every class; set `enable = false` instead",
            );
        }

        if self.required.iter().any(|a| a.trim().is_empty()) {
            diag.error("plugins.checks.required", "attribute name must not be empty");
        }

        let mut seen = FxHashSet::default();
        for rule in &self.fills {
            if rule.fill.is_empty() || rule.class.is_empty() {
                diag.error(
                    "plugins.checks.fills",
                    "each rule needs a non-empty `fill` and `class`",
                );
            } else if !seen.insert(rule.fill.as_str()) {
                diag.error(
                    "plugins.checks.fills",
                    format!("fill `{}` is listed more than once", rule.fill),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let checks = &config.plugins.checks;
        assert!(checks.enable);
        assert_eq!(checks.required, ["viewBox", "width", "height"]);
        assert_eq!(checks.themed, "themed");
        assert_eq!(checks.fills.len(), 5);
        assert_eq!(
            checks.fills[0],
            FillRule::new("#246fb5", "defaultFill-BrandPrimary")
        );
    }

    #[test]
    fn test_fills_replace_defaults() {
        let config = test_parse_config(
            "[[plugins.checks.fills]]\nfill = \"#000000\"\nclass = \"defaultFill-Ink\"",
        );
        assert_eq!(
            config.plugins.checks.fills,
            [FillRule::new("#000000", "defaultFill-Ink")]
        );
        assert_eq!(config.plugins.checks.themed, "themed");
    }

    #[test]
    fn test_validate() {
        let mut diag = ConfigDiagnostics::new();
        ChecksConfig::default().validate(&mut diag);
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        ChecksConfig {
            themed: String::new(),
            fills: vec![
                FillRule::new("#fff", "a"),
                FillRule::new("#fff", "b"),
                FillRule::new("", "c"),
            ],
            ..Default::default()
        }
        .validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }
}
