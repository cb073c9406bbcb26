//! Document optimization pipeline.
//!
//! Chains the enabled passes in a fixed order:
//!
//! ```text
//! Document
//!    │
//!    ▼
//! ┌────────┐
//! │ checks │ ──► policy violation: document emptied, report returned
//! └───┬────┘
//!     │
//!     ▼
//! ┌───────┐
//! │ group │ ──► same-class siblings wrapped in <g>
//! └───────┘
//! ```
//!
//! - `optimize()`: one document, synchronous, prints nothing
//! - `optimize_and_report()`: `optimize()` plus the rejection report
//! - `optimize_batch()`: many documents in parallel (rayon), one per task;
//!   reports are printed afterwards, in input order

use rayon::prelude::*;

use crate::config::Config;
use crate::plugins::{CheckReport, GroupByClass, Plugin, PluginInfo, PreChecks};
use crate::utils::plural_count;
use crate::vdom::Document;
use crate::{debug, log};

// =============================================================================
// Types
// =============================================================================

/// Result of running the pipeline on one document
#[derive(Debug)]
pub struct Optimized {
    /// The processed document (empty if a check rejected it).
    pub doc: Document,
    /// Source metadata the document was processed with.
    pub info: PluginInfo,
    /// Nodes created by all passes.
    pub changes: usize,
    /// Present when the checks rejected the document.
    pub report: Option<CheckReport>,
}

impl Optimized {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.report.is_some()
    }
}

/// Ordered list of passes built from [`Config`].
pub struct Optimizer {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Optimizer {
    /// Build the enabled passes: checks first, then grouping.
    pub fn from_config(config: &Config) -> Self {
        let mut plugins: Vec<Box<dyn Plugin>> = Vec::new();

        if config.plugins.checks.enable {
            plugins.push(Box::new(PreChecks::new(&config.plugins.checks)));
        }
        if config.plugins.group.enable {
            plugins.push(Box::new(GroupByClass::new(&config.plugins.group)));
        }

        Self { plugins }
    }

    /// Names of the enabled passes, in run order.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    // =========================================================================
    // Single Document
    // =========================================================================

    /// Run every pass on `doc`.
    ///
    /// A rejected document is empty afterwards; later passes still run but
    /// have nothing to do. The report is returned, not printed.
    pub fn optimize(&self, mut doc: Document, info: PluginInfo) -> Optimized {
        let mut changes = 0;
        let mut report = None;

        for plugin in &self.plugins {
            let outcome = plugin.run(&mut doc, &info);
            if outcome.changes > 0 {
                debug!(plugin.name(); "{}: {}", info.file_name(), plural_count(outcome.changes, "change"));
            }
            changes += outcome.changes;

            if outcome.report.is_some() {
                report = outcome.report;
            }
        }

        Optimized {
            doc,
            info,
            changes,
            report,
        }
    }

    /// Run every pass on `doc` and print the report if it was rejected.
    pub fn optimize_and_report(&self, doc: Document, info: PluginInfo) -> Optimized {
        let result = self.optimize(doc, info);
        if let Some(report) = &result.report {
            report.print();
        }
        result
    }

    // =========================================================================
    // Batch
    // =========================================================================

    /// Run the pipeline on many documents in parallel.
    ///
    /// Output order matches input order. Workers never print; reports are
    /// printed here, one after another, once every document is done.
    pub fn optimize_batch(&self, docs: Vec<(Document, PluginInfo)>) -> Vec<Optimized> {
        let results: Vec<_> = docs
            .into_par_iter()
            .map(|(doc, info)| self.optimize(doc, info))
            .collect();

        let reports: Vec<_> = results.iter().filter_map(|r| r.report.as_ref()).collect();
        for report in &reports {
            report.print();
        }
        if !reports.is_empty() {
            log!("checks"; "{} emptied", plural_count(reports.len(), "document"));
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::{Element, Node};

    fn shape(class: &str) -> Node {
        Element::new("path").with_class(class).into()
    }

    fn icon() -> Document {
        Document::with_root(
            Element::new("svg")
                .with_attr("viewBox", "0 0 24 24")
                .with_attr("width", "24")
                .with_attr("height", "24")
                .with_children([shape("themed"), shape("themed"), shape("x")]),
        )
    }

    #[test]
    fn test_plugin_order() {
        assert_eq!(Optimizer::default().plugin_names(), ["checks", "group"]);

        let config = Config::from_str("[plugins.checks]\nenable = false").unwrap();
        assert_eq!(Optimizer::from_config(&config).plugin_names(), ["group"]);
    }

    #[test]
    fn test_optimize_groups_valid_document() {
        let out = Optimizer::default().optimize(icon(), PluginInfo::new("icon.svg"));
        assert!(!out.is_rejected());
        assert_eq!(out.changes, 1);

        let svg = out.doc.root().unwrap();
        assert_eq!(svg.children.len(), 2);
        assert_eq!(svg.children[0].single_class(), Some("themed"));
    }

    #[test]
    fn test_rejected_document_stays_empty() {
        let mut doc = icon();
        if let Some(svg) = doc.root_mut() {
            svg.remove_attr("viewBox");
        }

        let out = Optimizer::default().optimize(doc, PluginInfo::new("icon.svg"));
        assert!(out.is_rejected());
        assert!(out.doc.is_empty());
        assert_eq!(out.changes, 0);
        assert_eq!(out.report.unwrap().violations.len(), 1);
    }

    #[test]
    fn test_checks_disabled() {
        let config = Config::from_str("[plugins.checks]\nenable = false").unwrap();
        let doc = Document::with_root(
            Element::new("svg").with_children([shape("a"), shape("a")]),
        );

        let out = Optimizer::from_config(&config).optimize(doc, PluginInfo::default());
        assert!(!out.is_rejected());
        assert_eq!(out.changes, 1);
    }

    #[test]
    fn test_batch_keeps_order() {
        let mut broken = icon();
        if let Some(svg) = broken.root_mut() {
            svg.remove_attr("width");
        }
        let docs = vec![
            (icon(), PluginInfo::new("a.svg")),
            (broken, PluginInfo::new("b.svg")),
            (icon(), PluginInfo::new("c.svg")),
        ];

        let results = Optimizer::default().optimize_batch(docs);
        let names: Vec<_> = results.iter().map(|r| r.info.file_name()).collect();
        assert_eq!(names, ["a.svg", "b.svg", "c.svg"]);
        assert_eq!(
            results.iter().map(Optimized::is_rejected).collect::<Vec<_>>(),
            [false, true, false]
        );
    }

    #[test]
    fn test_batch_returns_reports_in_input_order() {
        let broken = |name: &str| {
            let mut doc = icon();
            if let Some(svg) = doc.root_mut() {
                svg.remove_attr("height");
            }
            (doc, PluginInfo::new(name))
        };
        let docs: Vec<_> = (0..16).map(|i| broken(&format!("icon-{i}.svg"))).collect();

        let results = Optimizer::default().optimize_batch(docs);
        let files: Vec<_> = results
            .iter()
            .filter_map(|r| r.report.as_ref())
            .map(|report| report.file.clone())
            .collect();
        let expected: Vec<_> = (0..16).map(|i| format!("icon-{i}.svg")).collect();
        assert_eq!(files, expected);
    }

    #[test]
    fn test_optimize_hands_back_report() {
        let mut doc = icon();
        if let Some(svg) = doc.root_mut() {
            svg.remove_attr("viewBox");
        }

        let quiet = Optimizer::default().optimize(doc.clone(), PluginInfo::new("a.svg"));
        let printed = Optimizer::default().optimize_and_report(doc, PluginInfo::new("a.svg"));
        assert_eq!(quiet.report, printed.report);
        assert_eq!(quiet.report.unwrap().file, "a.svg");
    }
}
