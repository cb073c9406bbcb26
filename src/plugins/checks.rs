//! Pre-optimization policy checks.
//!
//! Runs once per document before anything else touches it. Three rules:
//!
//! 1. the root `<svg>` has every required attribute (`viewBox`, `width`,
//!    `height` by default)
//! 2. at least one element has a class containing the themed marker
//! 3. if so, no element uses a listed fill color without its paired
//!    `defaultFill-*` class
//!
//! All violations are collected. A document with any violation is replaced
//! by an empty document, so nothing downstream ships a half-themed asset.

use std::fmt;
use std::io::{self, Write};

use owo_colors::OwoColorize;
use rustc_hash::FxHashMap;

use super::{Plugin, PluginInfo, PluginOutcome};
use crate::config::ChecksConfig;
use crate::logger;
use crate::vdom::{Document, Element};

/// A single policy violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Root `<svg>` lacks at least one required attribute.
    MissingRootAttributes {
        required: Vec<String>,
        missing: Vec<String>,
    },
    /// No element carries a themed class.
    NoThemedShapes { marker: String },
    /// Some element has a listed fill without its paired class.
    MissingDefaultFill,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRootAttributes { required, .. } => write!(
                f,
                "- <svg> element must have {} defined.",
                quoted_list(required)
            ),
            Self::NoThemedShapes { marker } => {
                write!(f, "- This SVG contains no '{marker}' shapes.")
            }
            Self::MissingDefaultFill => f.write_str(
                "- One or more shapes is missing a 'defaultFill' class name based on their fill value.",
            ),
        }
    }
}

/// `'a'`, `'a' and 'b'`, `'a', 'b', and 'c'`
fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<_> = items.iter().map(|s| format!("'{s}'")).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

/// Violations found in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// File name (without directories) of the rejected document.
    pub file: String,
    /// Violations in detection order.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// Diagnostic lines, in the order they are printed (last found first).
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.violations.iter().rev().map(ToString::to_string)
    }

    /// Header naming the emptied file.
    pub fn header(&self) -> String {
        format!(
            "{} {} {}",
            "Errors found in".red(),
            self.file.yellow(),
            "-- output has been emptied.".red()
        )
    }

    /// Print the header on stderr and one line per violation on stdout.
    ///
    /// Call from a single thread after processing; the whole report is
    /// written under one lock of both streams.
    pub fn print(&self) {
        logger::report("error", &self.header(), self.lines());
    }

    /// Same as [`print`](Self::print), into explicit streams.
    pub fn write_to(&self, err: &mut impl Write, out: &mut impl Write) -> io::Result<()> {
        logger::write_report(err, out, "error", &self.header(), self.lines())
    }
}

/// Check `doc` against the policy without modifying it.
///
/// Documents whose first node is not an `<svg>` element are not checked.
pub fn check(doc: &Document, config: &ChecksConfig) -> Vec<Violation> {
    let Some(svg) = doc.root().filter(|root| root.is_tag("svg")) else {
        return Vec::new();
    };

    let mut violations = Vec::new();

    let missing: Vec<String> = config
        .required
        .iter()
        .filter(|attr| !svg.has_attr(attr))
        .cloned()
        .collect();
    if !missing.is_empty() {
        violations.push(Violation::MissingRootAttributes {
            required: config.required.clone(),
            missing,
        });
    }

    let themed = doc
        .elements()
        .any(|elem| class_contains(elem, &config.themed));

    if !themed {
        violations.push(Violation::NoThemedShapes {
            marker: config.themed.clone(),
        });
    } else if has_unclassed_fill(doc, config) {
        violations.push(Violation::MissingDefaultFill);
    }

    violations
}

/// Substring match against the serialized class value.
fn class_contains(elem: &Element, needle: &str) -> bool {
    elem.get_attr("class")
        .is_some_and(|class| class.contains(needle))
}

fn has_unclassed_fill(doc: &Document, config: &ChecksConfig) -> bool {
    let rules: FxHashMap<&str, &str> = config
        .fills
        .iter()
        .map(|rule| (rule.fill.as_str(), rule.class.as_str()))
        .collect();

    doc.elements().any(|elem| {
        elem.get_attr("fill")
            .and_then(|fill| rules.get(&*fill).copied())
            .is_some_and(|class| !class_contains(elem, class))
    })
}

/// Empties documents that fail [`check`].
#[derive(Debug, Clone, Default)]
pub struct PreChecks {
    config: ChecksConfig,
}

impl PreChecks {
    pub fn new(config: &ChecksConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Plugin for PreChecks {
    fn name(&self) -> &'static str {
        "checks"
    }

    fn run(&self, doc: &mut Document, info: &PluginInfo) -> PluginOutcome {
        let violations = check(doc, &self.config);
        if violations.is_empty() {
            return PluginOutcome::default();
        }

        *doc = Document::empty();
        PluginOutcome::rejected(CheckReport {
            file: info.file_name(),
            violations,
        })
    }
}
