//! Sibling class grouping.
//!
//! Wraps runs of adjacent siblings that share one identical single class
//! into a `<g>` and moves the class onto the wrapper:
//!
//! ```text
//! <path class="cls-1" id="first"/>           <g class="cls-1">
//! <path class="cls-1" id="second"/>              <path id="first"/>
//! <path class="cls-2" id="third"/>     ==>       <path id="second"/>
//! <path class="cls-1" id="fourth"/>          </g>
//! <path class="cls-1 cls-3" id="fifth"/>     <path class="cls-2" id="third"/>
//!                                            <path class="cls-1" id="fourth"/>
//!                                            <path class="cls-1 cls-3" id="fifth"/>
//! ```
//!
//! Children with several classes never join a run, and only the first run
//! of each class in a parent is grouped: a later run of a class that was
//! already seen stays as it is.
//!
//! Grouping happens in two steps. [`detect_runs`] is a pure scan over the
//! untouched children; the new child list is then built in one pass where
//! every child is either moved through or consumed by its run's wrapper.


use rustc_hash::FxHashMap;

use super::{Plugin, PluginInfo, PluginOutcome};
use crate::config::GroupConfig;
use crate::debug;
use crate::vdom::{Document, Element, Node};

/// Adjacent children sharing one single-token class.
///
/// Covers original child positions `start..end`, always at least two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub class: String,
    pub start: usize,
    pub end: usize,
}

impl Run {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find the groupable runs among `children`, ordered by position.
///
/// At most one run per class: the first one. Each class gets a run when
/// its first matching pair is seen, and that run only grows while the next
/// pair continues it.
pub fn detect_runs(children: &[Node]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut by_class: FxHashMap<&str, usize> = FxHashMap::default();

    for (offset, pair) in children.windows(2).enumerate() {
        let i = offset + 1;
        let (Some(prev), Some(curr)) = (pair[0].single_class(), pair[1].single_class()) else {
            continue;
        };
        if prev != curr {
            continue;
        }

        match by_class.get(curr).copied() {
            None => {
                by_class.insert(curr, runs.len());
                runs.push(Run {
                    class: curr.to_string(),
                    start: i - 1,
                    end: i + 1,
                });
            }
            Some(idx) if runs[idx].end == i => runs[idx].end = i + 1,
            Some(_) => {
                // Class already has a run that ended earlier; leave this one.
                debug!("group"; "not grouping repeated run of `{}` at child {}", curr, i - 1);
            }
        }
    }

    runs
}

/// Groups same-class siblings under a wrapper element.
#[derive(Debug, Clone)]
pub struct GroupByClass {
    config: GroupConfig,
}

impl Default for GroupByClass {
    fn default() -> Self {
        Self::new(&GroupConfig::default())
    }
}

impl GroupByClass {
    pub fn new(config: &GroupConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Check if the children of `elem` are candidates for grouping.
    #[inline]
    pub fn applies_to(&self, elem: &Element) -> bool {
        !self.config.is_skipped(&elem.tag) && elem.children.len() >= 2
    }

    /// Group the direct children of `parent`.
    ///
    /// Returns the number of wrappers created.
    pub fn group(&self, parent: &mut Element) -> usize {
        if !self.applies_to(parent) {
            return 0;
        }

        let runs = detect_runs(&parent.children);
        if runs.is_empty() {
            return 0;
        }
        debug_assert!(runs.windows(2).all(|w| w[0].end <= w[1].start));

        let consumed: usize = runs.iter().map(|run| run.len() - 1).sum();
        let old = std::mem::take(&mut parent.children);
        let mut children = Vec::with_capacity(old.len() - consumed);

        let mut pending = runs.iter().peekable();
        let mut nodes = old.into_iter().enumerate();
        while let Some((i, node)) = nodes.next() {
            match pending.next_if(|run| run.start == i) {
                Some(run) => {
                    let mut members = Vec::with_capacity(run.len());
                    members.push(node);
                    members.extend(nodes.by_ref().take(run.len() - 1).map(|(_, n)| n));
                    children.push(Node::Element(self.wrap(&run.class, members)));
                }
                None => children.push(node),
            }
        }

        parent.children = children;
        runs.len()
    }

    /// Build the wrapper for one run, moving `class` off the members.
    fn wrap(&self, class: &str, mut members: Vec<Node>) -> Element {
        for member in &mut members {
            if let Some(elem) = member.as_element_mut() {
                elem.class.remove(class);
            }
        }

        let mut wrapper = Element::new(self.config.wrapper.as_str());
        wrapper.class.add(class);
        wrapper.children = members;
        wrapper
    }
}

impl Plugin for GroupByClass {
    fn name(&self) -> &'static str {
        "group"
    }

    fn run(&self, doc: &mut Document, _info: &PluginInfo) -> PluginOutcome {
        let mut created = 0;
        doc.walk_post_order_mut(|elem| created += self.group(elem));
        PluginOutcome::changed(created)
    }
}
