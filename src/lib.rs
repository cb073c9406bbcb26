//! svg-tidy - passes over an in-memory SVG tree.
//!
//! Two passes, run in order by [`pipeline::Optimizer`]:
//!
//! - [`plugins::checks`]: pre-optimization policy checks; a failing
//!   document is replaced by an empty one
//! - [`plugins::group`]: runs of siblings sharing one single class are
//!   wrapped in a `<g>` that takes the class
//!
//! # Example
//!
//! ```ignore
//! let config = Config::load_or_default(Path::new(CONFIG_FILE))?;
//! let optimizer = Optimizer::from_config(&config);
//! let out = optimizer.optimize(doc, PluginInfo::new("icons/logo.svg"));
//! ```

pub mod logger;

pub mod config;
pub mod pipeline;
pub mod plugins;
pub mod utils;
pub mod vdom;

pub use config::{CONFIG_FILE, Config, ConfigError};
pub use pipeline::{Optimized, Optimizer};
pub use plugins::{CheckReport, GroupByClass, Plugin, PluginInfo, PluginOutcome, PreChecks};
pub use vdom::{ClassList, Document, Element, Node, Style};
