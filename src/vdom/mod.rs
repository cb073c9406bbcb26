//! In-memory SVG document tree.
//!
//! # Modules
//!
//! - `node`: [`Node`] and [`Element`] with typed class and style fields
//! - `class`: [`ClassList`], the parsed `class` attribute
//! - `style`: [`Style`], the parsed `style` attribute
//! - `document`: [`Document`] root container and traversal
//!
//! Building the tree from markup and rendering it back are left to the
//! caller; passes only ever see and mutate this structure.

mod class;
mod document;
mod node;
mod style;

pub use class::ClassList;
pub use document::{Document, Elements};
pub use node::{Element, Node};
pub use style::Style;
