//! Node types.
//!
//! Elements have a fixed shape: plain attributes in source order, plus a
//! typed [`ClassList`] and an always-present [`Style`]. The `class` and
//! `style` attributes never live in the plain attribute list; the
//! attribute accessors route them to the typed fields.

use std::borrow::Cow;

use super::{ClassList, Style};

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(elem) => Some(elem),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(elem) => Some(elem),
            _ => None,
        }
    }

    /// Check if this node is an element with the given tag.
    #[inline]
    pub fn is_tag(&self, tag: &str) -> bool {
        self.as_element().is_some_and(|elem| elem.is_tag(tag))
    }

    /// The class token if this is an element with exactly one class.
    #[inline]
    pub fn single_class(&self) -> Option<&str> {
        self.as_element().and_then(|elem| elem.class.single())
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment(content.into())
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Self::Element(elem)
    }
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    pub class: ClassList,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Element without content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        match name {
            "class" => !self.class.is_empty(),
            "style" => !self.style.is_empty(),
            _ => self.attrs.iter().any(|(k, _)| k == name),
        }
    }

    /// Attribute value. `class` is serialized on demand, `style` is verbatim.
    pub fn get_attr(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "class" => self.class.value().map(Cow::Owned),
            "style" => self.style.as_str().map(Cow::Borrowed),
            _ => self
                .attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| Cow::Borrowed(v.as_str())),
        }
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        match name.as_str() {
            "class" => self.class = ClassList::parse(&value),
            "style" => self.style = Style::from_raw(value),
            _ => match self.attrs.iter_mut().find(|(k, _)| *k == name) {
                Some((_, v)) => *v = value,
                None => self.attrs.push((name, value)),
            },
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        match name {
            "class" => {
                let value = self.class.value();
                self.class.clear();
                value
            }
            "style" => self.style.clear(),
            _ => {
                let pos = self.attrs.iter().position(|(k, _)| k == name)?;
                Some(self.attrs.remove(pos).1)
            }
        }
    }

    /// Plain attributes in source order (without `class` and `style`).
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Direct element children.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    // Builders

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = ClassList::parse(class);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_routes_to_class_list() {
        let mut elem = Element::new("path").with_attr("class", "a  b");
        assert_eq!(elem.class.len(), 2);
        assert_eq!(elem.get_attr("class").as_deref(), Some("a b"));
        assert_eq!(elem.attrs().count(), 0);

        elem.class.remove("a");
        elem.class.remove("b");
        assert!(!elem.has_attr("class"));
        assert_eq!(elem.get_attr("class"), None);
    }

    #[test]
    fn test_style_routes_to_style() {
        let mut elem = Element::new("rect").with_attr("style", "display: none");
        assert_eq!(elem.style.get("display").as_deref(), Some("none"));
        assert_eq!(elem.remove_attr("style").as_deref(), Some("display: none"));
        assert!(elem.style.is_empty());
        assert!(!elem.has_attr("style"));
    }

    #[test]
    fn test_style_attribute_kept_verbatim() {
        let raw = "background:url(\"data:image/png;base64,AAA\");--Brand-Color:#fff;fill:";
        let elem = Element::new("path").with_attr("style", raw);
        assert_eq!(elem.get_attr("style").as_deref(), Some(raw));
        assert_eq!(elem.clone().remove_attr("style").as_deref(), Some(raw));
    }

    #[test]
    fn test_plain_attrs_keep_order() {
        let mut elem = Element::new("svg")
            .with_attr("width", "10")
            .with_attr("height", "20");
        elem.set_attr("width", "30");

        let attrs: Vec<_> = elem.attrs().collect();
        assert_eq!(attrs, [("width", "30"), ("height", "20")]);
        assert_eq!(elem.remove_attr("height").as_deref(), Some("20"));
        assert!(!elem.has_attr("height"));
    }

    #[test]
    fn test_single_class() {
        assert_eq!(Node::from(Element::new("g").with_class("a")).single_class(), Some("a"));
        assert_eq!(Node::from(Element::new("g").with_class("a b")).single_class(), None);
        assert_eq!(Node::text("a").single_class(), None);
    }
}
