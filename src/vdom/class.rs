//! Class token set backing the `class` attribute.
//!
//! Tokens are whitespace separated and order-insignificant for membership,
//! but insertion order is kept so serialization is stable.

use smallvec::SmallVec;
use std::fmt;

/// Parsed `class` attribute.
///
/// An empty list means the attribute is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    // Almost every SVG shape carries zero or one class.
    tokens: SmallVec<[Box<str>; 2]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw attribute value. Duplicate tokens are dropped.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for token in value.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Add a token. Returns `false` if it was already present.
    ///
    /// Input containing whitespace is split into several tokens.
    pub fn add(&mut self, token: &str) -> bool {
        let mut added = false;
        for part in token.split_whitespace() {
            if !self.contains(part) {
                self.tokens.push(part.into());
                added = true;
            }
        }
        added
    }

    /// Remove a token. Returns `true` if it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| &**t != token);
        self.tokens.len() != before
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| &**t == token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token if the list holds exactly one.
    #[inline]
    pub fn single(&self) -> Option<&str> {
        match self.tokens.as_slice() {
            [only] => Some(&**only),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| &**t)
    }

    /// Serialize back into an attribute value (`None` when empty).
    pub fn value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassList {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize() {
        let list = ClassList::parse("  cls-1\tcls-2 cls-1 ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "cls-1 cls-2");
        assert_eq!(list.value().as_deref(), Some("cls-1 cls-2"));
    }

    #[test]
    fn test_empty_has_no_value() {
        assert_eq!(ClassList::parse("   ").value(), None);
        assert_eq!(ClassList::new().single(), None);
    }

    #[test]
    fn test_single() {
        assert_eq!(ClassList::parse("a").single(), Some("a"));
        assert_eq!(ClassList::parse(" a ").single(), Some("a"));
        assert_eq!(ClassList::parse("a b").single(), None);
    }

    #[test]
    fn test_add_remove() {
        let mut list = ClassList::new();
        assert!(list.add("a"));
        assert!(!list.add("a"));
        assert!(list.add("b c"));
        assert_eq!(list.len(), 3);

        assert!(list.remove("b"));
        assert!(!list.remove("b"));
        assert!(list.contains("a"));
        assert!(list.contains("c"));

        list.remove("a");
        list.remove("c");
        assert!(list.is_empty());
        assert_eq!(list.value(), None);
    }
}
