//! Inline style declarations.
//!
//! The `style` attribute is stored verbatim and only parsed on demand with
//! lightningcss, so untouched elements keep their exact source text.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleAttribute};

/// The `style` attribute of an element.
///
/// Present on every element; `None` inside means the attribute is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    raw: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a raw attribute value without touching it.
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self {
            raw: Some(value.into()),
        }
    }

    /// The attribute value exactly as it was set.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_none()
    }

    pub fn clear(&mut self) -> Option<String> {
        self.raw.take()
    }

    /// Parsed `(property, value)` pairs, `!important` ones last.
    ///
    /// Returns an empty list when the attribute is absent or not valid CSS.
    pub fn declarations(&self) -> Vec<(String, String)> {
        let Some(raw) = self.raw.as_deref() else {
            return Vec::new();
        };
        let Ok(attr) = StyleAttribute::parse(raw, ParserOptions::default()) else {
            return Vec::new();
        };

        let block = &attr.declarations;
        block
            .declarations
            .iter()
            .chain(block.important_declarations.iter())
            .filter_map(|prop| {
                let value = prop.value_to_css_string(PrinterOptions::default()).ok()?;
                Some((prop.property_id().name().to_string(), value))
            })
            .collect()
    }

    /// Value of one declaration, as printed by lightningcss.
    pub fn get(&self, prop: &str) -> Option<String> {
        self.declarations()
            .into_iter()
            .find(|(name, _)| name == prop)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_round_trips() {
        let raw = "background:url(\"data:image/png;base64,AAA\");--Brand-Color:#fff;fill:";
        let style = Style::from_raw(raw);
        assert_eq!(style.as_str(), Some(raw));
        assert!(!style.is_empty());
    }

    #[test]
    fn test_empty_attribute_is_kept() {
        assert_eq!(Style::from_raw("").as_str(), Some(""));
        assert!(Style::new().is_empty());
        assert_eq!(Style::new().as_str(), None);
    }

    #[test]
    fn test_get_parses_lazily() {
        let style = Style::from_raw("display: none; visibility: hidden");
        assert_eq!(style.get("display").as_deref(), Some("none"));
        assert_eq!(style.get("visibility").as_deref(), Some("hidden"));
        assert_eq!(style.get("fill"), None);
        assert_eq!(style.declarations().len(), 2);
    }

    #[test]
    fn test_absent_has_no_declarations() {
        assert!(Style::new().declarations().is_empty());
        assert_eq!(Style::new().get("display"), None);
    }

    #[test]
    fn test_clear() {
        let mut style = Style::from_raw("display: none");
        assert_eq!(style.clear().as_deref(), Some("display: none"));
        assert!(style.is_empty());
    }
}
