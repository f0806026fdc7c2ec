//! # Component Capability
//!
//! The [`Component`] trait is the contract every widget implements: it renders a
//! view from its own state, declares which attributes it observes and reflects,
//! and exposes mount/update/unmount hooks. There is no shared base class; each
//! component implements the trait on its own.

use crate::error::AttributeError;
use std::fmt;

/// Anything that can be embedded in a page as a custom element.
pub trait Component {
    /// The custom element name (must contain a hyphen, e.g. `spc-products-list`).
    const TAG: &'static str;

    /// Attributes whose changes are delivered to [`Component::attribute_changed`].
    fn observed_attributes() -> &'static [&'static str] {
        &[]
    }

    /// Apply an attribute value set by the host. `None` means the attribute was removed.
    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        let _ = value;
        Err(AttributeError::Unobserved {
            tag: Self::TAG,
            name: name.to_string(),
        })
    }

    /// Attributes the component mirrors back onto its host element.
    fn reflected_attributes(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Called once when the component is mounted.
    fn connected(&mut self) {}

    /// Called after any state change was applied.
    fn updated(&mut self) {}

    /// Called once when the component is unmounted.
    fn disconnected(&mut self) {}

    /// Render the current state.
    fn render(&self) -> Html;
}

/// Escapes text for safe inclusion in markup and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Rendered markup.
///
/// Text pushed through [`Html::text`] or [`Html::push_text`] is escaped; markup
/// pushed through [`Html::raw`] or [`Html::push_raw`] is trusted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    pub fn text(text: &str) -> Self {
        Html(escape(text))
    }

    pub fn push_raw(&mut self, markup: &str) -> &mut Self {
        self.0.push_str(markup);
        self
    }

    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.0.push_str(&escape(text));
        self
    }

    pub fn push_html(&mut self, other: &Html) -> &mut Self {
        self.0.push_str(&other.0);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a boolean attribute: present means true, absent means false.
pub fn boolean_attribute(value: Option<&str>) -> bool {
    value.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Badge;

    impl Component for Badge {
        const TAG: &'static str = "x-badge";

        fn render(&self) -> Html {
            Html::raw("<span>badge</span>")
        }
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_html_builder_escapes_only_text() {
        let mut html = Html::raw("<p>");
        html.push_text("1 < 2").push_raw("</p>");
        assert_eq!(html.as_str(), "<p>1 &lt; 2</p>");
    }

    #[test]
    fn test_default_hooks_reject_attributes() {
        let mut badge = Badge;
        let err = badge.attribute_changed("color", Some("red")).unwrap_err();
        assert_eq!(
            err,
            AttributeError::Unobserved {
                tag: "x-badge",
                name: "color".to_string()
            }
        );
        assert!(Badge::observed_attributes().is_empty());
        assert!(badge.reflected_attributes().is_empty());
        assert_eq!(badge.render().to_string(), "<span>badge</span>");
    }

    #[test]
    fn test_boolean_attribute_presence() {
        assert!(boolean_attribute(Some("")));
        assert!(boolean_attribute(Some("false")));
        assert!(!boolean_attribute(None));
    }
}
