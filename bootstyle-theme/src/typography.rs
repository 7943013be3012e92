use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A font description in the host toolkit's syntax, e.g. `"{Helvetica} 10 bold"`.
///
/// Treated as opaque by the style engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontSpec(String);

impl FontSpec {
    /// Wrap a font description.
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    /// The font description.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FontSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FontSpec {
    fn from(spec: &str) -> Self {
        Self::new(spec)
    }
}

/// Named font roles used by style builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    /// Running text.
    Body,
    /// Button and control captions.
    Label,
    /// Section headings and tab labels.
    Heading,
    /// Small annotations.
    Caption,
    /// Monospaced text.
    Code,
}

/// The font tokens available to builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Running text.
    pub body: FontSpec,
    /// Button and control captions.
    pub label: FontSpec,
    /// Section headings and tab labels.
    pub heading: FontSpec,
    /// Small annotations.
    pub caption: FontSpec,
    /// Monospaced text.
    pub code: FontSpec,
}

impl Typography {
    /// The font for `role`.
    pub fn font(&self, role: FontRole) -> &FontSpec {
        match role {
            FontRole::Body => &self.body,
            FontRole::Label => &self.label,
            FontRole::Heading => &self.heading,
            FontRole::Caption => &self.caption,
            FontRole::Code => &self.code,
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            body: FontSpec::new("TkDefaultFont"),
            label: FontSpec::new("TkDefaultFont"),
            heading: FontSpec::new("TkHeadingFont"),
            caption: FontSpec::new("TkSmallCaptionFont"),
            code: FontSpec::new("TkFixedFont"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_defaults() {
        let typography: Typography = serde_json::from_str(r#"{"heading": "{Helvetica} 14 bold"}"#).unwrap();
        assert_eq!(typography.font(FontRole::Heading).as_str(), "{Helvetica} 14 bold");
        assert_eq!(typography.font(FontRole::Code), &FontSpec::from("TkFixedFont"));
    }
}
