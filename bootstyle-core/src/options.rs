// SPDX-License-Identifier: LGPL-3.0-only

//! Extra style options passed alongside a bootstyle descriptor.

use bootstyle_theme::{ColorToken, HexColor};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Option naming the surface a widget is drawn on.
pub const SURFACE_COLOR: &str = "surface_color";
/// Option carrying an [IconSpec].
pub const ICON: &str = "icon";

/// Icon request attached to a style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconSpec {
    /// Icon name known to the icon provider.
    pub name: String,
    /// Size in points; builders pick a default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl IconSpec {
    /// Create an icon request with the builder's default size.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    /// Set the size in points.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// A single option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum OptionValue {
    /// Free-form text.
    Str(String),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Flag.
    Bool(bool),
    /// A palette token, resolved against the active theme.
    Color(ColorToken),
    /// A literal color.
    Hex(HexColor),
    /// An icon request.
    Icon(IconSpec),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<ColorToken> for OptionValue {
    fn from(value: ColorToken) -> Self {
        OptionValue::Color(value)
    }
}

impl From<HexColor> for OptionValue {
    fn from(value: HexColor) -> Self {
        OptionValue::Hex(value)
    }
}

impl From<IconSpec> for OptionValue {
    fn from(value: IconSpec) -> Self {
        OptionValue::Icon(value)
    }
}

/// Ordered option map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOptions(IndexMap<String, OptionValue>);

impl StyleOptions {
    /// Create an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an option.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Look an option up.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.get(name)
    }

    /// Remove an option.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.0.shift_remove(name)
    }

    /// Whether no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// A token option, also accepting a token name given as text.
    pub fn color(&self, name: &str) -> Option<ColorToken> {
        match self.get(name)? {
            OptionValue::Color(token) => Some(*token),
            OptionValue::Str(text) => ColorToken::from_name(text),
            _ => None,
        }
    }

    /// A text option.
    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            OptionValue::Str(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// An integer option.
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            OptionValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// A boolean option.
    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The `icon` option. A plain string is taken as the icon name.
    pub fn icon(&self) -> Option<IconSpec> {
        match self.get(ICON)? {
            OptionValue::Icon(spec) => Some(spec.clone()),
            OptionValue::Str(name) => Some(IconSpec::new(name.as_str())),
            _ => None,
        }
    }

    /// Stable 8-digit hex digest of the options, independent of insertion order.
    ///
    /// Used to keep styles that differ only in their options apart.
    pub fn digest(&self) -> String {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut hash: u32 = 0x811c_9dc5;
        for (name, value) in entries {
            let encoded = serde_json::to_string(value).unwrap_or_default();
            for byte in name.bytes().chain([0u8]).chain(encoded.bytes()).chain([0u8]) {
                hash ^= u32::from(byte);
                hash = hash.wrapping_mul(0x0100_0193);
            }
        }
        format!("{hash:08x}")
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for StyleOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_ignores_order() {
        let a = StyleOptions::new().with("padding", 4i64).with(SURFACE_COLOR, ColorToken::Dark);
        let b = StyleOptions::new().with(SURFACE_COLOR, ColorToken::Dark).with("padding", 4i64);
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 8);
        assert_ne!(a.digest(), StyleOptions::new().with("padding", 5i64).digest());
    }

    #[test]
    fn typed_accessors() {
        let options = StyleOptions::new()
            .with(SURFACE_COLOR, "dark")
            .with(ICON, IconSpec::new("check").with_size(16));
        assert_eq!(options.color(SURFACE_COLOR), Some(ColorToken::Dark));
        assert_eq!(options.icon().and_then(|icon| icon.size), Some(16));
        assert_eq!(options.int("missing"), None);
    }

    #[test]
    fn serializes_tagged_values() {
        let options = StyleOptions::new().with("show_border", false);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"show_border":{"type":"bool","value":false}}"#);
        let back: StyleOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
