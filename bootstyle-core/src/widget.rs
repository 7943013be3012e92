// SPDX-License-Identifier: LGPL-3.0-only

//! Widget classes, structural variants and orientation.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The widget categories styles can be built for.
///
/// Each class maps to the toolkit class name its styles derive from, e.g.
/// [WidgetClass::Button] is `TButton` and [WidgetClass::Roundtoggle] is
/// `Roundtoggle.Toolbutton`. Classes the engine does not know are kept in
/// [WidgetClass::Other] so they can still be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetClass {
    /// Push button.
    Button,
    /// Button drawn like a toggle or toolbar item.
    Toolbutton,
    /// Rounded switch.
    Roundtoggle,
    /// Square switch.
    Squaretoggle,
    /// Check box.
    Checkbutton,
    /// Radio button.
    Radiobutton,
    /// Button with a drop-down menu.
    Menubutton,
    /// Button inside a segmented group.
    ButtonGroup,
    /// Single-line text field.
    Entry,
    /// Text field with up/down arrows.
    Spinbox,
    /// Text field with a drop-down list.
    Combobox,
    /// Tabbed container.
    Notebook,
    /// Selectable tab-like item.
    TabItem,
    /// Row of a list.
    ListItem,
    /// Day cell of a calendar.
    CalendarDay,
    /// Text label.
    Label,
    /// Frame with a caption.
    Labelframe,
    /// Plain container.
    Frame,
    /// Slider.
    Scale,
    /// Scroll bar.
    Scrollbar,
    /// Progress bar.
    Progressbar,
    /// Separator line.
    Separator,
    /// Window resize grip.
    Sizegrip,
    /// Tree or table.
    Treeview,
    /// Split container.
    Panedwindow,
    /// A class name the engine does not know.
    Other(String),
}

impl WidgetClass {
    /// Every known class.
    pub const KNOWN: [WidgetClass; 25] = [
        WidgetClass::Button,
        WidgetClass::Toolbutton,
        WidgetClass::Roundtoggle,
        WidgetClass::Squaretoggle,
        WidgetClass::Checkbutton,
        WidgetClass::Radiobutton,
        WidgetClass::Menubutton,
        WidgetClass::ButtonGroup,
        WidgetClass::Entry,
        WidgetClass::Spinbox,
        WidgetClass::Combobox,
        WidgetClass::Notebook,
        WidgetClass::TabItem,
        WidgetClass::ListItem,
        WidgetClass::CalendarDay,
        WidgetClass::Label,
        WidgetClass::Labelframe,
        WidgetClass::Frame,
        WidgetClass::Scale,
        WidgetClass::Scrollbar,
        WidgetClass::Progressbar,
        WidgetClass::Separator,
        WidgetClass::Sizegrip,
        WidgetClass::Treeview,
        WidgetClass::Panedwindow,
    ];

    /// The toolkit class name styles for this class derive from.
    pub fn class_name(&self) -> &str {
        match self {
            WidgetClass::Button => "TButton",
            WidgetClass::Toolbutton => "Toolbutton",
            WidgetClass::Roundtoggle => "Roundtoggle.Toolbutton",
            WidgetClass::Squaretoggle => "Squaretoggle.Toolbutton",
            WidgetClass::Checkbutton => "TCheckbutton",
            WidgetClass::Radiobutton => "TRadiobutton",
            WidgetClass::Menubutton => "TMenubutton",
            WidgetClass::ButtonGroup => "ButtonGroup.TButton",
            WidgetClass::Entry => "TEntry",
            WidgetClass::Spinbox => "TSpinbox",
            WidgetClass::Combobox => "TCombobox",
            WidgetClass::Notebook => "TNotebook",
            WidgetClass::TabItem => "TabItem.Toolbutton",
            WidgetClass::ListItem => "ListItem.TFrame",
            WidgetClass::CalendarDay => "CalendarDay.Toolbutton",
            WidgetClass::Label => "TLabel",
            WidgetClass::Labelframe => "TLabelframe",
            WidgetClass::Frame => "TFrame",
            WidgetClass::Scale => "TScale",
            WidgetClass::Scrollbar => "TScrollbar",
            WidgetClass::Progressbar => "TProgressbar",
            WidgetClass::Separator => "TSeparator",
            WidgetClass::Sizegrip => "TSizegrip",
            WidgetClass::Treeview => "Treeview",
            WidgetClass::Panedwindow => "TPanedwindow",
            WidgetClass::Other(name) => name,
        }
    }

    /// Resolve a toolkit class name, e.g. `TButton` or `Horizontal.TScale`.
    ///
    /// Matching is case-insensitive. A name with style prefixes is resolved by
    /// its longest known suffix. Unknown names become [WidgetClass::Other].
    pub fn from_native(name: &str) -> Self {
        let name = name.trim();
        let mut suffix = name;
        loop {
            if let Some(class) = Self::KNOWN
                .iter()
                .find(|class| class.class_name().eq_ignore_ascii_case(suffix))
            {
                return class.clone();
            }
            match suffix.split_once('.') {
                Some((_, rest)) if !rest.is_empty() => suffix = rest,
                _ => return WidgetClass::Other(name.to_string()),
            }
        }
    }

    /// Orientation used when neither the descriptor nor the caller names one.
    pub fn default_orientation(&self) -> Option<Orientation> {
        match self {
            WidgetClass::Scrollbar | WidgetClass::Panedwindow => Some(Orientation::Vertical),
            WidgetClass::Scale | WidgetClass::Progressbar | WidgetClass::Separator => {
                Some(Orientation::Horizontal)
            }
            _ => None,
        }
    }

    /// Whether the class lays out along an axis.
    pub fn is_oriented(&self) -> bool {
        self.default_orientation().is_some()
    }
}

impl Display for WidgetClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl Serialize for WidgetClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.class_name())
    }
}

impl<'de> Deserialize<'de> for WidgetClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(WidgetClass::from_native(&name))
    }
}

/// A named structural look, independent of color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The solid look every class provides.
    #[default]
    Default,
    /// Colored border on the surface.
    Outline,
    /// Text-only, link-like.
    Link,
    /// Transparent until hovered.
    Ghost,
    /// Accent background with contrasting text.
    Inverse,
    /// Rounded ends.
    Rounded,
    /// Diagonal stripes.
    Striped,
    /// Square ends.
    Squared,
    /// Dashed focus frame.
    Focusframe,
    /// Fully rounded selection.
    Pill,
    /// A variant the engine does not know.
    Other(String),
}

impl Variant {
    /// Every known variant.
    pub const KNOWN: [Variant; 10] = [
        Variant::Default,
        Variant::Outline,
        Variant::Link,
        Variant::Ghost,
        Variant::Inverse,
        Variant::Rounded,
        Variant::Striped,
        Variant::Squared,
        Variant::Focusframe,
        Variant::Pill,
    ];

    /// Lowercase name.
    pub fn as_str(&self) -> &str {
        match self {
            Variant::Default => "default",
            Variant::Outline => "outline",
            Variant::Link => "link",
            Variant::Ghost => "ghost",
            Variant::Inverse => "inverse",
            Variant::Rounded => "rounded",
            Variant::Striped => "striped",
            Variant::Squared => "squared",
            Variant::Focusframe => "focusframe",
            Variant::Pill => "pill",
            Variant::Other(name) => name,
        }
    }

    /// Look a variant up by name; unknown names become [Variant::Other].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::KNOWN
            .iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| Variant::Other(name.to_ascii_lowercase()))
    }

    /// The style-name segment, e.g. `Outline`. [Variant::Default] has none.
    pub fn segment(&self) -> Option<String> {
        match self {
            Variant::Default => None,
            other => Some(title_case(other.as_str())),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Variant::from_name(&name))
    }
}

/// Layout axis of oriented widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// The style-name segment.
    pub fn segment(self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        }
    }

    /// Parse `horizontal`/`vertical` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Whether this is [Orientation::Horizontal].
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_names_resolve() {
        assert_eq!(WidgetClass::from_native("TButton"), WidgetClass::Button);
        assert_eq!(WidgetClass::from_native("tprogressbar"), WidgetClass::Progressbar);
        assert_eq!(WidgetClass::from_native("Horizontal.TScale"), WidgetClass::Scale);
        assert_eq!(WidgetClass::from_native("primary.Roundtoggle.Toolbutton"), WidgetClass::Roundtoggle);
        assert_eq!(WidgetClass::from_native("Canvas"), WidgetClass::Other("Canvas".into()));
    }

    #[test]
    fn class_names_round_trip() {
        for class in WidgetClass::KNOWN {
            assert_eq!(WidgetClass::from_native(class.class_name()), class);
        }
    }

    #[test]
    fn variant_segments() {
        assert_eq!(Variant::Default.segment(), None);
        assert_eq!(Variant::from_name("Outline").segment().as_deref(), Some("Outline"));
        assert_eq!(Variant::from_name("nonexistent-variant"), Variant::Other("nonexistent-variant".into()));
    }

    #[test]
    fn default_orientations() {
        assert_eq!(WidgetClass::Scrollbar.default_orientation(), Some(Orientation::Vertical));
        assert_eq!(WidgetClass::Scale.default_orientation(), Some(Orientation::Horizontal));
        assert_eq!(WidgetClass::Button.default_orientation(), None);
    }
}
