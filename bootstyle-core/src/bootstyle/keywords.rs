// SPDX-License-Identifier: LGPL-3.0-only

use bootstyle_theme::ColorToken;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::widget::{Orientation, Variant, WidgetClass};

/// Widget-name aliases, matched as whole words.
const CLASS_ALIASES: &[&str] = &[
    "roundtoggle", "round", "toggle", "squaretoggle", "square", "toolbutton", "toolbtn",
    "menubutton", "menubtn", "buttongroup", "btngroup", "checkbutton", "check", "radiobutton",
    "radio", "button", "btn", "labelframe", "lblframe", "label", "lbl", "entry", "spinbox",
    "combobox", "combo", "notebook", "tabitem", "tab", "listitem", "calendarday", "calendar",
    "day", "frame", "scale", "scrollbar", "progressbar", "progress", "separator", "sep",
    "sizegrip", "treeview", "tree", "panedwindow", "paned",
];

fn class_for_alias(alias: &str) -> Option<WidgetClass> {
    let class = match alias {
        "roundtoggle" | "round" | "toggle" => WidgetClass::Roundtoggle,
        "squaretoggle" | "square" => WidgetClass::Squaretoggle,
        "toolbutton" | "toolbtn" => WidgetClass::Toolbutton,
        "menubutton" | "menubtn" => WidgetClass::Menubutton,
        "buttongroup" | "btngroup" => WidgetClass::ButtonGroup,
        "checkbutton" | "check" => WidgetClass::Checkbutton,
        "radiobutton" | "radio" => WidgetClass::Radiobutton,
        "button" | "btn" => WidgetClass::Button,
        "labelframe" | "lblframe" => WidgetClass::Labelframe,
        "label" | "lbl" => WidgetClass::Label,
        "entry" => WidgetClass::Entry,
        "spinbox" => WidgetClass::Spinbox,
        "combobox" | "combo" => WidgetClass::Combobox,
        "notebook" => WidgetClass::Notebook,
        "tabitem" | "tab" => WidgetClass::TabItem,
        "listitem" => WidgetClass::ListItem,
        "calendarday" | "calendar" | "day" => WidgetClass::CalendarDay,
        "frame" => WidgetClass::Frame,
        "scale" => WidgetClass::Scale,
        "scrollbar" => WidgetClass::Scrollbar,
        "progressbar" | "progress" => WidgetClass::Progressbar,
        "separator" | "sep" => WidgetClass::Separator,
        "sizegrip" => WidgetClass::Sizegrip,
        "treeview" | "tree" => WidgetClass::Treeview,
        "panedwindow" | "paned" => WidgetClass::Panedwindow,
        _ => return None,
    };
    Some(class)
}

fn word_pattern<'a>(words: impl Iterator<Item = &'a str>) -> Regex {
    let alternation = words.map(regex::escape).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("keyword pattern")
}

static CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(CLASS_ALIASES.iter().copied()));

static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(ColorToken::ACCENTS.iter().map(|token| token.as_str())));

static VARIANT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    word_pattern(
        Variant::KNOWN
            .iter()
            .filter(|variant| **variant != Variant::Default)
            .map(Variant::as_str),
    )
});

static ORIENTATION_PATTERN: Lazy<Regex> = Lazy::new(|| word_pattern(["horizontal", "vertical"].into_iter()));

/// The leftmost widget alias in `text`.
pub(super) fn find_class(text: &str) -> Option<WidgetClass> {
    class_for_alias(CLASS_PATTERN.find(text)?.as_str())
}

/// The leftmost accent color in `text`.
pub(super) fn find_color(text: &str) -> Option<ColorToken> {
    ColorToken::from_name(COLOR_PATTERN.find(text)?.as_str())
}

/// The leftmost variant in `text`.
pub(super) fn find_variant(text: &str) -> Option<Variant> {
    VARIANT_PATTERN.find(text).map(|found| Variant::from_name(found.as_str()))
}

/// The leftmost orientation in `text`.
pub(super) fn find_orientation(text: &str) -> Option<Orientation> {
    Orientation::from_name(ORIENTATION_PATTERN.find(text)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_match_whole_words() {
        assert_eq!(find_class("primary-outline-toolbutton"), Some(WidgetClass::Toolbutton));
        assert_eq!(find_class("info-round-toggle"), Some(WidgetClass::Roundtoggle));
        assert_eq!(find_class("danger-rounded"), None);
        assert_eq!(find_class("lblframe"), Some(WidgetClass::Labelframe));
    }

    #[test]
    fn leftmost_match_wins() {
        assert_eq!(find_color("light-dark"), Some(ColorToken::Light));
        assert_eq!(find_variant("link-outline"), Some(Variant::Link));
        assert_eq!(find_variant("rounded"), Some(Variant::Rounded));
        assert_eq!(find_orientation("vertical-horizontal"), Some(Orientation::Vertical));
    }

    #[test]
    fn keywords_are_matched_literally() {
        let pattern = word_pattern(["a.b", "tab"].into_iter());
        assert_eq!(pattern.find("x-a.b-y").map(|found| found.as_str()), Some("a.b"));
        assert!(pattern.find("axb").is_none());
        assert!(pattern.find("tabitem").is_none());
    }
}
