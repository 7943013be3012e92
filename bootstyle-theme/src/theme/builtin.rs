//! Built-in themes.
//!
//! Palettes are listed in [ColorToken::ALL](crate::token::ColorToken::ALL) order:
//! primary, secondary, success, info, warning, danger, light, dark, background,
//! foreground, border.

use crate::color::HexColor;
use crate::token::Mode;

use super::Theme;

/// Name of the theme activated when nothing else is configured.
pub const DEFAULT_THEME: &str = "litera";

struct Builtin {
    name: &'static str,
    mode: Mode,
    colors: [u32; 11],
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "litera",
        mode: Mode::Light,
        colors: [
            0x4582ec, 0xadb5bd, 0x02b875, 0x17a2b8, 0xf0ad4e, 0xd9534f, 0xf8f9fa, 0x343a40,
            0xffffff, 0x343a40, 0xbfbfbf,
        ],
    },
    Builtin {
        name: "cosmo",
        mode: Mode::Light,
        colors: [
            0x2780e3, 0x7e8081, 0x3fb618, 0x9954bb, 0xff7518, 0xff0039, 0xf8f9fa, 0x373a3c,
            0xffffff, 0x373a3c, 0xced4da,
        ],
    },
    Builtin {
        name: "flatly",
        mode: Mode::Light,
        colors: [
            0x2c3e50, 0x95a5a6, 0x18bc9c, 0x3498db, 0xf39c12, 0xe74c3c, 0xecf0f1, 0x7b8a8b,
            0xffffff, 0x212529, 0xced4da,
        ],
    },
    Builtin {
        name: "journal",
        mode: Mode::Light,
        colors: [
            0xeb6864, 0xaaaaaa, 0x22b24c, 0x336699, 0xf5e625, 0xf57a00, 0xf8f9fa, 0x222222,
            0xffffff, 0x222222, 0xced4da,
        ],
    },
    Builtin {
        name: "minty",
        mode: Mode::Light,
        colors: [
            0x78c2ad, 0xf3969a, 0x56cc9d, 0x6cc3d5, 0xffce67, 0xff7851, 0xf8f9fa, 0x343a40,
            0xffffff, 0x5a5a5a, 0xced4da,
        ],
    },
    Builtin {
        name: "darkly",
        mode: Mode::Dark,
        colors: [
            0x375a7f, 0x444444, 0x00bc8c, 0x3498db, 0xf39c12, 0xe74c3c, 0xadb5bd, 0x303030,
            0x222222, 0xffffff, 0x222222,
        ],
    },
    Builtin {
        name: "superhero",
        mode: Mode::Dark,
        colors: [
            0x4c9be8, 0x4e5d6c, 0x5cb85c, 0x5bc0de, 0xf0ad4e, 0xd9534f, 0xabb6c2, 0x20374c,
            0x2b3e50, 0xffffff, 0x222222,
        ],
    },
    Builtin {
        name: "solar",
        mode: Mode::Dark,
        colors: [
            0xbc951a, 0x94a2a4, 0x44aca4, 0x3f98d7, 0xd05e2f, 0xd95092, 0xa9bdbd, 0x073642,
            0x002b36, 0xffffff, 0x00252e,
        ],
    },
    Builtin {
        name: "cyborg",
        mode: Mode::Dark,
        colors: [
            0x2a9fd6, 0x555555, 0x77b300, 0x9933cc, 0xff8800, 0xcc0000, 0xadafae, 0x222222,
            0x060606, 0xffffff, 0x060606,
        ],
    },
    Builtin {
        name: "vapor",
        mode: Mode::Dark,
        colors: [
            0x6f42c1, 0xea39b8, 0x3cf281, 0x1ba2f6, 0xffc107, 0xe44c55, 0x44d9e8, 0x170229,
            0x190831, 0x32fbe2, 0x060606,
        ],
    },
];

impl Builtin {
    fn build(&self) -> Theme {
        Theme::from_palette(self.name, self.mode, self.colors.map(HexColor::from_u32))
    }
}

/// Names of every built-in theme, light themes first.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|builtin| builtin.name)
}

/// Build the built-in theme called `name` (case-insensitive).
pub fn theme(name: &str) -> Option<Theme> {
    BUILTINS
        .iter()
        .find(|builtin| builtin.name.eq_ignore_ascii_case(name.trim()))
        .map(Builtin::build)
}

/// Build every built-in theme.
pub fn all() -> Vec<Theme> {
    BUILTINS.iter().map(Builtin::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ColorToken;

    #[test]
    fn default_theme_exists() {
        let theme = theme(DEFAULT_THEME).unwrap();
        assert_eq!(theme.mode(), Mode::Light);
        assert_eq!(theme.color(ColorToken::Primary).to_hex(), "#4582ec");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(theme("Darkly").map(|t| t.is_dark()), Some(true));
        assert!(theme("nope").is_none());
    }

    #[test]
    fn ships_light_and_dark_themes() {
        let themes = all();
        assert_eq!(themes.len(), names().count());
        assert!(themes.iter().any(Theme::is_dark));
        assert!(themes.iter().any(|t| !t.is_dark()));
    }
}
