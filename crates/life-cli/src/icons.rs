//! Named glyphs for drawing live cells.

use life_core::DEFAULT_ICON;
use life_world::Glyphs;
use tracing::warn;

/// Dead cells take the same width as a live cell: a space and a glyph.
const DEAD_CELL: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    pub glyph: char,
    pub description: &'static str,
}

pub const ICONS: &[Icon] = &[
    Icon { name: "aster-1", glyph: '\u{2731}', description: "Asterisk 1" },
    Icon { name: "aster-2", glyph: '\u{2749}', description: "Asterisk 2" },
    Icon { name: "blue-circle", glyph: '\u{23FA}', description: "Blue tile, white circle (default)" },
    Icon { name: "blue-square", glyph: '\u{23F9}', description: "Blue tile, white square" },
    Icon { name: "bug", glyph: '\u{2603}', description: "Bug" },
    Icon { name: "circle-plus", glyph: '\u{2A01}', description: "Circle with a '+'" },
    Icon { name: "circle-x", glyph: '\u{2A02}', description: "Circle with an 'x'" },
    Icon { name: "dot-star", glyph: '\u{272A}', description: "Dot with star" },
    Icon { name: "fat-x", glyph: '\u{2716}', description: "Fat white X" },
    Icon { name: "flower", glyph: '\u{273F}', description: "Flower" },
    Icon { name: "green-x", glyph: '\u{274E}', description: "Green tile with white X" },
    Icon { name: "man-dribble", glyph: '\u{26F9}', description: "Man dribbling ball" },
    Icon { name: "man-yellow", glyph: '\u{26B1}', description: "Little yellow man" },
    Icon { name: "no-entry", glyph: '\u{26D4}', description: "No entry sign" },
    Icon { name: "redhat", glyph: '\u{26D1}', description: "Red hardhat with white cross" },
    Icon { name: "skull-x", glyph: '\u{2620}', description: "Skull and crossbones" },
    Icon { name: "snowflake", glyph: '\u{274A}', description: "Snowflake" },
    Icon { name: "snowman", glyph: '\u{26C4}', description: "Snowman" },
    Icon { name: "square-big", glyph: '\u{2B1C}', description: "Big square" },
    Icon { name: "square-small", glyph: '\u{25A9}', description: "Small square" },
    Icon { name: "star-yellow", glyph: '\u{2B50}', description: "Yellow 5-point star" },
    Icon { name: "star-white", glyph: '\u{2605}', description: "White 5-point star" },
    Icon { name: "star-6pt", glyph: '\u{2736}', description: "6-point star" },
    Icon { name: "star-8pt", glyph: '\u{2738}', description: "8-point star" },
    Icon { name: "whitedot", glyph: '\u{26AA}', description: "White dot" },
];

pub fn lookup(name: &str) -> Option<&'static Icon> {
    ICONS.iter().find(|icon| icon.name == name)
}

/// The named icon, or the default one if the name is unknown
pub fn resolve(name: &str) -> &'static Icon {
    lookup(name).unwrap_or_else(|| {
        warn!("Unknown icon [{}], using {}", name, DEFAULT_ICON);
        default_icon()
    })
}

pub fn default_icon() -> &'static Icon {
    ICONS
        .iter()
        .find(|icon| icon.name == DEFAULT_ICON)
        .unwrap_or(&ICONS[0])
}

impl Icon {
    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            live: format!(" {}", self.glyph),
            dead: DEAD_CELL.to_string(),
        }
    }
}

/// Table of every icon, for `--list-icons`
pub fn listing() -> String {
    let mut out = String::from("Available icons for live cells:\n\nIcon  Name          Description\n----  ------------  -----------\n");
    for icon in ICONS {
        out.push_str(&format!(
            "{}     {:<12}  {}\n",
            icon.glyph, icon.name, icon.description
        ));
    }
    out
}
