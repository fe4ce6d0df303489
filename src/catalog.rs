//! Static catalog: characters, elements, and the standalone action buttons.
//!
//! Everything here is fixed at compile time. The screen, the dispatcher and
//! the renderer all index into these tables.

use ratzilla::ratatui::style::Color;

/// A playable character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    pub name: &'static str,
    pub element: &'static str,
    pub color: Color,
}

/// An elemental type shown in the element section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementType {
    pub name: &'static str,
    pub color: Color,
    pub icon: &'static str,
}

/// One of the standalone buttons in the special actions section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionButton {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: Color,
}

pub const CHARACTERS: [Character; 5] = [
    Character { name: "Zhongli", element: "Geo", color: Color::Rgb(0xF4, 0xD0, 0x3F) },
    Character { name: "Diluc", element: "Pyro", color: Color::Rgb(0xE7, 0x4C, 0x3C) },
    Character { name: "Venti", element: "Anemo", color: Color::Rgb(0x58, 0xD6, 0x8D) },
    Character { name: "Ganyu", element: "Cryo", color: Color::Rgb(0x85, 0xC1, 0xE9) },
    Character { name: "Raiden", element: "Electro", color: Color::Rgb(0xBB, 0x8F, 0xCE) },
];

pub const ELEMENTS: [ElementType; 7] = [
    ElementType { name: "Geo", color: Color::Rgb(0xF3, 0x9C, 0x12), icon: "🗻" },
    ElementType { name: "Pyro", color: Color::Rgb(0xE7, 0x4C, 0x3C), icon: "🔥" },
    ElementType { name: "Anemo", color: Color::Rgb(0x58, 0xD6, 0x8D), icon: "🌪️" },
    ElementType { name: "Cryo", color: Color::Rgb(0x85, 0xC1, 0xE9), icon: "❄️" },
    ElementType { name: "Electro", color: Color::Rgb(0xBB, 0x8F, 0xCE), icon: "⚡" },
    ElementType { name: "Hydro", color: Color::Rgb(0x5D, 0xAD, 0xE2), icon: "💧" },
    ElementType { name: "Dendro", color: Color::Rgb(0x27, 0xAE, 0x60), icon: "🌿" },
];

/// Icon drawn in front of every character button.
pub const CHARACTER_ICON: &str = "⚔️";

pub const WISH: ActionButton = ActionButton {
    title: "Hacer Wish",
    icon: "✨",
    color: Color::Rgb(0xFF, 0x6B, 0x9D),
};

pub const DOMAIN: ActionButton = ActionButton {
    title: "Dominio",
    icon: "🏛️",
    color: Color::Rgb(0x4E, 0xCD, 0xC4),
};

pub const EXPLORE: ActionButton = ActionButton {
    title: "Explorar",
    icon: "🗺️",
    color: Color::Rgb(0x45, 0xB7, 0xD1),
};

pub const OPEN_CHEST: ActionButton = ActionButton {
    title: "Abrir Cofre Legendario",
    icon: "📦",
    color: Color::Rgb(0xFF, 0xD9, 0x3D),
};

// ── Screen copy ────────────────────────────────────────────────

pub const HEADER_TITLE: &str = "⚔️ GENSHIN IMPACT ⚔️";
pub const HEADER_SUBTITLE: &str = "¡Bienvenido a Teyvat, Viajero!";
pub const CHARACTER_SECTION_TITLE: &str = "🎭 Selecciona tu Personaje";
pub const ELEMENT_SECTION_TITLE: &str = "🌟 Elementos de Teyvat";
pub const ACTION_SECTION_TITLE: &str = "🎲 Acciones Especiales";
pub const SELECTION_LABEL_PREFIX: &str = "Personaje actual: ";
/// What the selection label shows while nothing is selected.
pub const NO_SELECTION_LABEL: &str = "Ninguno";

/// Look up a character by exact name.
pub fn character_by_name(name: &str) -> Option<&'static Character> {
    CHARACTERS.iter().find(|c| c.name == name)
}
