//! Color constants and font size tokens.
//!
//! The game draws from an eight-color earth palette; UI chrome gets its own
//! neutral tokens.

#![allow(dead_code)] // Tokens are populated ahead of use.

use bevy::prelude::*;

// === Game Palette ===

/// Deep moss green — the player mage.
pub const PLAYER: Color = Color::srgb(0.286, 0.329, 0.208);

/// Olive — the apprentice.
pub const APPRENTICE: Color = Color::srgb(0.541, 0.557, 0.282);

/// Pale sand — the arena floor.
pub const ARENA_BACKGROUND: Color = Color::srgb(0.871, 0.749, 0.537);

/// Enemy sprite tints, cycled by variant id.
pub const ENEMY_TINTS: [Color; 4] = [
    Color::srgb(0.565, 0.180, 0.161), // rust red
    Color::srgb(0.365, 0.271, 0.243), // dark umber
    Color::srgb(0.643, 0.396, 0.243), // clay
    Color::srgb(0.565, 0.486, 0.408), // taupe
];

/// Near-black ink tone.
pub const INK: Color = Color::srgb(0.141, 0.090, 0.106);

// === Beam Colors ===

/// Mana ray beam (cool blue, reads as harmless).
pub const MANA_BEAM: Color = Color::srgb(0.35, 0.55, 1.0);

/// Death ray beam (hot red).
pub const DEATH_BEAM: Color = Color::srgb(1.0, 0.25, 0.2);

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/subtitle text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);

/// Button label text color.
pub const BUTTON_TEXT: Color = Color::srgb(0.925, 0.925, 0.925);

// === UI Backgrounds ===

/// Semi-transparent dark overlay for pause/modal screens.
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Panel background (dark, nearly opaque).
pub const PANEL_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.15, 0.95);

/// Panel border (light gray, semi-transparent).
pub const PANEL_BORDER: Color = Color::srgba(0.5, 0.5, 0.6, 0.8);

// === Button Colors ===

pub const BUTTON_BACKGROUND: Color = Color::srgb(0.275, 0.4, 0.75);
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.384, 0.6, 0.82);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(0.239, 0.286, 0.6);

// === Font Size Tokens ===

pub const FONT_SIZE_TITLE: f32 = 72.0;
pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_LABEL: f32 = 32.0;
pub const FONT_SIZE_HUD: f32 = 28.0;
pub const FONT_SIZE_PROMPT: f32 = 24.0;
