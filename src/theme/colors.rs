//! Color constants for the Regency parchment palette.

#![allow(dead_code)]

// === PARCHMENT (Backgrounds) ===
pub const PARCHMENT: &str = "#FDF6E3";
pub const PARCHMENT_DEEP: &str = "#F6ECD4";
pub const LAVENDER_MIST: &str = "#E6E6FA";

// === WISTERIA (Titles, Borders, Accents) ===
pub const WISTERIA: &str = "#6B4C9A";
pub const WISTERIA_DARK: &str = "#563D7C";
pub const WISTERIA_LIGHT: &str = "#C4A7D7";

// === ROSE (Hearts, Celebration) ===
pub const ROSE: &str = "#E8A0BF";
pub const ROSE_DEEP: &str = "#D46A8E";

// === INK (Body Text) ===
pub const INK: &str = "#2B2118";
